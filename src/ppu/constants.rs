// PPU timing and memory-geometry constants

/// Visible frame width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Visible frame height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Dots per scanline (0-340)
pub const DOTS_PER_SCANLINE: u16 = 341;

/// Scanlines per frame (0-261)
pub const SCANLINES_PER_FRAME: u16 = 262;

/// First visible scanline
pub const FIRST_VISIBLE_SCANLINE: u16 = 0;

/// Last visible scanline
pub const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render scanline (idle)
pub const POSTRENDER_SCANLINE: u16 = 240;

/// First vertical-blank scanline; vblank is raised at dot 1
pub const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last vertical-blank scanline
pub const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render scanline; status flags are cleared at dot 1
pub const PRERENDER_SCANLINE: u16 = 261;

/// Register-window mirroring mask ($2000-$3FFF repeats every 8 bytes)
pub const PPU_REGISTER_MASK: u16 = 0x0007;

/// Size of one nametable (32x30 tiles plus the 64-byte attribute table)
pub const NAMETABLE_SIZE: usize = 0x400;

/// Size of pattern memory ($0000-$1FFF, from cartridge CHR-ROM)
pub const PATTERN_SIZE: usize = 0x2000;

/// Size of palette RAM
pub const PALETTE_SIZE: usize = 32;

/// Size of object attribute memory (64 sprites x 4 bytes)
pub const OAM_SIZE: usize = 256;

/// PPUSTATUS bit 7: vertical blank
pub const STATUS_VBLANK: u8 = 0x80;

/// PPUSTATUS bit 6: sprite 0 hit
pub const STATUS_SPRITE0_HIT: u8 = 0x40;

/// PPUSTATUS bit 5: sprite overflow
pub const STATUS_OVERFLOW: u8 = 0x20;

/// PPUCTRL bit 7: generate NMI at the start of vblank
pub const CTRL_NMI_ENABLE: u8 = 0x80;

/// PPUCTRL bit 5: sprite size (8x16 when set; unsupported)
pub const CTRL_SPRITE_SIZE: u8 = 0x20;

/// PPUCTRL bit 4: background pattern table select
pub const CTRL_BG_TABLE: u8 = 0x10;

/// PPUCTRL bit 3: sprite pattern table select
pub const CTRL_SPRITE_TABLE: u8 = 0x08;

/// PPUCTRL bit 2: VRAM address increment (+32 when set, +1 otherwise)
pub const CTRL_VRAM_INCREMENT: u8 = 0x04;

/// PPUMASK bit 4: show sprites
pub const MASK_SHOW_SPRITES: u8 = 0x10;

/// PPUMASK bit 3: show background
pub const MASK_SHOW_BACKGROUND: u8 = 0x08;

/// OAM attribute bit 7: vertical flip
pub const OAM_ATTR_VFLIP: u8 = 0x80;

/// OAM attribute bit 6: horizontal flip
pub const OAM_ATTR_HFLIP: u8 = 0x40;

/// OAM attribute bit 5: behind-background priority
pub const OAM_ATTR_BEHIND: u8 = 0x20;
