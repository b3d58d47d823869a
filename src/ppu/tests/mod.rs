//! PPU unit tests, organized by functionality

use super::*;

// ========================================
// Test Helper Functions
// ========================================

/// Write through the register window, applying the 8-byte mirroring the
/// bus would apply
pub(crate) fn reg_write(ppu: &mut Ppu, addr: u16, data: u8) {
    ppu.write_register(addr & PPU_REGISTER_MASK, data);
}

/// Read through the register window
pub(crate) fn reg_read(ppu: &mut Ppu, addr: u16) -> u8 {
    ppu.read_register(addr & PPU_REGISTER_MASK)
}

/// Run the PPU forward to a specific scanline and dot
pub(crate) fn tick_to(ppu: &mut Ppu, scanline: u16, dot: u16) {
    // One frame is a hard upper bound on the distance
    for _ in 0..(DOTS_PER_SCANLINE as u32 * SCANLINES_PER_FRAME as u32 + 1) {
        if ppu.scanline() == scanline && ppu.dot() == dot {
            return;
        }
        ppu.tick().expect("tick faulted");
    }
    panic!("never reached scanline {} dot {}", scanline, dot);
}

/// A PPU with a recognizable pattern tile 1: all pixels plane value 1
pub(crate) fn ppu_with_solid_tile() -> Ppu {
    let mut ppu = Ppu::new();
    let mut chr = vec![0u8; PATTERN_SIZE];
    // Tile 1, plane 0 rows all set, plane 1 clear
    for row in 0..8 {
        chr[0x10 + row] = 0xFF;
    }
    ppu.load_chr(&chr, crate::cartridge::Mirroring::Horizontal);
    ppu
}

// ========================================
// Test Modules
// ========================================

mod memory;
mod registers;
