//! PPU memory tests: nametable mirroring, palette mirrors, CHR protection

use super::*;
use crate::cartridge::Mirroring;

#[test]
fn test_horizontal_mirroring() {
    let mut ppu = Ppu::new();
    ppu.mirroring = Mirroring::Horizontal;

    ppu.write_vram(0x2000, 0x11);
    assert_eq!(ppu.read_vram(0x2400), 0x11, "$2000 and $2400 coincide");

    ppu.write_vram(0x2800, 0x22);
    assert_eq!(ppu.read_vram(0x2C00), 0x22, "$2800 and $2C00 coincide");

    assert_ne!(
        ppu.read_vram(0x2000),
        ppu.read_vram(0x2800),
        "the two pairs are distinct"
    );
}

#[test]
fn test_vertical_mirroring() {
    let mut ppu = Ppu::new();
    ppu.mirroring = Mirroring::Vertical;

    ppu.write_vram(0x2000, 0x33);
    assert_eq!(ppu.read_vram(0x2800), 0x33, "$2000 and $2800 coincide");

    ppu.write_vram(0x2400, 0x44);
    assert_eq!(ppu.read_vram(0x2C00), 0x44, "$2400 and $2C00 coincide");
}

#[test]
fn test_nametable_3000_mirror() {
    let mut ppu = Ppu::new();
    ppu.write_vram(0x2005, 0x99);
    assert_eq!(ppu.read_vram(0x3005), 0x99, "$3000-$3EFF mirrors $2000-$2EFF");
}

#[test]
fn test_palette_mirrors_both_directions() {
    let mut ppu = Ppu::new();

    for (mirror, base) in [
        (0x3F10u16, 0x3F00u16),
        (0x3F14, 0x3F04),
        (0x3F18, 0x3F08),
        (0x3F1C, 0x3F0C),
    ] {
        ppu.write_vram(mirror, 0x2A);
        assert_eq!(
            ppu.read_vram(base),
            0x2A,
            "write to {:#06X} observable at {:#06X}",
            mirror,
            base
        );

        ppu.write_vram(base, 0x15);
        assert_eq!(
            ppu.read_vram(mirror),
            0x15,
            "write to {:#06X} observable at {:#06X}",
            base,
            mirror
        );
    }
}

#[test]
fn test_non_entry0_sprite_palette_is_distinct() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x3F01, 0x01);
    ppu.write_vram(0x3F11, 0x02);

    assert_eq!(ppu.read_vram(0x3F01), 0x01, "$3F11 does not mirror $3F01");
    assert_eq!(ppu.read_vram(0x3F11), 0x02);
}

#[test]
fn test_chr_rom_is_read_only() {
    let mut ppu = ppu_with_solid_tile();
    let before = ppu.read_vram(0x0010);

    ppu.write_vram(0x0010, 0x00);
    assert_eq!(ppu.read_vram(0x0010), before, "pattern memory ignores writes");
}

#[test]
fn test_load_chr() {
    let mut ppu = Ppu::new();
    let mut chr = vec![0u8; PATTERN_SIZE];
    chr[0x1FFF] = 0x7E;
    ppu.load_chr(&chr, Mirroring::Vertical);

    assert_eq!(ppu.read_vram(0x1FFF), 0x7E);
    assert_eq!(ppu.mirroring, Mirroring::Vertical);
}
