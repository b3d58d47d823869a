// System-level integration tests: the bus map, PPU register window, OAM
// DMA, vblank/NMI delivery, controller reads, and the scheduler ratios.

mod common;

use common::{run_until_pc, RomBuilder};
use famicore::input::{Button, SharedButtons};
use famicore::SharedFrame;

// ========================================
// PPU register window and VRAM through the bus
// ========================================

#[test]
fn ppu_register_window_mirrors_every_8_bytes() {
    // For a sample of addresses, `a` and $2000 + (a-$2000) % 8 are
    // indistinguishable on write and read
    for base in [0x2000u16, 0x2328, 0x3000, 0x3FF8] {
        let mut nes = RomBuilder::new().build_nes();
        let bus = nes.bus_mut();

        // Write a VRAM address through the mirror, data through the base
        bus.write(base + 6, 0x21).unwrap();
        bus.write(base + 6, 0x50).unwrap();
        bus.write(0x2007, 0x99).unwrap();

        // Read back through yet another mirror
        bus.write(0x3FEE, 0x21).unwrap();
        bus.write(0x3FEE, 0x50).unwrap();
        let _ = bus.read(0x3FEF); // buffer prime
        assert_eq!(bus.read(0x3FEF), 0x99, "window mirror at {:#06X}", base);
    }
}

#[test]
fn palette_mirrors_visible_through_ppudata() {
    let mut nes = RomBuilder::new().build_nes();
    let bus = nes.bus_mut();

    // Write $3F10 through PPUDATA
    bus.write(0x2006, 0x3F).unwrap();
    bus.write(0x2006, 0x10).unwrap();
    bus.write(0x2007, 0x2C).unwrap();

    // Read $3F00: palette reads bypass the buffer
    bus.write(0x2006, 0x3F).unwrap();
    bus.write(0x2006, 0x00).unwrap();
    assert_eq!(bus.read(0x2007), 0x2C, "$3F10 mirrors $3F00");
}

#[test]
fn ppudata_sequence_roundtrip_with_buffer_delay() {
    let mut nes = RomBuilder::new().build_nes();
    let bus = nes.bus_mut();

    // Store a sequence at $2400
    bus.write(0x2006, 0x24).unwrap();
    bus.write(0x2006, 0x00).unwrap();
    for value in [0xDE, 0xAD, 0xBE, 0xEF] {
        bus.write(0x2007, value).unwrap();
    }

    // Reading it back honors the one-byte delay
    bus.write(0x2006, 0x24).unwrap();
    bus.write(0x2006, 0x00).unwrap();
    let _ = bus.read(0x2007);
    assert_eq!(bus.read(0x2007), 0xDE);
    assert_eq!(bus.read(0x2007), 0xAD);
    assert_eq!(bus.read(0x2007), 0xBE);
    assert_eq!(bus.read(0x2007), 0xEF);
}

// ========================================
// OAM DMA
// ========================================

#[test]
fn oam_dma_roundtrips_a_full_page() {
    let mut nes = RomBuilder::new().build_nes();
    let bus = nes.bus_mut();

    for i in 0..256u16 {
        bus.write(0x0200 + i, i as u8).unwrap();
    }
    bus.write(0x4014, 0x02).unwrap();

    for i in 0..=255u8 {
        assert_eq!(nes.bus().ppu().read_oam(i), i);
    }
}

// ========================================
// Vblank and NMI
// ========================================

#[test]
fn vblank_flag_rises_at_scanline_241() {
    let mut nes = RomBuilder::new().build_nes();

    // Step the PPU alone to just past scanline 241 dot 1
    let dots = 241 * 341 + 2;
    for _ in 0..dots {
        nes.bus_mut().ppu_mut().tick().unwrap();
    }

    let status = nes.bus_mut().read(0x2002);
    assert_ne!(status & 0x80, 0, "vblank bit set");

    let status = nes.bus_mut().read(0x2002);
    assert_eq!(status & 0x80, 0, "cleared by the read");
}

#[test]
fn nmi_enters_handler_during_vblank() {
    // With PPUCTRL bit 7 set, reaching scanline 241 dot 1 must route the
    // CPU through the NMI vector
    let mut nes = RomBuilder::new()
        .with_reset_vector(0x8000)
        .with_nmi_vector(0x9000)
        .with_bytes(0x8000, &[0xA9, 0x80]) // LDA #$80
        .with_bytes(0x8002, &[0x8D, 0x00, 0x20]) // STA $2000
        .with_bytes(0x8005, &[0x4C, 0x05, 0x80]) // JMP $8005 (spin)
        .with_bytes(0x9000, &[0xA2, 0x99]) // handler: LDX #$99
        .build_nes();

    // One full field is plenty to reach vblank
    for _ in 0..30_000 {
        nes.tick().unwrap();
        if nes.cpu().x == 0x99 {
            break;
        }
    }

    assert_eq!(nes.cpu().x, 0x99, "NMI handler ran");
}

#[test]
fn no_nmi_when_disabled() {
    let mut nes = RomBuilder::new()
        .with_reset_vector(0x8000)
        .with_nmi_vector(0x9000)
        .with_bytes(0x8000, &[0x4C, 0x00, 0x80]) // spin without enabling NMI
        .with_bytes(0x9000, &[0xA2, 0x99])
        .build_nes();

    for _ in 0..30_000 {
        nes.tick().unwrap();
    }
    assert_ne!(nes.cpu().x, 0x99, "handler must not run");
}

#[test]
fn published_frame_swaps_at_vblank() {
    let mut nes = RomBuilder::new().build_nes();
    let shared = SharedFrame::new();
    nes.set_shared_frame(shared.clone());

    let before = shared.snapshot();

    // Run past one vblank edge
    while nes.bus().ppu().frame_count() == 0 {
        nes.tick().unwrap();
    }

    let after = shared.snapshot();
    assert_eq!(
        after,
        nes.bus().ppu().frame().to_vec(),
        "published frame is byte-identical to the building frame"
    );
    // The power-on frame differs from the shared handle's initial fill
    // only if rendering ran; equality of length is the invariant here
    assert_eq!(before.len(), after.len());
}

// ========================================
// Controller
// ========================================

#[test]
fn controller_reads_shift_latched_buttons() {
    let mut nes = RomBuilder::new().build_nes();
    let buttons = SharedButtons::new();
    nes.set_shared_buttons(buttons.clone());

    buttons.set_button(Button::A, true);
    buttons.set_button(Button::Down, true);

    let bus = nes.bus_mut();
    bus.write(0x4016, 0x01).unwrap();
    bus.write(0x4016, 0x00).unwrap();

    let bits: Vec<u8> = (0..8).map(|_| bus.read(0x4016)).collect();
    assert_eq!(bits, vec![1, 0, 0, 0, 0, 1, 0, 0], "A then Down");

    assert_eq!(bus.read(0x4016), 1, "drained port reads 1");
    assert_eq!(bus.read(0x4017), 0x40, "port 2 returns the bus bits");
}

#[test]
fn controller_program_polling() {
    // The canonical 8-read polling loop, from the program's side
    let mut nes = RomBuilder::new()
        .with_reset_vector(0x8000)
        .with_bytes(0x8000, &[0xA9, 0x01]) // LDA #$01
        .with_bytes(0x8002, &[0x8D, 0x16, 0x40]) // STA $4016
        .with_bytes(0x8005, &[0xA9, 0x00]) // LDA #$00
        .with_bytes(0x8007, &[0x8D, 0x16, 0x40]) // STA $4016
        .with_bytes(0x800A, &[0xAD, 0x16, 0x40]) // LDA $4016 (A button)
        .with_bytes(0x800D, &[0x85, 0x10]) // STA $10
        .build_nes();

    let buttons = SharedButtons::new();
    nes.set_shared_buttons(buttons.clone());
    buttons.set_button(Button::A, true);

    run_until_pc(&mut nes, 0x800F, 500);
    assert_eq!(nes.bus_mut().read(0x0010), 0x01, "program saw the A press");
}

// ========================================
// Scheduler ratios
// ========================================

#[test]
fn scheduler_holds_3_to_1_ppu_ratio() {
    let mut nes = RomBuilder::new().build_nes();

    let start =
        nes.bus().ppu().scanline() as u64 * 341 + nes.bus().ppu().dot() as u64;

    const N: u64 = 5000;
    for _ in 0..N {
        nes.tick().unwrap();
    }

    let end = nes.bus().ppu().frame_count() * 89342
        + nes.bus().ppu().scanline() as u64 * 341
        + nes.bus().ppu().dot() as u64;

    assert_eq!(end - start, 3 * N, "PPU dots advance exactly 3 per tick");
}
