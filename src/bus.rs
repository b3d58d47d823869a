// Bus module - Memory bus implementation
//
// The bus multiplexes the 16-bit CPU address space onto the devices. Its
// map is an ordered list of (base address, region) pairs sorted high to
// low; a lookup picks the entry with the greatest base not exceeding the
// queried address and delegates to the owning device.
//
// # NES Memory Map (CPU Address Space)
//
// ```text
// $0000-$1FFF: 2KB work RAM, mirrored every $0800
// $2000-$3FFF: PPU registers, mirrored every 8 bytes
// $4000-$4013: APU registers
// $4014:       OAM DMA (write only)
// $4015:       APU status
// $4016:       Controller 1 (read) / strobe (write)
// $4017:       Controller 2 (read) / APU frame counter (write)
// $4020-$FFFF: Cartridge; program ROM placed so it ends at $FFFF
// ```
//
// Mirroring is each device's own business: RAM folds $0000-$1FFF onto 2KB,
// the PPU folds its window onto 8 registers. The bus does none itself.

use crate::apu::Apu;
use crate::cartridge::{Cartridge, PrgRom};
use crate::error::Fault;
use crate::input::ControllerPort;
use crate::ppu::constants::PPU_REGISTER_MASK;
use crate::ppu::Ppu;
use crate::ram::Ram;

/// The device classes a map entry can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Work RAM with its $0800 mirroring
    Ram,
    /// PPU register window with its 8-byte mirroring
    PpuRegisters,
    /// APU register block ($4000-$4013)
    Apu,
    /// OAM DMA, APU status, and the controller ports ($4014-$401F)
    Io,
    /// Cartridge program ROM (read-only)
    PrgRom,
}

/// Main memory bus
///
/// Owns every memory-mapped device and the ordered map that routes
/// addresses to them. Interrupt lines do not run through the bus: the PPU
/// and APU latch their requests, and the scheduler ferries them to the CPU
/// at instruction boundaries.
pub struct Bus {
    /// (base address, region) pairs sorted high to low
    map: Vec<(u16, Region)>,

    ram: Ram,
    ppu: Ppu,
    apu: Apu,
    controller: ControllerPort,
    prg: PrgRom,
}

impl Bus {
    /// Build the bus around a parsed cartridge
    ///
    /// The PPU receives the cartridge's character ROM and mirroring; the
    /// program ROM is placed so it ends at $FFFF.
    pub fn new(cartridge: &Cartridge) -> Self {
        let prg = PrgRom::new(cartridge);

        let mut ppu = Ppu::new();
        ppu.load_chr(&cartridge.chr_rom, cartridge.mirroring);

        let mut map = vec![
            (0x0000, Region::Ram),
            (0x2000, Region::PpuRegisters),
            (0x4000, Region::Apu),
            (0x4014, Region::Io),
            (prg.base_addr(), Region::PrgRom),
        ];
        // Highest base first, so the lookup can stop at the first hit
        map.sort_by(|a, b| b.0.cmp(&a.0));

        Bus {
            map,
            ram: Ram::new(),
            ppu,
            apu: Apu::new(),
            controller: ControllerPort::new(),
            prg,
        }
    }

    /// The region owning an address: greatest base not exceeding it
    fn region_for(&self, addr: u16) -> Region {
        for &(base, region) in &self.map {
            if addr >= base {
                return region;
            }
        }
        // The map always contains a base-0 entry
        unreachable!("address {:#06X} missed the memory map", addr)
    }

    /// Read a byte from the bus
    pub fn read(&mut self, addr: u16) -> u8 {
        match self.region_for(addr) {
            Region::Ram => self.ram.read(addr),
            Region::PpuRegisters => self.ppu.read_register(addr & PPU_REGISTER_MASK),
            Region::Apu => self.apu.read_register(addr),
            Region::Io => self.read_io(addr),
            Region::PrgRom => self.prg.read(addr),
        }
    }

    /// Write a byte to the bus
    ///
    /// # Errors
    ///
    /// `Fault::WriteToReadOnly` when the address lands in program ROM;
    /// the emulator halts on it.
    pub fn write(&mut self, addr: u16, data: u8) -> Result<(), Fault> {
        match self.region_for(addr) {
            Region::Ram => {
                self.ram.write(addr, data);
                Ok(())
            }
            Region::PpuRegisters => {
                self.ppu.write_register(addr & PPU_REGISTER_MASK, data);
                Ok(())
            }
            Region::Apu => {
                self.apu.write_register(addr, data);
                Ok(())
            }
            Region::Io => {
                self.write_io(addr, data);
                Ok(())
            }
            Region::PrgRom => self.prg.write(addr),
        }
    }

    /// Reads in the $4014-$401F window
    fn read_io(&mut self, addr: u16) -> u8 {
        match addr {
            // $4014 OAMDMA is write-only
            0x4015 => self.apu.read_register(addr),
            0x4016 => self.controller.read(),
            // Upper bus bits: reads of the second port return $40
            0x4017 => 0x40,
            _ => 0,
        }
    }

    /// Writes in the $4014-$401F window
    fn write_io(&mut self, addr: u16, data: u8) {
        match addr {
            0x4014 => self.oam_dma(data),
            0x4015 => self.apu.write_register(addr, data),
            0x4016 => self.controller.write_strobe(data),
            // Controller 2 writes drive the APU frame counter
            0x4017 => self.apu.write_register(addr, data),
            _ => {
                // Unimplemented register bits: benign noise
            }
        }
    }

    /// OAM DMA: copy one 256-byte page of work RAM into PPU OAM
    ///
    /// The copy starts at the current OAMADDR and wraps within OAM. Cycle
    /// stealing is not modelled.
    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let start = self.ppu.oam_addr();
        for i in 0..256u16 {
            let value = self.ram.read(base.wrapping_add(i));
            self.ppu.write_oam(start.wrapping_add(i as u8), value);
        }
    }

    /// Read a 16-bit little-endian word
    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // ========================================
    // Device access for the scheduler and host
    // ========================================

    /// Reference to the PPU
    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Mutable reference to the PPU
    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    /// Reference to the APU
    pub fn apu(&self) -> &Apu {
        &self.apu
    }

    /// Mutable reference to the APU
    pub fn apu_mut(&mut self) -> &mut Apu {
        &mut self.apu
    }

    /// Mutable reference to the controller port
    pub fn controller_mut(&mut self) -> &mut ControllerPort {
        &mut self.controller
    }

    /// Reset the resettable devices (RAM keeps deterministic power-on
    /// contents; ROM and CHR are untouched)
    pub fn reset(&mut self) {
        self.ram.reset();
        self.ppu.reset();
        self.apu.reset();
        self.controller.reset();
    }
}

#[cfg(test)]
impl Bus {
    /// A bus around a blank 32KB NROM cartridge, for unit tests
    pub fn for_tests() -> Self {
        let cartridge = Cartridge {
            prg_rom: vec![0x00; 0x8000],
            chr_rom: vec![0x00; 0x2000],
            mirroring: crate::cartridge::Mirroring::Horizontal,
        };
        Bus::new(&cartridge)
    }

    /// Poke bytes into program ROM, bypassing the read-only check
    pub fn patch_rom(&mut self, addr: u16, bytes: &[u8]) {
        self.prg.patch(addr, bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_read_write_and_mirrors() {
        let mut bus = Bus::for_tests();

        bus.write(0x0000, 0x42).unwrap();
        assert_eq!(bus.read(0x0000), 0x42);
        assert_eq!(bus.read(0x0800), 0x42, "RAM mirror");
        assert_eq!(bus.read(0x1800), 0x42, "last RAM mirror");

        bus.write(0x1FFF, 0x24).unwrap();
        assert_eq!(bus.read(0x07FF), 0x24, "mirror write reaches base RAM");
    }

    #[test]
    fn test_ppu_window_dispatch() {
        let mut bus = Bus::for_tests();

        // Set a VRAM address through $2006 and write through $2007
        bus.write(0x2006, 0x21).unwrap();
        bus.write(0x2006, 0x00).unwrap();
        bus.write(0x2007, 0x7E).unwrap();

        assert_eq!(bus.ppu().read_vram(0x2100), 0x7E);
    }

    #[test]
    fn test_ppu_window_mirroring_through_bus() {
        let mut bus = Bus::for_tests();

        // $3FF6 mirrors $2006
        bus.write(0x3FF6, 0x22).unwrap();
        bus.write(0x3FF6, 0x00).unwrap();
        bus.write(0x3FF7, 0x5A).unwrap(); // $3FF7 mirrors $2007

        assert_eq!(bus.ppu().read_vram(0x2200), 0x5A);
    }

    #[test]
    fn test_rom_read_and_write_fault() {
        let mut bus = Bus::for_tests();
        bus.patch_rom(0x8000, &[0x4C]);

        assert_eq!(bus.read(0x8000), 0x4C);
        assert_eq!(
            bus.write(0x8000, 0x00),
            Err(Fault::WriteToReadOnly { addr: 0x8000 })
        );
        assert_eq!(
            bus.write(0xFFFF, 0x00),
            Err(Fault::WriteToReadOnly { addr: 0xFFFF })
        );
    }

    #[test]
    fn test_16kb_rom_base() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAB; 0x4000],
            chr_rom: vec![0x00; 0x2000],
            mirroring: crate::cartridge::Mirroring::Horizontal,
        };
        let mut bus = Bus::new(&cartridge);

        assert_eq!(bus.read(0xC000), 0xAB, "16KB image starts at $C000");
        assert_eq!(bus.read(0xFFFF), 0xAB);
    }

    #[test]
    fn test_oam_dma_roundtrip() {
        let mut bus = Bus::for_tests();

        // Fill CPU page $0200 with an identifiable ramp
        for i in 0..256u16 {
            bus.write(0x0200 + i, i as u8).unwrap();
        }

        bus.write(0x4014, 0x02).unwrap();

        for i in 0..=255u8 {
            assert_eq!(bus.ppu().read_oam(i), i, "OAM byte {} copied", i);
        }
    }

    #[test]
    fn test_oam_dma_respects_oamaddr() {
        let mut bus = Bus::for_tests();
        bus.write(0x0200, 0xAA).unwrap();
        bus.write(0x02FF, 0xBB).unwrap();

        bus.write(0x2003, 0x10).unwrap(); // OAMADDR = $10
        bus.write(0x4014, 0x02).unwrap();

        assert_eq!(bus.ppu().read_oam(0x10), 0xAA, "copy starts at OAMADDR");
        assert_eq!(bus.ppu().read_oam(0x0F), 0xBB, "and wraps within OAM");
    }

    #[test]
    fn test_controller_port_reads() {
        let mut bus = Bus::for_tests();

        assert_eq!(bus.read(0x4017), 0x40, "port 2 reads return open bus");
        // Port 1 with nothing pressed shifts out zeros
        bus.write(0x4016, 0x01).unwrap();
        bus.write(0x4016, 0x00).unwrap();
        assert_eq!(bus.read(0x4016), 0x00);
    }

    #[test]
    fn test_read_u16() {
        let mut bus = Bus::for_tests();
        bus.write(0x0000, 0x34).unwrap();
        bus.write(0x0001, 0x12).unwrap();
        assert_eq!(bus.read_u16(0x0000), 0x1234);
    }

    #[test]
    fn test_unmapped_io_reads_zero() {
        let mut bus = Bus::for_tests();
        assert_eq!(bus.read(0x4018), 0);
        bus.write(0x401F, 0xFF).unwrap(); // ignored, no fault
        assert_eq!(bus.read(0x401F), 0);
    }
}
