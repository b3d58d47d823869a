// famicore - a cycle-driven NES emulator core
//
// Three devices co-simulated on a common clock: a 6502 CPU, the 2C02
// picture processing unit, and the 2A03 audio unit, joined by a
// memory-mapped bus and stepped by one tick loop at three PPU dots and
// one APU cycle per CPU cycle.

pub mod apu;
#[cfg(feature = "audio")]
pub mod audio;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod error;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export the main types for convenience
pub use apu::{Apu, SynthControl};
#[cfg(feature = "audio")]
pub use audio::{AudioConfig, AudioOutput};
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use cpu::{Cpu, Interrupt};
pub use display::{FrameBuffer, SharedFrame, WindowConfig};
pub use emulator::{run_worker, EmulatorConfig, Nes};
pub use error::Fault;
pub use input::{ControllerPort, SharedButtons};
pub use ppu::Ppu;
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // All standalone components can be instantiated
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _apu = Apu::new();
        let _ram = Ram::new();
        let _controller = ControllerPort::new();
        let _frame = SharedFrame::new();
        let _buttons = SharedButtons::new();
    }
}
