// Emulator module - system wiring and the tick loop
//
// `Nes` wires the CPU, bus-resident devices, and interrupt plumbing into
// one machine stepped on the CPU clock: each iteration runs one CPU tick,
// three PPU dots, and one APU cycle, which pins the 3:1 and 1:1 device
// ratios by construction. Interrupt requests latched by the PPU and APU
// are ferried to the CPU here, at the instruction boundary, instead of
// through device back-pointers.
//
// `run_worker` is the simulation thread's whole life: batch one video
// field, sleep off the remainder of its wall-clock budget, repeat until
// the shutdown flag rises or a fatal fault ends the run.

mod config;

pub use config::EmulatorConfig;

use crate::apu::SynthControl;
use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, Interrupt};
use crate::display::framebuffer::SharedFrame;
use crate::error::Fault;
use crate::input::SharedButtons;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// NTSC field duration: 262 scanlines of 341 dots at 3 dots per CPU cycle
/// against the 1.789773 MHz CPU clock, about 60.1 fields per second
const FIELD_DURATION: Duration = Duration::from_micros(16_639);

/// The wired NES system
pub struct Nes {
    cpu: Cpu,
    bus: Bus,
}

impl Nes {
    /// Build a machine around a cartridge and pulse reset
    ///
    /// The first CPU tick will service the reset and fetch the program's
    /// entry point from the reset vector.
    pub fn new(cartridge: &Cartridge) -> Self {
        let mut nes = Nes {
            cpu: Cpu::new(),
            bus: Bus::new(cartridge),
        };
        nes.cpu.signal(Interrupt::Reset);
        nes
    }

    /// Attach the frame handle shared with the UI thread
    pub fn set_shared_frame(&mut self, frame: SharedFrame) {
        self.bus.ppu_mut().set_shared_frame(frame);
    }

    /// Attach the controller byte shared with the UI thread
    pub fn set_shared_buttons(&mut self, buttons: SharedButtons) {
        self.bus.controller_mut().set_buttons(buttons);
    }

    /// Attach the tone parameters shared with the sound renderer
    pub fn set_synth(&mut self, synth: SynthControl) {
        self.bus.apu_mut().set_synth(synth);
    }

    /// Pulse the reset line
    ///
    /// Devices reinitialize and the CPU takes the reset vector on its
    /// next tick.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.signal(Interrupt::Reset);
    }

    /// Advance the machine by one CPU clock
    ///
    /// Returns true when the PPU finished a field during this iteration.
    ///
    /// # Errors
    ///
    /// Any fatal fault from the devices (unknown opcode, ROM write,
    /// unsupported sprite mode); the machine should not be ticked again
    /// after one.
    pub fn tick(&mut self) -> Result<bool, Fault> {
        self.cpu.tick(&mut self.bus)?;

        let frames_before = self.bus.ppu().frame_count();
        for _ in 0..3 {
            self.bus.ppu_mut().tick()?;
        }
        let frame_done = self.bus.ppu().frame_count() != frames_before;

        self.bus.apu_mut().tick();

        // Interrupts travel through flags, polled here once per clock
        if self.bus.ppu_mut().take_nmi() {
            self.cpu.signal(Interrupt::Nmi);
        }
        if self.bus.apu().irq_pending() {
            self.cpu.signal(Interrupt::Irq);
        }

        Ok(frame_done)
    }

    /// Tick until the current field completes
    pub fn run_field(&mut self) -> Result<(), Fault> {
        while !self.tick()? {}
        Ok(())
    }

    /// Reference to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable reference to the CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Reference to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable reference to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

/// The simulation worker loop
///
/// Runs fields back to back, sleeping off whatever remains of each
/// field's wall-clock budget so 60 fields per second emerge at steady
/// state. Returns when the shutdown flag rises, or with the fault that
/// ended the run; either way the flag is raised on the way out so the UI
/// thread follows.
pub fn run_worker(mut nes: Nes, shutdown: Arc<AtomicBool>) -> Result<(), Fault> {
    let mut next_field = Instant::now() + FIELD_DURATION;

    while !shutdown.load(Ordering::Relaxed) {
        if let Err(fault) = nes.run_field() {
            shutdown.store(true, Ordering::Relaxed);
            return Err(fault);
        }

        let now = Instant::now();
        if next_field > now {
            std::thread::sleep(next_field - now);
        }
        next_field += FIELD_DURATION;

        // A long stall (debugger, suspend) should not cause a sprint
        if next_field < Instant::now() {
            next_field = Instant::now() + FIELD_DURATION;
        }
    }

    shutdown.store(true, Ordering::Relaxed);
    Ok(())
}
