// Input module - Controller port and the shared keyboard snapshot
//
// The standard NES controller is an 8-bit parallel-in/serial-out shift
// register. Writing bit 0 of $4016 high latches the live button states
// and resets the read position; subsequent reads of $4016 shift the
// latched bits out one at a time in the order A, B, Select, Start, Up,
// Down, Left, Right. After all eight bits, further reads return 1.
//
// The live button states come from the UI thread: the keyboard handler
// stores them as a single byte behind an atomic, and the port latches a
// copy on strobe. A torn read is impossible (single byte), and each bit
// is independently meaningful anyway.

pub mod keyboard;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Controller button bit positions within the shared byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A = 0,
    B = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
}

/// The live button states shared between the UI and simulation threads
///
/// One atomic byte, bit-mapped per `Button`. The UI thread stores whole
/// snapshots; the controller port loads one on strobe.
#[derive(Clone, Default)]
pub struct SharedButtons {
    state: Arc<AtomicU8>,
}

impl SharedButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot (UI thread)
    pub fn store(&self, buttons: u8) {
        self.state.store(buttons, Ordering::Relaxed);
    }

    /// Load the current snapshot (simulation thread)
    pub fn load(&self) -> u8 {
        self.state.load(Ordering::Relaxed)
    }

    /// Set or clear a single button (UI thread)
    pub fn set_button(&self, button: Button, pressed: bool) {
        let bit = 1u8 << button as u8;
        if pressed {
            self.state.fetch_or(bit, Ordering::Relaxed);
        } else {
            self.state.fetch_and(!bit, Ordering::Relaxed);
        }
    }
}

/// Controller 1 port at $4016
pub struct ControllerPort {
    /// Live button source, written by the UI thread
    buttons: SharedButtons,

    /// Snapshot latched on the last strobe
    snapshot: u8,

    /// Strobe flip-flop; while high, reads keep returning bit 0
    strobe: bool,

    /// Next bit to shift out (0-7, saturating at 8)
    read_index: u8,
}

impl ControllerPort {
    pub fn new() -> Self {
        ControllerPort {
            buttons: SharedButtons::new(),
            snapshot: 0,
            strobe: false,
            read_index: 0,
        }
    }

    /// Attach the button source shared with the UI thread
    pub fn set_buttons(&mut self, buttons: SharedButtons) {
        self.buttons = buttons;
    }

    /// Reset the port's latched state
    pub fn reset(&mut self) {
        self.snapshot = 0;
        self.strobe = false;
        self.read_index = 0;
    }

    /// $4016 write: bit 0 drives the strobe
    ///
    /// While the strobe is high the shift register continuously reloads;
    /// it suffices to latch on the rising write and rewind the index.
    pub fn write_strobe(&mut self, data: u8) {
        self.strobe = data & 0x01 != 0;
        if self.strobe {
            self.snapshot = self.buttons.load();
            self.read_index = 0;
        }
    }

    /// $4016 read: shift out the next button bit
    pub fn read(&mut self) -> u8 {
        if self.read_index > 7 {
            // Drained: the shift register's serial input reads 1
            return 1;
        }

        let bit = (self.snapshot >> self.read_index) & 0x01;
        if !self.strobe {
            self.read_index += 1;
        }
        bit
    }
}

impl Default for ControllerPort {
    fn default() -> Self {
        Self::new()
    }
}
