// Error module - Fatal simulation faults
//
// The tick loop carries errors instead of panicking: any of these faults
// aborts the simulation worker, and the process exits non-zero with the
// diagnostic printed. Recoverable host failures (audio, window) are handled
// where they occur and never reach this type.

/// Fatal fault raised from inside the simulation loop
///
/// Every variant terminates the emulator. See the error taxonomy:
/// - Decode errors: unknown opcode, unsupported PPU mode
/// - Memory-map errors: write to read-only program ROM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The CPU fetched an opcode outside the documented 6502 set
    UnknownOpcode { opcode: u8, pc: u16 },

    /// A write targeted the read-only program-ROM region
    WriteToReadOnly { addr: u16 },

    /// The PPU was asked to render 8x16 sprites (PPUCTRL bit 5)
    UnsupportedSpriteSize,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode {:#04X} at {:#06X}", opcode, pc)
            }
            Fault::WriteToReadOnly { addr } => {
                write!(f, "write to read-only memory at {:#06X}", addr)
            }
            Fault::UnsupportedSpriteSize => {
                write!(f, "8x16 sprite mode is not supported")
            }
        }
    }
}

impl std::error::Error for Fault {}
