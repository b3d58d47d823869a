//! Shared building blocks of the APU channels

mod envelope;
mod frame_sequencer;
mod length_counter;
mod sweep;

pub use envelope::Envelope;
pub use frame_sequencer::{FrameSequencer, FrameTick, SequencerMode};
pub use length_counter::LengthCounter;
pub use sweep::Sweep;
