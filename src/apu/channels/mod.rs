//! The APU tone generators

mod pulse;
mod triangle;

pub use pulse::PulseChannel;
pub use triangle::TriangleChannel;
