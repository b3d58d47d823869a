//! APU unit tests, organized by functionality

use super::*;
use crate::apu::constants::FRAME_STEP_CYCLES;

/// Clock the APU for a number of CPU cycles
pub(crate) fn run_cycles(apu: &mut Apu, cycles: u32) {
    for _ in 0..cycles {
        apu.tick();
    }
}
