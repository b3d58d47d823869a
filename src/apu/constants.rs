// APU timing and lookup constants

/// NTSC CPU clock in Hz, the reference for period-to-frequency conversion
pub const CPU_CLOCK_HZ: f32 = 1_789_773.0;

/// APU cycles between frame-sequencer steps
pub const FRAME_STEP_CYCLES: u32 = 3728;

/// Length counter load table
///
/// Maps the 5-bit load field of the period-high registers to the counter
/// value in frame halves.
pub const LENGTH_COUNTER_TABLE: [u8; 32] = [
    10, 254, 20, 2, 40, 4, 80, 6, 160, 8, 60, 10, 14, 12, 26, 14, 12, 16, 24, 18, 48, 20, 96, 22,
    192, 24, 72, 26, 16, 28, 32, 30,
];

/// Pulse duty cycles as a fraction of the period spent high
pub const DUTY_FRACTIONS: [f32; 4] = [0.125, 0.25, 0.50, 0.75];

/// Half-frame events per second, the unit length counters are loaded in
pub const HALF_FRAMES_PER_SECOND: f32 = 240.0;

/// Sweep units refuse to lower the period below this
pub const SWEEP_MIN_PERIOD: u16 = 8;

/// Sweep units refuse to raise the period above this (11-bit timer)
pub const SWEEP_MAX_PERIOD: u16 = 0x7FF;
