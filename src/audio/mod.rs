// Audio module - sound synthesis and host output
//
// The APU does not produce samples; it publishes per-channel tone
// parameters (frequency, duty, amplitude, enable, remaining duration).
// The renderer here samples those parameters at 44.1 kHz with its own
// phase accumulators and counts note durations down itself.

mod output;

pub use output::{AudioConfig, AudioOutput};

use crate::apu::SynthControl;

/// Renderer sample rate in Hz
pub const SAMPLE_RATE: u32 = 44_100;

/// Phase-tracking synthesizer over the shared tone parameters
///
/// Lives inside the audio callback. Each channel keeps a phase in [0, 1)
/// advanced by frequency/sample_rate per sample; a pulse outputs +/-1
/// around its duty fraction, the triangle a linear ramp.
pub struct Synth {
    control: SynthControl,
    master_volume: f32,
    sample_period: f32,
    pulse1_phase: f32,
    pulse2_phase: f32,
    triangle_phase: f32,
}

impl Synth {
    pub fn new(control: SynthControl, master_volume: f32) -> Self {
        Self {
            control,
            master_volume,
            sample_period: 1.0 / SAMPLE_RATE as f32,
            pulse1_phase: 0.0,
            pulse2_phase: 0.0,
            triangle_phase: 0.0,
        }
    }

    /// Fill an output buffer with mono f32 samples
    pub fn render(&mut self, buffer: &mut [f32]) {
        let sample_period = self.sample_period;

        // One lock per buffer; durations count down in place
        let control = self.control.clone();
        control.with_mut(|params| {
            for sample in buffer.iter_mut() {
                let mut mixed = 0.0f32;

                if params.pulse1.enabled && params.pulse1.remaining > 0.0 {
                    let wave = if self.pulse1_phase < params.pulse1.duty {
                        1.0
                    } else {
                        -1.0
                    };
                    mixed += wave * params.pulse1.amplitude;
                    params.pulse1.remaining -= sample_period;
                }
                self.pulse1_phase =
                    (self.pulse1_phase + params.pulse1.frequency * sample_period).fract();

                if params.pulse2.enabled && params.pulse2.remaining > 0.0 {
                    let wave = if self.pulse2_phase < params.pulse2.duty {
                        1.0
                    } else {
                        -1.0
                    };
                    mixed += wave * params.pulse2.amplitude;
                    params.pulse2.remaining -= sample_period;
                }
                self.pulse2_phase =
                    (self.pulse2_phase + params.pulse2.frequency * sample_period).fract();

                if params.triangle.enabled && params.triangle.remaining > 0.0 {
                    // Linear ramp up then down over one period
                    let wave = if self.triangle_phase < 0.5 {
                        4.0 * self.triangle_phase - 1.0
                    } else {
                        3.0 - 4.0 * self.triangle_phase
                    };
                    mixed += wave * params.triangle.amplitude;
                    params.triangle.remaining -= sample_period;
                }
                self.triangle_phase =
                    (self.triangle_phase + params.triangle.frequency * sample_period).fract();

                // Three channels at full swing sum to 3.0
                *sample = mixed * self.master_volume / 3.0;
            }
        });
    }
}
