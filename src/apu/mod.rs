// APU module - Audio Processing Unit implementation
//
// The 2A03's sound hardware, reduced to the channels the target games
// need: two pulse channels and the triangle. The APU interprets register
// writes, runs the frame sequencer off the CPU clock, and publishes a
// low-dimensional description of each tone (frequency, duty, amplitude,
// enable, remaining duration) for the sound renderer, which synthesizes
// samples at its own rate with its own phase.
//
// ## Register Map
//
// | Address | Description                               |
// |---------|-------------------------------------------|
// | $4000   | Pulse 1 duty and envelope                 |
// | $4001   | Pulse 1 sweep                             |
// | $4002   | Pulse 1 period low                        |
// | $4003   | Pulse 1 period high + length load         |
// | $4004-7 | Pulse 2, same layout                      |
// | $400A   | Triangle period low                       |
// | $400B   | Triangle period high + length load        |
// | $4015   | Channel enables (R: status)               |
// | $4017   | Frame sequencer mode / IRQ inhibit        |
//
// Noise ($400C-$400F) and DMC ($4010-$4013) are not modelled; writes to
// them are benign noise.

pub mod channels;
pub mod components;
pub mod constants;

use channels::{PulseChannel, TriangleChannel};
use components::{FrameSequencer, FrameTick};
use std::sync::{Arc, Mutex};

/// One channel's tone description for the sound renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelParams {
    /// Tone frequency in Hz
    pub frequency: f32,
    /// Fraction of the period spent high (pulse channels)
    pub duty: f32,
    /// Output level, 0.0-1.0
    pub amplitude: f32,
    /// Whether the channel should sound at all
    pub enabled: bool,
    /// Seconds until the length counter silences the note
    pub remaining: f32,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            duty: 0.5,
            amplitude: 0.0,
            enabled: false,
            remaining: 0.0,
        }
    }
}

/// The full synthesizer configuration: one entry per channel
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthParams {
    pub pulse1: ChannelParams,
    pub pulse2: ChannelParams,
    pub triangle: ChannelParams,
}

/// Handle to the tone parameters shared with the sound renderer
///
/// The APU refreshes it whenever a register write or sequencer action
/// changes a tone; the renderer's callback reads it per buffer and may
/// count `remaining` down in place.
#[derive(Clone, Default)]
pub struct SynthControl {
    inner: Arc<Mutex<SynthParams>>,
}

impl SynthControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published parameters
    pub fn publish(&self, params: SynthParams) {
        *self.inner.lock().unwrap() = params;
    }

    /// Read a copy of the parameters
    pub fn snapshot(&self) -> SynthParams {
        *self.inner.lock().unwrap()
    }

    /// Run a closure with mutable access (renderer-side countdown)
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SynthParams) -> R) -> R {
        let mut params = self.inner.lock().unwrap();
        f(&mut params)
    }
}

/// APU structure representing the Audio Processing Unit state
pub struct Apu {
    /// Pulse channel 1 ($4000-$4003), one's-complement sweep
    pulse1: PulseChannel,

    /// Pulse channel 2 ($4004-$4007)
    pulse2: PulseChannel,

    /// Triangle channel ($4008-$400B)
    triangle: TriangleChannel,

    /// Frame sequencer, clocked once per CPU cycle
    sequencer: FrameSequencer,

    /// Shared tone parameters for the sound renderer
    synth: SynthControl,
}

impl Apu {
    /// Create a new APU in its power-on state
    pub fn new() -> Self {
        Apu {
            pulse1: PulseChannel::new(true),
            pulse2: PulseChannel::new(false),
            triangle: TriangleChannel::new(),
            sequencer: FrameSequencer::new(),
            synth: SynthControl::new(),
        }
    }

    /// Attach the parameter block shared with the sound renderer
    pub fn set_synth(&mut self, synth: SynthControl) {
        self.synth = synth;
    }

    /// Reset to the power-on state, keeping the renderer attachment
    pub fn reset(&mut self) {
        self.pulse1 = PulseChannel::new(true);
        self.pulse2 = PulseChannel::new(false);
        self.triangle = TriangleChannel::new();
        self.sequencer.reset();
        self.sync_synth();
    }

    /// Advance the APU by one CPU cycle
    ///
    /// Runs the frame sequencer and applies any quarter/half-frame
    /// actions it reports to the channels.
    pub fn tick(&mut self) {
        let actions = self.sequencer.tick();
        self.apply_frame_tick(actions);
    }

    /// Run the envelope and sweep/length actions on every channel
    fn apply_frame_tick(&mut self, actions: FrameTick) {
        if actions.quarter {
            self.pulse1.quarter_frame();
            self.pulse2.quarter_frame();
        }
        if actions.half {
            self.pulse1.half_frame();
            self.pulse2.half_frame();
            self.triangle.half_frame();
        }
        if actions.quarter || actions.half {
            self.sync_synth();
        }
    }

    /// Push the current tone parameters to the renderer
    fn sync_synth(&mut self) {
        self.synth.publish(SynthParams {
            pulse1: self.pulse1.params(),
            pulse2: self.pulse2.params(),
            triangle: self.triangle.params(),
        });
    }

    /// Whether the frame interrupt line is asserted
    ///
    /// Level-sensitive: it stays asserted until a $4015 read clears it.
    pub fn irq_pending(&self) -> bool {
        self.sequencer.irq_pending()
    }

    /// Read from an APU register
    ///
    /// Everything but $4015 is write-only and reads as zero.
    pub fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            // $4015: channel length status and the frame interrupt flag.
            // Reading clears the frame interrupt.
            0x4015 => {
                let mut status = 0u8;
                if self.pulse1.is_active() {
                    status |= 0x01;
                }
                if self.pulse2.is_active() {
                    status |= 0x02;
                }
                if self.triangle.is_active() {
                    status |= 0x04;
                }
                if self.sequencer.irq_pending() {
                    status |= 0x40;
                }
                self.sequencer.clear_irq();
                status
            }
            _ => 0,
        }
    }

    /// Write to an APU register
    pub fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            // Pulse 1
            0x4000 => self.pulse1.write_duty_envelope(data),
            0x4001 => self.pulse1.write_sweep(data),
            0x4002 => self.pulse1.write_period_low(data),
            0x4003 => self.pulse1.write_period_high(data),

            // Pulse 2
            0x4004 => self.pulse2.write_duty_envelope(data),
            0x4005 => self.pulse2.write_sweep(data),
            0x4006 => self.pulse2.write_period_low(data),
            0x4007 => self.pulse2.write_period_high(data),

            // Triangle
            0x400A => self.triangle.write_period_low(data),
            0x400B => self.triangle.write_period_high(data),

            // $4015: channel enables (bits 0-2)
            0x4015 => {
                self.pulse1.set_enabled(data & 0x01 != 0);
                self.pulse2.set_enabled(data & 0x02 != 0);
                self.triangle.set_enabled(data & 0x04 != 0);
            }

            // $4017: sequencer mode; the write itself clocks one quarter
            // and one half frame
            0x4017 => {
                let actions = self.sequencer.write_control(data);
                self.apply_frame_tick(actions);
                return;
            }

            // $4008-$4009, noise, DMC: benign noise
            _ => return,
        }

        self.sync_synth();
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
