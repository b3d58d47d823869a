// Audio output - host playback through cpal
//
// Opens the default output device with a mono f32 stream at the renderer
// sample rate and drives a `Synth` from the stream callback. Failure to
// open the device is recoverable: the emulator keeps running silent.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, Stream, StreamConfig};

use super::{Synth, SAMPLE_RATE};
use crate::apu::SynthControl;

/// Audio output configuration
#[derive(Debug, Clone, Copy)]
pub struct AudioConfig {
    /// Master volume, 0.0-1.0
    pub volume: f32,
}

impl AudioConfig {
    pub fn new() -> Self {
        Self { volume: 0.5 }
    }

    /// Set the master volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle keeping the output stream alive
///
/// Dropping it stops playback.
pub struct AudioOutput {
    _stream: Stream,
}

impl AudioOutput {
    /// Open the default output device and start playback
    ///
    /// # Errors
    ///
    /// A human-readable message when no device exists or the stream
    /// cannot be built; callers treat this as a recoverable peripheral
    /// failure.
    pub fn start(control: SynthControl, config: AudioConfig) -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("no audio output device available")?;

        let stream_config = StreamConfig {
            channels: 1,
            sample_rate: SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        let mut synth = Synth::new(control, config.volume);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    synth.render(data);
                },
                move |err| {
                    eprintln!("audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| format!("failed to build audio stream: {}", e))?;

        stream
            .play()
            .map_err(|e| format!("failed to start audio stream: {}", e))?;

        println!("audio output: {} Hz mono", SAMPLE_RATE);

        Ok(Self { _stream: stream })
    }
}
