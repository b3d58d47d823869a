// Frame Buffer - Stores pixel data for NES display output
//
// The NES has a resolution of 256x240 pixels. Each pixel is a master
// palette index (0-63) which maps to an RGB color at display time.
//
// The PPU renders into a private "building" buffer and publishes it here
// at the start of vertical blank. Publication copies the whole frame under
// a short critical section, so the UI thread never observes a partially
// rendered field.

use super::palette::palette_to_rgba;
use std::sync::{Arc, Mutex};

/// NES screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// NES screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Total number of pixels in the frame buffer
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// One published field of master-palette indices (256x240 pixels)
///
/// Frames enter whole through `copy_from_slice` and leave whole through
/// `as_slice`/`to_rgba`; there is no per-pixel access, the PPU composes
/// fields in its own building buffer.
pub struct FrameBuffer {
    /// Pixel data stored as palette indices (0-63)
    pixels: [u8; SCREEN_SIZE],
}

impl FrameBuffer {
    /// Create a new frame buffer initialized to black (palette index 0x0F)
    pub fn new() -> Self {
        Self {
            pixels: [0x0F; SCREEN_SIZE],
        }
    }

    /// Get the raw pixel data as palette indices
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite the buffer from a raw palette-index slice
    ///
    /// # Panics
    /// Panics if `source` is not exactly one frame long
    pub fn copy_from_slice(&mut self, source: &[u8]) {
        self.pixels.copy_from_slice(source);
    }

    /// Convert the frame buffer to RGBA format for display
    ///
    /// # Panics
    /// Panics if the output buffer is smaller than SCREEN_SIZE * 4 bytes
    pub fn to_rgba(&self, output: &mut [u8]) {
        assert!(
            output.len() >= SCREEN_SIZE * 4,
            "Output buffer too small for RGBA conversion"
        );

        for (i, &palette_index) in self.pixels.iter().enumerate() {
            let rgba = palette_to_rgba(palette_index);
            output[i * 4..i * 4 + 4].copy_from_slice(&rgba);
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the published "last complete" frame
///
/// The simulation worker writes through `publish` once per field; the UI
/// thread reads through `with_frame`. Cloning the handle shares the same
/// underlying frame.
#[derive(Clone)]
pub struct SharedFrame {
    inner: Arc<Mutex<FrameBuffer>>,
}

impl SharedFrame {
    /// Create a shared frame initialized to black
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FrameBuffer::new())),
        }
    }

    /// Replace the published frame with a freshly completed field
    ///
    /// Called by the PPU at dot 1 of scanline 241. The copy happens under
    /// the lock so a concurrent reader sees either the old field or the new
    /// one, never a mix.
    pub fn publish(&self, pixels: &[u8]) {
        let mut frame = self.inner.lock().unwrap();
        frame.copy_from_slice(pixels);
    }

    /// Run a closure against the published frame
    pub fn with_frame<R>(&self, f: impl FnOnce(&FrameBuffer) -> R) -> R {
        let frame = self.inner.lock().unwrap();
        f(&frame)
    }

    /// Snapshot the published frame as a palette-index vector
    pub fn snapshot(&self) -> Vec<u8> {
        self.with_frame(|frame| frame.as_slice().to_vec())
    }
}

impl Default for SharedFrame {
    fn default() -> Self {
        Self::new()
    }
}
