// Display module - frame buffers and the host window

pub mod framebuffer;
pub mod palette;
pub mod window;

pub use framebuffer::{FrameBuffer, SharedFrame, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use window::{run_display, WindowConfig};
