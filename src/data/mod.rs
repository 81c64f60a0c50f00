//! Data model shared by the codecs, probes and renderers

pub mod system;
pub mod text;

pub use system::{GpuName, SystemInfo, TerminalSize, MAX_GPUS};
pub use text::BoundedText;
