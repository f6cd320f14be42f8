#![no_std]

pub mod color;
pub mod engine;
pub mod log;
pub mod mode;
pub mod pixel;
pub mod registry;
pub mod render;
pub mod scale;
pub mod scheduler;
pub mod waveform;

pub use engine::{DisplayEngine, DisplayEngineConfig};
pub use mode::DisplayMode;
pub use pixel::PixelBuffer;
pub use registry::{
    AcquireError, ContentionError, RegistryClaim, RegistryError, Sensor, SensorDescriptor,
    SensorReading, SensorRegistry, SensorValue,
};
pub use render::{
    BargraphRenderer, ChaseRenderer, ColorPair, ConfigError, RegisterScrollRenderer, Render,
};
pub use scale::map;
pub use scheduler::DisplayScheduler;
pub use waveform::{WaveformBuffer, WaveformConfig, WaveformCursor};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware backends (RMT, SPI).
/// A single `write` hands the whole frame to the hardware, which plays out
/// the sequence on its own once loaded.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
