//! Error types
//!
//! Only window/renderer setup and settings loading can fail; the simulation
//! itself is total.

use thiserror::Error;

/// Failure while acquiring the window or renderer
#[derive(Debug, Error)]
pub enum InitError {
    #[error("unable to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create renderer device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Failure while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}
