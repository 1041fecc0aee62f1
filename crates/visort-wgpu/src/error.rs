//! Error types for visort-wgpu.

use thiserror::Error;

/// Result type for visort-wgpu operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the visualizer before or while it runs.
#[derive(Debug, Error)]
pub enum Error {
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// wgpu could not create a surface for the window.
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter can present to the window.
    #[error("no compatible graphics adapter found")]
    NoAdapter,

    /// The adapter refused to open a device.
    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface does not support the adapter.
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,

    /// The run could not be set up.
    #[error(transparent)]
    Session(#[from] visort_vis::Error),
}
