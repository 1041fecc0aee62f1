//! wgpu host for the Visort sort visualizer.
//!
//! Draws every column as one instanced quad, so a frame is a single draw
//! call no matter how many columns the window holds.
//!
//! # Features
//! - Canvas-space projection: columns keep their layout when the window is resized
//! - Fixed frame cadence driven by the winit event loop
//! - Close button or Escape ends the run

pub mod error;
pub mod renderer;

pub use error::{Error, Result};
pub use renderer::Renderer;

use glam::Mat4;
use visort_vis::{Rect, Rgba};

/// GPU instance data for a single column.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BarInstance {
    /// x, y, width, height in canvas pixels
    pub rect: [f32; 4],
    /// Packed RGBA color, red in the low byte
    pub color: u32,
}

impl BarInstance {
    /// Create an instance covering `rect` in `color`.
    pub fn new(rect: Rect, color: Rgba) -> Self {
        Self {
            rect: [rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32],
            color: pack_color(color),
        }
    }

    /// Get the vertex buffer layout for the instance data.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BarInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // Rect
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Color (packed u32)
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}

/// Uniform block shared by every column.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
}

impl Globals {
    /// Globals for a canvas of `width` x `height` pixels.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            view_proj: canvas_projection(width, height).to_cols_array_2d(),
        }
    }
}

/// Map canvas pixels (origin top left, y down) to clip space.
pub fn canvas_projection(width: u32, height: u32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width as f32, height as f32, 0.0, -1.0, 1.0)
}

/// Pack a color the way `unpack4x8unorm` reads it: red in the low byte.
pub fn pack_color(color: Rgba) -> u32 {
    u32::from_le_bytes([color.r, color.g, color.b, color.a])
}

/// Convert a color to a wgpu clear color.
pub fn clear_color(color: Rgba) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64 / 255.0,
        g: color.g as f64 / 255.0,
        b: color.b as f64 / 255.0,
        a: color.a as f64 / 255.0,
    }
}
