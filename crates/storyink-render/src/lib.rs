//! Renderer abstraction and implementations for Storyink.

mod egui_impl;
mod renderer;

pub use egui_impl::{paint_thumbnail, to_color32, EguiRenderer};
pub use renderer::{renderable_strokes, RenderContext, SurfaceRenderer};
