//! Renderer seam: what a backend needs to draw one frame of the surface.

use storyink_core::annotation::{LabelId, PageContent, Stroke};

/// Context for a single render pass over the working copy.
pub struct RenderContext<'a> {
    /// The stroke/text sets to draw.
    pub content: &'a PageContent,
    /// Label currently open in the inline editor; drawn by the editor
    /// overlay instead of the renderer.
    pub editing_label: Option<LabelId>,
}

impl<'a> RenderContext<'a> {
    pub fn new(content: &'a PageContent) -> Self {
        Self {
            content,
            editing_label: None,
        }
    }

    /// Skip the given label during text drawing.
    pub fn with_editing_label(mut self, label: Option<LabelId>) -> Self {
        self.editing_label = label;
        self
    }
}

/// Trait for rendering backends.
pub trait SurfaceRenderer {
    /// Draw one frame: clear the canvas rect, then every renderable stroke in
    /// insertion order, then every text label not under edit.
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, ctx: &RenderContext);
}

/// Strokes with enough points to draw. Single-point strokes are valid data
/// but have no visual extent.
pub fn renderable_strokes(content: &PageContent) -> impl Iterator<Item = &Stroke> {
    content.strokes.iter().filter(|s| s.is_renderable())
}
