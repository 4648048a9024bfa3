//! egui painter backend.

use crate::renderer::{renderable_strokes, RenderContext, SurfaceRenderer};
use egui::{pos2, Color32, FontId, Painter, Rect, Stroke as EguiStroke};
use kurbo::Point;
use storyink_core::annotation::{PageContent, SerializableColor};

/// Convert a core color to an egui color.
pub fn to_color32(color: SerializableColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Renderer drawing the working copy with egui's tessellator.
pub struct EguiRenderer {
    /// Canvas background fill.
    pub background: Color32,
}

impl EguiRenderer {
    pub fn new() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 250),
        }
    }
}

impl Default for EguiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceRenderer for EguiRenderer {
    fn paint(&self, painter: &Painter, rect: Rect, ctx: &RenderContext) {
        painter.rect_filled(rect, egui::CornerRadius::ZERO, self.background);

        for stroke in renderable_strokes(ctx.content) {
            let color = to_color32(stroke.color);
            let width = stroke.width as f32;
            let points: Vec<egui::Pos2> =
                stroke.points.iter().map(|p| to_screen(rect, *p)).collect();
            // Round caps: egui polylines are butt-capped, so cap both ends
            // with half-width dots.
            painter.circle_filled(points[0], width / 2.0, color);
            painter.circle_filled(points[points.len() - 1], width / 2.0, color);
            painter.add(egui::Shape::line(points, EguiStroke::new(width, color)));
        }

        for label in &ctx.content.texts {
            if ctx.editing_label == Some(label.id) {
                continue;
            }
            painter.text(
                to_screen(rect, label.position),
                egui::Align2::LEFT_BOTTOM,
                &label.text,
                FontId::proportional(label.font_size as f32),
                to_color32(label.color),
            );
        }
    }
}

/// Surface-local point to screen position within the canvas rect.
fn to_screen(rect: Rect, point: Point) -> egui::Pos2 {
    pos2(
        rect.min.x + point.x as f32,
        rect.min.y + point.y as f32,
    )
}

/// Draw a miniature of a page into a thumbnail rect, scaling from the canvas
/// size the page was drawn at.
pub fn paint_thumbnail(
    painter: &Painter,
    rect: Rect,
    content: &PageContent,
    source_size: egui::Vec2,
) {
    let scale = if source_size.x > 0.0 && source_size.y > 0.0 {
        (rect.width() / source_size.x).min(rect.height() / source_size.y)
    } else {
        1.0
    };
    let map = |p: Point| {
        pos2(
            rect.min.x + p.x as f32 * scale,
            rect.min.y + p.y as f32 * scale,
        )
    };

    for stroke in renderable_strokes(content) {
        let points: Vec<egui::Pos2> = stroke.points.iter().map(|p| map(*p)).collect();
        let width = (stroke.width as f32 * scale).max(1.0);
        painter.add(egui::Shape::line(
            points,
            EguiStroke::new(width, to_color32(stroke.color)),
        ));
    }

    for label in &content.texts {
        let font_size = label.font_size as f32 * scale;
        if font_size < 3.0 {
            continue;
        }
        painter.text(
            map(label.position),
            egui::Align2::LEFT_BOTTOM,
            &label.text,
            FontId::proportional(font_size),
            to_color32(label.color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_preserves_channels() {
        let color = SerializableColor::new(10, 20, 30, 40);
        assert_eq!(
            to_color32(color),
            Color32::from_rgba_unmultiplied(10, 20, 30, 40)
        );
    }
}
