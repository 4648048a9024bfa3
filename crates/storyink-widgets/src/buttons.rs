//! Button components rendered from text glyphs (no image assets needed).

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Ui, Vec2,
};

use crate::{sizing, theme};

/// Style configuration for glyph buttons.
#[derive(Clone)]
pub struct GlyphButtonStyle {
    /// Button size.
    pub size: Vec2,
    /// Glyph font size.
    pub glyph_size: f32,
    /// Corner radius.
    pub corner_radius: u8,
    /// Background when not selected.
    pub bg_color: Color32,
    /// Background when hovered.
    pub hover_color: Color32,
    /// Background when selected/active.
    pub selected_color: Color32,
    /// Glyph color when not selected.
    pub glyph_color: Color32,
    /// Glyph color when selected.
    pub selected_glyph_color: Color32,
}

impl Default for GlyphButtonStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::TOOL, sizing::TOOL),
            glyph_size: 18.0,
            corner_radius: sizing::CORNER_RADIUS,
            bg_color: Color32::TRANSPARENT,
            hover_color: theme::HOVER_BG,
            selected_color: theme::ACCENT,
            glyph_color: theme::TEXT,
            selected_glyph_color: Color32::WHITE,
        }
    }
}

impl GlyphButtonStyle {
    /// Small round action button (thumbnail delete cross).
    pub fn danger_small() -> Self {
        Self {
            size: vec2(sizing::SMALL, sizing::SMALL),
            glyph_size: 12.0,
            corner_radius: (sizing::SMALL / 2.0) as u8,
            bg_color: theme::DANGER,
            hover_color: Color32::from_rgb(220, 38, 38),
            selected_color: theme::DANGER,
            glyph_color: Color32::WHITE,
            selected_glyph_color: Color32::WHITE,
        }
    }

    /// Large floating circular button (help/about).
    pub fn floating(bg: Color32) -> Self {
        Self {
            size: vec2(44.0, 44.0),
            glyph_size: 22.0,
            corner_radius: 22,
            bg_color: bg,
            hover_color: bg,
            selected_color: bg,
            glyph_color: Color32::WHITE,
            selected_glyph_color: Color32::WHITE,
        }
    }
}

/// A button that displays a single text glyph.
pub struct GlyphButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    selected: bool,
    style: GlyphButtonStyle,
}

impl<'a> GlyphButton<'a> {
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            selected: false,
            style: GlyphButtonStyle::default(),
        }
    }

    /// Set whether the button is selected/active.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the button style.
    pub fn style(mut self, style: GlyphButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                self.style.selected_color
            } else if response.hovered() {
                self.style.hover_color
            } else {
                self.style.bg_color
            };
            ui.painter().rect_filled(
                rect,
                CornerRadius::same(self.style.corner_radius),
                bg_color,
            );

            let glyph_color = if self.selected {
                self.style.selected_glyph_color
            } else {
                self.style.glyph_color
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(self.style.glyph_size),
                glyph_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
