//! Reusable egui widget components with Tailwind-inspired styling.
//!
//! - **Buttons**: glyph tool buttons, small action buttons
//! - **Frames**: toolbar, panel and modal frames, layout helpers

pub mod buttons;
pub mod frames;

pub use buttons::{GlyphButton, GlyphButtonStyle};
pub use frames::{modal_frame, panel_frame, toolbar_frame, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Toolbar tool button size.
    pub const TOOL: f32 = 32.0;
    /// Small action button size (thumbnail delete).
    pub const SMALL: f32 = 20.0;
    /// Standard corner radius.
    pub const CORNER_RADIUS: u8 = 6;
    /// Panel corner radius.
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Canvas background
    pub const CANVAS_BG: Color32 = Color32::from_rgb(250, 250, 250);
}
