//! Panel frames and layout helpers.

use egui::{Color32, CornerRadius, Frame, Margin, Pos2, Stroke, Ui};

use crate::{sizing, theme};

/// Frame for the top toolbar strip.
pub fn toolbar_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(12, 6))
}

/// Frame for side/bottom panels (page tray).
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(8))
}

/// Frame for modal dialog windows.
pub fn modal_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(2.0, theme::ACCENT))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(40),
        })
        .inner_margin(Margin::same(16))
}

/// Draw a vertical separator between toolbar groups.
pub fn vertical_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    let rect = ui.available_rect_before_wrap();
    let x = rect.left();
    ui.painter().line_segment(
        [
            Pos2::new(x, rect.top() + 4.0),
            Pos2::new(x, rect.bottom() - 4.0),
        ],
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(6.0);
}
