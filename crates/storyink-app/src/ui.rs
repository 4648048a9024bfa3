//! Toolbar, page tray and modal dialogs.

use egui::{
    pos2, vec2, Align2, Color32, Context, CornerRadius, FontId, Id, Rect, Sense, Stroke, Ui,
};
use storyink_core::annotation::SerializableColor;
use storyink_core::document::{PageId, StoryDocument};
use storyink_core::tools::{Tool, ToolSettings, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use storyink_render::paint_thumbnail;
use storyink_widgets::{theme, GlyphButton, GlyphButtonStyle};

/// Thumbnail edge length in the page tray.
pub const THUMBNAIL_SIZE: f32 = 72.0;

/// Requests emitted by the page tray, applied by the app after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrayAction {
    Select(PageId),
    Add,
    Delete(PageId),
    Reorder { from: usize, to: usize },
}

/// Show the toolbar. Returns true when the active tool changed.
pub fn toolbar(ui: &mut Ui, tool: &mut Tool, settings: &mut ToolSettings) -> bool {
    let mut tool_changed = false;
    ui.horizontal(|ui| {
        for (glyph, candidate) in [
            ("\u{270F}", Tool::Pen),
            ("T", Tool::Text),
            ("\u{232B}", Tool::Eraser),
        ] {
            let selected = *tool == candidate;
            if GlyphButton::new(glyph, candidate.label())
                .selected(selected)
                .show(ui)
                && !selected
            {
                *tool = candidate;
                tool_changed = true;
            }
        }

        storyink_widgets::vertical_separator(ui);

        let mut rgb = [settings.color.r, settings.color.g, settings.color.b];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            settings.color = SerializableColor::new(rgb[0], rgb[1], rgb[2], 255);
        }

        storyink_widgets::vertical_separator(ui);

        let mut width = settings.stroke_width;
        let slider = egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH)
            .step_by(1.0)
            .show_value(false);
        if ui.add(slider).changed() {
            settings.set_stroke_width(width);
        }
        ui.label(
            egui::RichText::new(format!("{:.0} px", settings.stroke_width))
                .color(theme::TEXT)
                .small(),
        );
    });
    tool_changed
}

/// Show the page tray: one draggable thumbnail per page plus an add button.
/// Returns at most one action per frame.
pub fn page_tray(ui: &mut Ui, document: &StoryDocument, source_size: egui::Vec2) -> Option<TrayAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        for (index, page) in document.pages().iter().enumerate() {
            let is_active = index == document.active_index();
            let drag_id = Id::new(("page-thumbnail", page.id));

            let response = ui
                .dnd_drag_source(drag_id, index, |ui| {
                    if let Some(a) = page_thumbnail(ui, page, is_active, source_size) {
                        action = Some(a);
                    }
                })
                .response;

            // Dragging another thumbnail over this one: show the insertion
            // marker and reorder on release.
            if let Some(from) = response.dnd_hover_payload::<usize>() {
                if *from != index {
                    let rect = response.rect;
                    ui.painter().line_segment(
                        [pos2(rect.left() - 3.0, rect.top()), pos2(rect.left() - 3.0, rect.bottom())],
                        Stroke::new(2.0, theme::ACCENT),
                    );
                }
            }
            if let Some(from) = response.dnd_release_payload::<usize>() {
                if *from != index {
                    action = Some(TrayAction::Reorder { from: *from, to: index });
                }
            }
        }

        let add_style = GlyphButtonStyle {
            size: vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
            glyph_size: 30.0,
            bg_color: Color32::from_rgb(34, 197, 94),
            hover_color: Color32::from_rgb(22, 163, 74),
            selected_color: Color32::from_rgb(34, 197, 94),
            glyph_color: Color32::WHITE,
            ..Default::default()
        };
        if GlyphButton::new("+", "Add page").style(add_style).show(ui) {
            action = Some(TrayAction::Add);
        }
    });
    action
}

/// One thumbnail: a miniature render of the page, a selection border and a
/// delete cross. Emits Select/Delete.
fn page_thumbnail(
    ui: &mut Ui,
    page: &storyink_core::document::Page,
    is_active: bool,
    source_size: egui::Vec2,
) -> Option<TrayAction> {
    let mut action = None;
    let (rect, response) = ui.allocate_exact_size(vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE), Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::same(6), Color32::WHITE);
        paint_thumbnail(&painter, rect.shrink(4.0), &page.content, source_size);

        let border = if is_active {
            Stroke::new(3.0, theme::ACCENT)
        } else if response.hovered() {
            Stroke::new(2.0, theme::ACCENT)
        } else {
            Stroke::new(1.0, theme::BORDER)
        };
        painter.rect_stroke(rect, CornerRadius::same(6), border, egui::StrokeKind::Inside);
    }

    if response.clicked() {
        action = Some(TrayAction::Select(page.id));
    }

    // Delete cross in the top-right corner, painted over the thumbnail.
    let delete_rect = Rect::from_center_size(
        pos2(rect.right() - 8.0, rect.top() + 8.0),
        vec2(14.0, 14.0),
    );
    let delete_response = ui.interact(
        delete_rect,
        Id::new(("page-delete", page.id)),
        Sense::click(),
    );
    let delete_color = if delete_response.hovered() {
        Color32::from_rgb(220, 38, 38)
    } else {
        theme::DANGER
    };
    ui.painter().circle_filled(delete_rect.center(), 7.0, delete_color);
    ui.painter().text(
        delete_rect.center(),
        Align2::CENTER_CENTER,
        "\u{2715}",
        FontId::proportional(9.0),
        Color32::WHITE,
    );
    if delete_response.clicked() {
        action = Some(TrayAction::Delete(page.id));
    }

    action
}

/// Help dialog: how the tools work.
pub fn help_modal(ctx: &Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .frame(storyink_widgets::modal_frame())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Draw your story one page at a time.");
            ui.add_space(6.0);
            ui.label("\u{270F}  Pen: press and drag to draw. Pick a color and width in the toolbar.");
            ui.label("T  Text: click to place a label, click a label to edit it, drag to move it, right-click to delete it.");
            ui.label("\u{232B}  Eraser: press or drag over a line to remove it.");
            ui.add_space(6.0);
            ui.label("Use the tray below to add, reorder and delete pages.");
        });
}

/// About dialog.
pub fn about_modal(ctx: &Context, open: &mut bool) {
    egui::Window::new("About")
        .open(open)
        .frame(storyink_widgets::modal_frame())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Storyink is a little drawing board for telling stories.");
            ui.add_space(6.0);
            ui.label("Everything lives on this screen only: close the window and the story is gone, so tell it to someone first.");
        });
}
