//! Core application state and lifecycle.

use egui::{Align2, Color32, FontId, Id, Vec2};
use storyink_core::document::{DocumentError, StoryDocument};
use storyink_core::surface::AnnotationSurface;
use storyink_core::tools::{Tool, ToolSettings};
use storyink_widgets::{theme, GlyphButton, GlyphButtonStyle};

use crate::canvas_view::CanvasView;
use crate::ui::{self, TrayAction};

/// The Storyink application.
pub struct StoryApp {
    document: StoryDocument,
    surface: AnnotationSurface,
    tool: Tool,
    settings: ToolSettings,
    canvas: CanvasView,
    help_open: bool,
    about_open: bool,
}

impl StoryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let document = StoryDocument::new();
        let surface = AnnotationSurface::new(document.active_page());
        Self {
            document,
            surface,
            tool: Tool::default(),
            settings: ToolSettings::default(),
            canvas: CanvasView::new(),
            help_open: false,
            about_open: false,
        }
    }

    /// Apply a page-tray request to the document.
    fn apply_tray_action(&mut self, action: TrayAction) {
        match action {
            TrayAction::Select(id) => {
                if let Err(e) = self.document.select(id) {
                    log::debug!("select ignored: {e}");
                }
            }
            TrayAction::Add => {
                self.document.add_page();
            }
            TrayAction::Delete(id) => match self.document.delete_page(id) {
                // Deleting the last page is silently refused.
                Err(DocumentError::LastPage) => log::debug!("refusing to delete the last page"),
                Err(e) => log::debug!("delete ignored: {e}"),
                Ok(()) => {}
            },
            TrayAction::Reorder { from, to } => self.document.reorder(from, to),
        }
    }

    /// Drain surface commits into the document. Fire-and-forget: a commit
    /// addressed to a page deleted this frame is dropped.
    fn apply_commits(&mut self) {
        for commit in self.surface.take_commits() {
            if let Err(e) = self
                .document
                .replace_content(commit.page_id, commit.strokes, commit.texts)
            {
                log::debug!("commit dropped: {e}");
            }
        }
    }
}

impl eframe::App for StoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(Color32::WHITE)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Tell your own story")
                            .font(FontId::proportional(24.0))
                            .color(theme::ACCENT)
                            .strong(),
                    );
                });
            });

        egui::TopBottomPanel::top("toolbar")
            .frame(storyink_widgets::toolbar_frame())
            .show(ctx, |ui| {
                if ui::toolbar(ui, &mut self.tool, &mut self.settings) {
                    // Finalize any open text edit before the switch shows.
                    self.surface.on_tool_changed();
                }
            });

        egui::TopBottomPanel::bottom("page-tray")
            .frame(storyink_widgets::panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() / 2.0 - tray_width(&self.document) / 2.0).max(0.0));
                    if let Some(action) = ui::page_tray(ui, &self.document, self.canvas.canvas_size())
                    {
                        self.apply_tray_action(action);
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::CANVAS_BG))
            .show(ctx, |ui| {
                // The tray may have changed the active page above; reconcile
                // before handling canvas input.
                self.surface.sync_page(self.document.active_page());
                self.canvas
                    .show(ui, &mut self.surface, self.tool, &self.settings);
            });

        self.apply_commits();

        floating_button(ctx, "about-button", Align2::LEFT_BOTTOM, "\u{1F951}", "About", &mut self.about_open);
        floating_button(ctx, "help-button", Align2::RIGHT_BOTTOM, "?", "Help", &mut self.help_open);

        ui::help_modal(ctx, &mut self.help_open);
        ui::about_modal(ctx, &mut self.about_open);
    }
}

/// Estimated tray strip width, used to center it.
fn tray_width(document: &StoryDocument) -> f32 {
    let thumbs = document.page_count() as f32 + 1.0;
    thumbs * ui::THUMBNAIL_SIZE + (thumbs - 1.0) * 8.0
}

/// A floating round corner button that opens a modal.
fn floating_button(ctx: &egui::Context, id: &str, anchor: Align2, glyph: &str, tooltip: &str, open: &mut bool) {
    let offset = if anchor == Align2::LEFT_BOTTOM {
        Vec2::new(16.0, -96.0)
    } else {
        Vec2::new(-16.0, -96.0)
    };
    egui::Area::new(Id::new(id))
        .anchor(anchor, offset)
        .show(ctx, |ui| {
            let style = GlyphButtonStyle::floating(theme::ACCENT);
            if GlyphButton::new(glyph, tooltip).style(style).show(ui) {
                *open = !*open;
            }
        });
}
