//! The canvas view: hosts the annotation surface inside an egui panel,
//! translating egui pointer/keyboard state into surface events and placing
//! the inline text editor overlay.

use egui::text::{CCursor, CCursorRange};
use egui::{pos2, vec2, CursorIcon, FontId, Margin, Rect, Sense, Ui};
use kurbo::Point;
use storyink_core::annotation::{LabelId, TextLabel};
use storyink_core::input::{PointerButton, PointerEvent};
use storyink_core::surface::{AnnotationSurface, Gesture};
use storyink_core::tools::{Tool, ToolSettings};
use storyink_render::{to_color32, EguiRenderer, RenderContext, SurfaceRenderer};

/// Canvas widget state kept across frames.
pub struct CanvasView {
    renderer: EguiRenderer,
    /// Last pointer position forwarded to the surface, to drop no-move frames.
    last_forwarded: Option<Point>,
    /// Label whose inline editor currently holds focus bookkeeping.
    focused_label: Option<LabelId>,
    /// Size of the canvas rect last frame, used to scale tray thumbnails.
    canvas_size: egui::Vec2,
}

impl CanvasView {
    pub fn new() -> Self {
        Self {
            renderer: EguiRenderer::new(),
            last_forwarded: None,
            focused_label: None,
            canvas_size: vec2(800.0, 600.0),
        }
    }

    /// Canvas size observed last frame (thumbnail scaling reference).
    pub fn canvas_size(&self) -> egui::Vec2 {
        self.canvas_size
    }

    /// Lay out the canvas, forward input to the surface and paint it.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        surface: &mut AnnotationSurface,
        tool: Tool,
        settings: &ToolSettings,
    ) {
        let rect = ui.available_rect_before_wrap();
        self.canvas_size = rect.size();
        let response = ui.allocate_rect(rect, Sense::click_and_drag());

        self.forward_pointer_events(ui, rect, &response, surface, tool, settings);
        self.update_cursor(ui, rect, surface, tool);

        let painter = ui.painter_at(rect);
        let ctx = RenderContext::new(surface.content()).with_editing_label(surface.editing_id());
        self.renderer.paint(&painter, rect, &ctx);

        self.show_inline_editor(ui, rect, surface);
    }

    fn forward_pointer_events(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
        surface: &mut AnnotationSurface,
        tool: Tool,
        settings: &ToolSettings,
    ) {
        let pointer = ui.input(|i| i.pointer.latest_pos());
        let local = pointer.map(|p| to_local(rect, p));
        let inside = pointer.is_some_and(|p| rect.contains(p));
        let gesture_active = surface.gesture() != Gesture::Idle || surface.is_dragging();

        // Press: only when the canvas itself is the topmost widget under the
        // pointer, so presses on the editor overlay stay with the editor.
        if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(position) = local {
                surface.handle_pointer(PointerEvent::down(position), tool, settings);
                self.last_forwarded = Some(position);
                return;
            }
        }

        if response.secondary_clicked() {
            if let Some(position) = local {
                surface.handle_pointer(
                    PointerEvent::Down {
                        position,
                        button: PointerButton::Secondary,
                    },
                    tool,
                    settings,
                );
            }
        }

        if response.double_clicked() {
            if let Some(position) = local {
                surface.handle_double_click(position, tool);
            }
        }

        // Moves are tracked beyond the canvas bounds while a gesture or drag
        // is in flight, so fast drags cannot outrun the hit box.
        if gesture_active || inside {
            if let Some(position) = local {
                if self.last_forwarded != Some(position) {
                    surface.handle_pointer(PointerEvent::Move { position }, tool, settings);
                    self.last_forwarded = Some(position);
                }
            }
        }

        if gesture_active {
            if ui.input(|i| i.pointer.primary_released()) {
                let position = local.unwrap_or(Point::ZERO);
                surface.handle_pointer(PointerEvent::Up { position }, tool, settings);
            } else if !inside && surface.gesture() != Gesture::Idle {
                // Pen and eraser gestures end at the canvas edge.
                surface.handle_pointer(PointerEvent::Leave, tool, settings);
            }
        }
    }

    /// Cursor affordance is the user's only feedback about the current mode.
    fn update_cursor(&self, ui: &Ui, rect: Rect, surface: &AnnotationSurface, tool: Tool) {
        let inside = ui
            .input(|i| i.pointer.latest_pos())
            .is_some_and(|p| rect.contains(p));
        if !inside && !surface.is_dragging() {
            return;
        }
        let icon = if surface.is_dragging() {
            CursorIcon::Grabbing
        } else {
            match tool {
                Tool::Pen => CursorIcon::Crosshair,
                Tool::Eraser => CursorIcon::NotAllowed,
                Tool::Text => CursorIcon::Text,
            }
        };
        ui.ctx().set_cursor_icon(icon);
    }

    /// Place the single-line editor over the label under edit. Focus loss or
    /// Enter finalizes through the surface's commit rule.
    fn show_inline_editor(&mut self, ui: &mut Ui, rect: Rect, surface: &mut AnnotationSurface) {
        let Some(session) = surface.editing_mut() else {
            self.focused_label = None;
            return;
        };

        let label = &mut session.label;
        let label_id = label.id;
        let char_count = label.text.chars().count();
        let font_size = label.font_size as f32;
        let anchor = pos2(
            rect.min.x + label.position.x as f32,
            rect.min.y + label.position.y as f32,
        );
        let min_chars = char_count.max(8);
        let width = min_chars as f32 * font_size * TextLabel::CHAR_WIDTH_FACTOR as f32 + 20.0;
        let editor_rect = Rect::from_min_size(
            pos2(anchor.x - 4.0, anchor.y - font_size - 8.0),
            vec2(width, font_size + 12.0),
        );

        let text_color = to_color32(label.color);
        let editor = egui::TextEdit::singleline(&mut label.text)
            .font(FontId::proportional(font_size))
            .text_color(text_color)
            .margin(Margin::symmetric(4, 2));
        let response = ui.put(editor_rect, editor);

        if self.focused_label != Some(label_id) {
            self.focused_label = Some(label_id);
            response.request_focus();
            // Select the whole buffer so typing overtypes the placeholder.
            if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), response.id) {
                state.cursor.set_char_range(Some(CCursorRange::two(
                    CCursor::new(0),
                    CCursor::new(char_count),
                )));
                egui::TextEdit::store_state(ui.ctx(), response.id, state);
            }
            return;
        }

        if response.lost_focus() {
            surface.finish_editing();
            self.focused_label = None;
        }
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen position to surface-local coordinates.
fn to_local(rect: Rect, pos: egui::Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}
