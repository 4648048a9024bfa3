//! The annotation surface: a working copy of the active page plus the
//! interaction state machine for drawing, erasing and text handling.
//!
//! The surface owns all transient gesture state (the stroke being drawn, the
//! label being edited, the drag in progress); the document model owns the
//! committed sets. The two reconverge at commit points and whenever the
//! active page identity changes.

use crate::annotation::{LabelId, PageContent, Stroke, TextLabel};
use crate::document::{Page, PageId};
use crate::input::{PointerButton, PointerEvent};
use crate::tools::{Tool, ToolSettings};
use kurbo::{Point, Vec2};

/// Eraser proximity threshold: a stroke is removed when any of its points
/// lies within this many pixels of the eraser position.
pub const ERASE_RADIUS: f64 = 10.0;

/// Pointer travel below this is treated as a click rather than a drag.
pub const DRAG_SLOP: f64 = 4.0;

/// Initial content of a freshly placed label, overtyped by the user.
pub const PLACEHOLDER_TEXT: &str = "Write here...";

/// Pen/eraser gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing,
    Erasing,
}

/// The one label currently open in the inline editor. Holds a private buffer
/// copy; the working copy is only touched when the session is finalized.
#[derive(Debug, Clone)]
pub struct TextSession {
    /// Editing buffer. `label.text` is bound to the inline editor.
    pub label: TextLabel,
    /// True while the label has never been committed to the working copy.
    pub is_new: bool,
}

/// A label drag in progress.
#[derive(Debug, Clone)]
struct DragState {
    id: LabelId,
    /// Pointer position minus label anchor, captured at pointer-down, so the
    /// label moves offset-relative instead of snapping to the pointer.
    grab_offset: Vec2,
    start: Point,
    moved: bool,
}

/// A full-replace update for one page, drained by the application and applied
/// through the document's single mutation entry point.
#[derive(Debug, Clone)]
pub struct Commit {
    pub page_id: PageId,
    pub strokes: Vec<Stroke>,
    pub texts: Vec<TextLabel>,
}

/// The drawing surface state machine.
pub struct AnnotationSurface {
    page_id: PageId,
    working: PageContent,
    gesture: Gesture,
    session: Option<TextSession>,
    drag: Option<DragState>,
    pending: Vec<Commit>,
}

impl AnnotationSurface {
    /// Create a surface mirroring the given page.
    pub fn new(page: &Page) -> Self {
        Self {
            page_id: page.id,
            working: page.content.clone(),
            gesture: Gesture::Idle,
            session: None,
            drag: None,
            pending: Vec::new(),
        }
    }

    /// Reconcile with the active page. When the identity differs from the
    /// mirrored one, the working copy is replaced wholesale and any
    /// uncommitted gesture, drag or edit session is discarded without
    /// committing. Same identity is a no-op so in-progress edits survive.
    pub fn sync_page(&mut self, page: &Page) {
        if page.id == self.page_id {
            return;
        }
        log::debug!("surface now mirrors page {}", page.id);
        self.page_id = page.id;
        self.working = page.content.clone();
        self.gesture = Gesture::Idle;
        self.session = None;
        self.drag = None;
    }

    /// Id of the mirrored page.
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    /// The working copy, for rendering.
    pub fn content(&self) -> &PageContent {
        &self.working
    }

    /// Current pen/eraser gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The session currently open in the inline editor, if any.
    pub fn editing(&self) -> Option<&TextSession> {
        self.session.as_ref()
    }

    /// Mutable session access for binding the editor buffer.
    pub fn editing_mut(&mut self) -> Option<&mut TextSession> {
        self.session.as_mut()
    }

    /// Id of the label under edit, if any. Renderers skip this label; the
    /// inline editor stands in for it.
    pub fn editing_id(&self) -> Option<LabelId> {
        self.session.as_ref().map(|s| s.label.id)
    }

    /// Whether a label drag is in progress (cursor affordance).
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drain the commits produced since the last call.
    pub fn take_commits(&mut self) -> Vec<Commit> {
        std::mem::take(&mut self.pending)
    }

    /// Process one pointer event under the given tool and settings.
    pub fn handle_pointer(&mut self, event: PointerEvent, tool: Tool, settings: &ToolSettings) {
        match event {
            PointerEvent::Down { position, button } => match button {
                PointerButton::Primary => self.pointer_down(position, tool, settings),
                PointerButton::Secondary => {
                    if tool == Tool::Text {
                        self.delete_label_at(position);
                    }
                }
            },
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// A double-click on a committed label enters its edit session, even when
    /// the second press has already been routed into a drag.
    pub fn handle_double_click(&mut self, position: Point, tool: Tool) {
        if tool != Tool::Text {
            return;
        }
        if let Some(id) = self.hit_label(position) {
            if self.drag.as_ref().is_some_and(|d| d.id == id) {
                self.drag = None;
            }
            self.begin_edit(id);
        }
    }

    /// Called when the toolbar switches tools: a pending edit session is
    /// finalized through the normal commit rule so no orphaned edit state
    /// survives the switch.
    pub fn on_tool_changed(&mut self) {
        self.finish_editing();
        self.drag = None;
    }

    /// Finalize the edit session, if any: a whitespace-only buffer discards
    /// the label, anything else is inserted (new) or updated in place, and
    /// the working copy is committed.
    pub fn finish_editing(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.label.text.trim().is_empty() {
            if session.is_new {
                // Never entered the working copy; nothing changed.
                return;
            }
            self.working.texts.retain(|t| t.id != session.label.id);
            self.commit();
            return;
        }
        if session.is_new {
            self.working.texts.push(session.label);
        } else if let Some(existing) = self
            .working
            .texts
            .iter_mut()
            .find(|t| t.id == session.label.id)
        {
            *existing = session.label;
        }
        self.commit();
    }

    fn pointer_down(&mut self, position: Point, tool: Tool, settings: &ToolSettings) {
        match tool {
            Tool::Pen => {
                self.finish_editing();
                self.gesture = Gesture::Drawing;
                self.working.strokes.push(Stroke::begin(
                    position,
                    settings.color,
                    settings.stroke_width,
                ));
            }
            Tool::Eraser => {
                self.finish_editing();
                self.gesture = Gesture::Erasing;
                self.erase_at(position);
            }
            Tool::Text => self.text_pointer_down(position, settings),
        }
    }

    fn pointer_move(&mut self, position: Point) {
        match self.gesture {
            Gesture::Drawing => {
                // Event ordering races can deliver a move before the stroke
                // exists; ignore it.
                if let Some(stroke) = self.working.strokes.last_mut() {
                    stroke.add_point(position);
                }
            }
            Gesture::Erasing => self.erase_at(position),
            Gesture::Idle => {
                if let Some(drag) = &mut self.drag {
                    if (position - drag.start).hypot() > DRAG_SLOP {
                        drag.moved = true;
                    }
                    // Below the slop threshold the press is still a potential
                    // click; the label stays put until that is decided.
                    if drag.moved {
                        let anchor = position - drag.grab_offset;
                        let id = drag.id;
                        if let Some(label) = self.working.texts.iter_mut().find(|t| t.id == id) {
                            label.position = anchor;
                        }
                    }
                }
            }
        }
    }

    fn pointer_up(&mut self, _position: Point) {
        match self.gesture {
            Gesture::Drawing | Gesture::Erasing => {
                self.gesture = Gesture::Idle;
                self.commit();
            }
            Gesture::Idle => {
                if let Some(drag) = self.drag.take() {
                    if drag.moved {
                        self.commit();
                    } else {
                        // A press-and-release without travel is a click:
                        // open the label for editing instead.
                        self.begin_edit(drag.id);
                    }
                }
            }
        }
    }

    fn pointer_leave(&mut self) {
        // Ends pen/eraser gestures like a release. An active label drag keeps
        // following the pointer, which is tracked beyond the surface bounds.
        if matches!(self.gesture, Gesture::Drawing | Gesture::Erasing) {
            self.gesture = Gesture::Idle;
            self.commit();
        }
    }

    fn text_pointer_down(&mut self, position: Point, settings: &ToolSettings) {
        if let Some(id) = self.hit_label(position) {
            if self.editing_id() == Some(id) {
                // Clicks inside the open editor belong to the editor.
                return;
            }
            self.finish_editing();
            let Some(label) = self.working.texts.iter().find(|t| t.id == id) else {
                return;
            };
            self.drag = Some(DragState {
                id,
                grab_offset: position - label.position,
                start: position,
                moved: false,
            });
        } else {
            self.finish_editing();
            self.session = Some(TextSession {
                label: TextLabel::new(
                    position,
                    PLACEHOLDER_TEXT.to_string(),
                    settings.color,
                    TextLabel::DEFAULT_FONT_SIZE,
                ),
                is_new: true,
            });
        }
    }

    /// Open an edit session for a committed label.
    fn begin_edit(&mut self, id: LabelId) {
        if self.editing_id() == Some(id) {
            return;
        }
        self.finish_editing();
        if let Some(label) = self.working.texts.iter().find(|t| t.id == id) {
            self.session = Some(TextSession {
                label: label.clone(),
                is_new: false,
            });
        }
    }

    /// Delete the committed label under `position`, if any, and commit.
    fn delete_label_at(&mut self, position: Point) {
        let Some(id) = self.hit_label(position) else {
            return;
        };
        if self.editing_id() == Some(id) {
            self.session = None;
        }
        self.working.texts.retain(|t| t.id != id);
        self.commit();
    }

    /// Remove every stroke with a point within [`ERASE_RADIUS`] of `position`.
    fn erase_at(&mut self, position: Point) {
        self.working
            .strokes
            .retain(|s| !s.hit_near(position, ERASE_RADIUS));
    }

    /// Topmost committed label whose approximate box contains `position`.
    fn hit_label(&self, position: Point) -> Option<LabelId> {
        self.working
            .texts
            .iter()
            .rev()
            .find(|t| t.hit_test(position))
            .map(|t| t.id)
    }

    /// Queue a full-replace commit of the current working copy.
    fn commit(&mut self) {
        self.pending.push(Commit {
            page_id: self.page_id,
            strokes: self.working.strokes.clone(),
            texts: self.working.texts.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::SerializableColor;
    use crate::document::StoryDocument;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn settings() -> ToolSettings {
        ToolSettings::default()
    }

    fn surface() -> AnnotationSurface {
        AnnotationSurface::new(&Page::new())
    }

    /// Drive a full pen gesture through the surface.
    fn draw_line(surface: &mut AnnotationSurface, points: &[Point]) {
        let s = settings();
        surface.handle_pointer(PointerEvent::down(points[0]), Tool::Pen, &s);
        for &point in &points[1..] {
            surface.handle_pointer(PointerEvent::Move { position: point }, Tool::Pen, &s);
        }
        surface.handle_pointer(
            PointerEvent::Up {
                position: *points.last().unwrap(),
            },
            Tool::Pen,
            &s,
        );
    }

    /// Place and commit a label, returning its id.
    fn place_label(surface: &mut AnnotationSurface, position: Point, text: &str) -> LabelId {
        let s = settings();
        surface.handle_pointer(PointerEvent::down(position), Tool::Text, &s);
        let session = surface.editing_mut().unwrap();
        session.label.text = text.to_string();
        surface.finish_editing();
        surface.content().texts.last().unwrap().id
    }

    #[test]
    fn test_pen_stroke_has_one_point_per_event_in_order() {
        let mut surface = surface();
        draw_line(
            &mut surface,
            &[p(0.0, 0.0), p(10.0, 5.0), p(20.0, 10.0), p(30.0, 15.0)],
        );

        let commits = surface.take_commits();
        assert_eq!(commits.len(), 1);
        let stroke = &commits[0].strokes[0];
        assert_eq!(stroke.len(), 4);
        assert_eq!(stroke.points[0], p(0.0, 0.0));
        assert_eq!(stroke.points[3], p(30.0, 15.0));
    }

    #[test]
    fn test_stroke_keeps_settings_from_pointer_down() {
        let mut surface = surface();
        let mut s = settings();
        s.color = SerializableColor::new(255, 0, 0, 255);
        s.stroke_width = 9.0;
        surface.handle_pointer(PointerEvent::down(p(0.0, 0.0)), Tool::Pen, &s);

        // Settings change mid-stroke must not retroactively alter it.
        let changed = settings();
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(5.0, 5.0),
            },
            Tool::Pen,
            &changed,
        );
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(5.0, 5.0),
            },
            Tool::Pen,
            &changed,
        );

        let commits = surface.take_commits();
        let stroke = &commits[0].strokes[0];
        assert_eq!(stroke.color, SerializableColor::new(255, 0, 0, 255));
        assert!((stroke.width - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut surface = surface();
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(5.0, 5.0),
            },
            Tool::Pen,
            &settings(),
        );
        assert!(surface.content().strokes.is_empty());
        assert!(surface.take_commits().is_empty());
    }

    #[test]
    fn test_degenerate_single_point_stroke_is_committed() {
        let mut surface = surface();
        let s = settings();
        surface.handle_pointer(PointerEvent::down(p(3.0, 3.0)), Tool::Pen, &s);
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(3.0, 3.0),
            },
            Tool::Pen,
            &s,
        );

        let commits = surface.take_commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].strokes[0].len(), 1);
        assert!(!commits[0].strokes[0].is_renderable());
    }

    #[test]
    fn test_pointer_leave_commits_like_release() {
        let mut surface = surface();
        let s = settings();
        surface.handle_pointer(PointerEvent::down(p(0.0, 0.0)), Tool::Pen, &s);
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(10.0, 0.0),
            },
            Tool::Pen,
            &s,
        );
        surface.handle_pointer(PointerEvent::Leave, Tool::Pen, &s);

        assert_eq!(surface.gesture(), Gesture::Idle);
        assert_eq!(surface.take_commits().len(), 1);
    }

    #[test]
    fn test_eraser_removes_stroke_when_any_point_in_range() {
        let mut surface = surface();
        draw_line(&mut surface, &[p(0.0, 0.0), p(100.0, 0.0)]);
        draw_line(&mut surface, &[p(0.0, 200.0), p(100.0, 200.0)]);
        surface.take_commits();

        let s = settings();
        // Within ERASE_RADIUS of the first stroke's endpoint only.
        surface.handle_pointer(
            PointerEvent::Down {
                position: p(104.0, 3.0),
                button: PointerButton::Primary,
            },
            Tool::Eraser,
            &s,
        );
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(104.0, 3.0),
            },
            Tool::Eraser,
            &s,
        );

        let commits = surface.take_commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].strokes.len(), 1);
        assert_eq!(commits[0].strokes[0].points[0], p(0.0, 200.0));
    }

    #[test]
    fn test_eraser_ignores_strokes_outside_threshold() {
        let mut surface = surface();
        draw_line(&mut surface, &[p(0.0, 0.0), p(100.0, 0.0)]);
        surface.take_commits();

        let s = settings();
        // 10.5px away from the nearest recorded point: outside the radius.
        surface.handle_pointer(
            PointerEvent::Down {
                position: p(100.0, 10.5),
                button: PointerButton::Primary,
            },
            Tool::Eraser,
            &s,
        );
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(100.0, 10.5),
            },
            Tool::Eraser,
            &s,
        );

        let commits = surface.take_commits();
        assert_eq!(commits[0].strokes.len(), 1);
    }

    #[test]
    fn test_eraser_drags_erase_continuously() {
        let mut surface = surface();
        draw_line(&mut surface, &[p(0.0, 0.0), p(5.0, 0.0)]);
        draw_line(&mut surface, &[p(200.0, 0.0), p(205.0, 0.0)]);
        surface.take_commits();

        let s = settings();
        surface.handle_pointer(
            PointerEvent::Down {
                position: p(2.0, 2.0),
                button: PointerButton::Primary,
            },
            Tool::Eraser,
            &s,
        );
        assert_eq!(surface.content().strokes.len(), 1);
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(202.0, 2.0),
            },
            Tool::Eraser,
            &s,
        );
        assert!(surface.content().strokes.is_empty());
    }

    #[test]
    fn test_commit_twice_leaves_document_unchanged() {
        let mut doc = StoryDocument::new();
        let mut surface = AnnotationSurface::new(doc.active_page());
        draw_line(&mut surface, &[p(0.0, 0.0), p(10.0, 10.0)]);
        draw_line(&mut surface, &[p(20.0, 20.0), p(30.0, 30.0)]);

        for commit in surface.take_commits() {
            doc.replace_content(commit.page_id, commit.strokes.clone(), commit.texts.clone())
                .unwrap();
            // Applying the same commit again must be harmless.
            doc.replace_content(commit.page_id, commit.strokes, commit.texts)
                .unwrap();
        }
        assert_eq!(doc.active_page().content.strokes.len(), 2);
    }

    #[test]
    fn test_page_switch_discards_uncommitted_gesture() {
        let mut doc = StoryDocument::new();
        let first = doc.active_page().clone();
        let mut surface = AnnotationSurface::new(&first);

        // Committed baseline stroke.
        draw_line(&mut surface, &[p(0.0, 0.0), p(10.0, 0.0)]);
        for commit in surface.take_commits() {
            doc.replace_content(commit.page_id, commit.strokes, commit.texts)
                .unwrap();
        }

        // Start a new stroke but switch pages before pointer-up.
        let s = settings();
        surface.handle_pointer(PointerEvent::down(p(50.0, 50.0)), Tool::Pen, &s);
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(60.0, 60.0),
            },
            Tool::Pen,
            &s,
        );

        doc.add_page();
        surface.sync_page(doc.active_page());
        assert!(surface.content().strokes.is_empty());
        assert_eq!(surface.gesture(), Gesture::Idle);

        doc.select(first.id).unwrap();
        surface.sync_page(doc.active_page());

        // Only the committed stroke survives; the in-progress one is gone.
        assert_eq!(surface.content().strokes.len(), 1);
        assert_eq!(surface.content().strokes[0].len(), 2);
        assert!(surface.take_commits().is_empty());
    }

    #[test]
    fn test_text_click_opens_placeholder_session_without_committing() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::down(p(40.0, 80.0)), Tool::Text, &settings());

        let session = surface.editing().unwrap();
        assert!(session.is_new);
        assert_eq!(session.label.text, PLACEHOLDER_TEXT);
        assert_eq!(session.label.position, p(40.0, 80.0));
        assert!(surface.content().texts.is_empty());
        assert!(surface.take_commits().is_empty());
    }

    #[test]
    fn test_text_commit_round_trip() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::down(p(40.0, 80.0)), Tool::Text, &settings());
        surface.editing_mut().unwrap().label.text = "Hello".to_string();
        surface.finish_editing();

        let commits = surface.take_commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].texts.len(), 1);
        assert_eq!(commits[0].texts[0].text, "Hello");
        assert_eq!(commits[0].texts[0].position, p(40.0, 80.0));
        assert!(surface.editing().is_none());
    }

    #[test]
    fn test_whitespace_only_session_is_discarded() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::down(p(40.0, 80.0)), Tool::Text, &settings());
        surface.editing_mut().unwrap().label.text = "   ".to_string();
        surface.finish_editing();

        assert!(surface.content().texts.is_empty());
        // Nothing changed, so nothing was committed.
        assert!(surface.take_commits().is_empty());
    }

    #[test]
    fn test_existing_label_emptied_is_deleted_and_committed() {
        let mut surface = surface();
        let id = place_label(&mut surface, p(50.0, 50.0), "Keep me");
        surface.take_commits();

        // Click squarely inside the label's box, release without moving.
        surface.handle_pointer(PointerEvent::down(p(55.0, 45.0)), Tool::Text, &settings());
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(55.0, 45.0),
            },
            Tool::Text,
            &settings(),
        );
        let session = surface.editing_mut().unwrap();
        assert_eq!(session.label.id, id);
        session.label.text = " ".to_string();
        surface.finish_editing();

        assert!(surface.content().texts.is_empty());
        assert_eq!(surface.take_commits().len(), 1);
    }

    #[test]
    fn test_click_on_committed_label_enters_edit() {
        let mut surface = surface();
        let id = place_label(&mut surface, p(100.0, 100.0), "Story");
        surface.take_commits();

        surface.handle_pointer(PointerEvent::down(p(110.0, 92.0)), Tool::Text, &settings());
        // Press starts as a potential drag, not yet an edit.
        assert!(surface.is_dragging());
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(110.0, 92.0),
            },
            Tool::Text,
            &settings(),
        );

        let session = surface.editing().unwrap();
        assert_eq!(session.label.id, id);
        assert!(!session.is_new);
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_edit_updates_label_in_place() {
        let mut surface = surface();
        let id = place_label(&mut surface, p(100.0, 100.0), "Draft");
        surface.take_commits();

        surface.handle_pointer(PointerEvent::down(p(105.0, 95.0)), Tool::Text, &settings());
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(105.0, 95.0),
            },
            Tool::Text,
            &settings(),
        );
        surface.editing_mut().unwrap().label.text = "Final".to_string();
        surface.finish_editing();

        assert_eq!(surface.content().texts.len(), 1);
        assert_eq!(surface.content().texts[0].id, id);
        assert_eq!(surface.content().texts[0].text, "Final");
    }

    #[test]
    fn test_drag_moves_anchor_by_pointer_delta() {
        let mut surface = surface();
        place_label(&mut surface, p(100.0, 100.0), "Move me");
        surface.take_commits();

        let s = settings();
        // Grab inside the box, away from the anchor.
        surface.handle_pointer(PointerEvent::down(p(110.0, 95.0)), Tool::Text, &s);
        surface.handle_pointer(
            PointerEvent::Move {
                position: p(150.0, 130.0),
            },
            Tool::Text,
            &s,
        );
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(150.0, 130.0),
            },
            Tool::Text,
            &s,
        );

        // Pointer moved by (40, 35); the anchor must move by exactly that.
        let label = &surface.content().texts[0];
        assert_eq!(label.position, p(140.0, 135.0));
        assert!(surface.editing().is_none());
        assert_eq!(surface.take_commits().len(), 1);
    }

    #[test]
    fn test_new_click_finalizes_previous_session() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::down(p(10.0, 30.0)), Tool::Text, &settings());
        surface.editing_mut().unwrap().label.text = "First".to_string();

        // Clicking elsewhere commits the pending session and opens a new one.
        surface.handle_pointer(PointerEvent::down(p(300.0, 300.0)), Tool::Text, &settings());

        assert_eq!(surface.content().texts.len(), 1);
        assert_eq!(surface.content().texts[0].text, "First");
        assert_eq!(surface.take_commits().len(), 1);
        assert!(surface.editing().unwrap().is_new);
    }

    #[test]
    fn test_secondary_click_deletes_label_and_commits() {
        let mut surface = surface();
        place_label(&mut surface, p(100.0, 100.0), "Doomed");
        surface.take_commits();

        surface.handle_pointer(
            PointerEvent::Down {
                position: p(110.0, 92.0),
                button: PointerButton::Secondary,
            },
            Tool::Text,
            &settings(),
        );

        assert!(surface.content().texts.is_empty());
        assert_eq!(surface.take_commits().len(), 1);
    }

    #[test]
    fn test_secondary_click_on_empty_space_is_noop() {
        let mut surface = surface();
        surface.handle_pointer(
            PointerEvent::Down {
                position: p(10.0, 10.0),
                button: PointerButton::Secondary,
            },
            Tool::Text,
            &settings(),
        );
        assert!(surface.take_commits().is_empty());
    }

    #[test]
    fn test_deleting_label_under_edit_clears_session() {
        let mut surface = surface();
        place_label(&mut surface, p(100.0, 100.0), "Editing");
        surface.take_commits();

        // Enter edit via click.
        surface.handle_pointer(PointerEvent::down(p(110.0, 92.0)), Tool::Text, &settings());
        surface.handle_pointer(
            PointerEvent::Up {
                position: p(110.0, 92.0),
            },
            Tool::Text,
            &settings(),
        );
        assert!(surface.editing().is_some());

        surface.handle_pointer(
            PointerEvent::Down {
                position: p(110.0, 92.0),
                button: PointerButton::Secondary,
            },
            Tool::Text,
            &settings(),
        );
        assert!(surface.editing().is_none());
        assert!(surface.content().texts.is_empty());
    }

    #[test]
    fn test_tool_switch_finalizes_pending_edit() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::down(p(20.0, 60.0)), Tool::Text, &settings());
        surface.editing_mut().unwrap().label.text = "Kept on switch".to_string();

        surface.on_tool_changed();

        assert!(surface.editing().is_none());
        assert_eq!(surface.content().texts.len(), 1);
        assert_eq!(surface.content().texts[0].text, "Kept on switch");
        assert_eq!(surface.take_commits().len(), 1);
    }

    #[test]
    fn test_double_click_enters_edit_even_when_press_started_a_drag() {
        let mut surface = surface();
        let id = place_label(&mut surface, p(100.0, 100.0), "Two clicks");
        surface.take_commits();

        // Second press of a double-click is routed into a drag first.
        surface.handle_pointer(PointerEvent::down(p(110.0, 92.0)), Tool::Text, &settings());
        assert!(surface.is_dragging());

        surface.handle_double_click(p(110.0, 92.0), Tool::Text);
        assert!(!surface.is_dragging());
        assert_eq!(surface.editing().unwrap().label.id, id);
    }
}
