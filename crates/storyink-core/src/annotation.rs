//! Annotation primitives: strokes and text labels.

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for text labels.
pub type LabelId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// One continuous pen gesture: an ordered polyline plus its style.
///
/// A stroke with fewer than 2 points is visually degenerate (renderers skip
/// it) but is still valid data: it may gain points while the gesture is in
/// progress, or be committed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in gesture order.
    pub points: Vec<Point>,
    /// Stroke color, captured when the gesture started.
    pub color: SerializableColor,
    /// Stroke width in pixels, captured when the gesture started.
    pub width: f64,
}

impl Stroke {
    /// Start a new stroke at a single point.
    pub fn begin(start: Point, color: SerializableColor, width: f64) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Append a point to the gesture.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke has enough points to draw.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Whole-stroke proximity test: true if ANY recorded point lies within
    /// `radius` of `point`. Segments between points are deliberately not
    /// considered; the eraser removes strokes by point proximity.
    pub fn hit_near(&self, point: Point, radius: f64) -> bool {
        self.points.iter().any(|p| p.distance(point) <= radius)
    }

    /// Axis-aligned bounding box of the recorded points.
    pub fn bounds(&self) -> Rect {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };
        let mut rect = Rect::from_points(*first, *first);
        for p in points {
            rect = rect.union_pt(*p);
        }
        rect
    }
}

/// A single-line text label anchored at a baseline-left point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLabel {
    /// Stable identity, assigned at creation and never reassigned. Join key
    /// for hit-testing, dragging and deletion.
    pub id: LabelId,
    /// Label content (non-empty once committed).
    pub text: String,
    /// Baseline-left anchor in surface coordinates.
    pub position: Point,
    /// Fill color.
    pub color: SerializableColor,
    /// Font size in pixels.
    pub font_size: f64,
}

impl TextLabel {
    /// Default font size for newly placed labels.
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;

    /// Approximate advance per character, as a fraction of the font size.
    /// Crude, but cheap and font-independent; see `hit_test`.
    pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

    /// Create a new label with a fresh identity.
    pub fn new(position: Point, text: String, color: SerializableColor, font_size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            position,
            color,
            font_size,
        }
    }

    /// Approximate width from character count. Actual glyph advances vary by
    /// font; the approximation is part of the hit-test contract.
    pub fn approximate_width(&self) -> f64 {
        self.text.chars().count() as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    /// Approximate bounding box: above and to the right of the anchor, one
    /// font size tall.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y - self.font_size,
            self.position.x + self.approximate_width(),
            self.position.y,
        )
    }

    /// Whether a pointer position falls inside the approximate bounding box.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// The stroke/text sets of one page: both the document model's committed
/// record and the annotation surface's working copy are this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub strokes: Vec<Stroke>,
    pub texts: Vec<TextLabel>,
}

impl PageContent {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.texts.is_empty()
    }
}
