//! Storyink Core Library
//!
//! Platform-agnostic data structures and logic for the Storyink multi-page
//! drawing tool.

pub mod annotation;
pub mod document;
pub mod input;
pub mod reorder;
pub mod surface;
pub mod tools;

pub use annotation::{LabelId, PageContent, SerializableColor, Stroke, TextLabel};
pub use document::{DocumentError, Page, PageId, StoryDocument};
pub use input::{PointerButton, PointerEvent};
pub use reorder::array_move;
pub use surface::{AnnotationSurface, Commit, Gesture, TextSession, ERASE_RADIUS};
pub use tools::{Tool, ToolSettings};
