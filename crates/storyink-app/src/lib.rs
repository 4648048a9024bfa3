//! Storyink Application
//!
//! The application shell: windowing via eframe, the canvas view translating
//! pointer input into surface events, and the surrounding chrome (toolbar,
//! page tray, modal dialogs).

mod app;
mod canvas_view;
mod ui;

pub use app::StoryApp;
pub use canvas_view::CanvasView;
pub use ui::{page_tray, toolbar, TrayAction};
