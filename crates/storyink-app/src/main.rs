//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Storyink");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 840.0])
            .with_title("Storyink"),
        ..Default::default()
    };
    eframe::run_native(
        "Storyink",
        options,
        Box::new(|cc| Ok(Box::new(storyink_app::StoryApp::new(cc)))),
    )
}
