#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    daemon(
        app::ExtractorApp::build,
        app::ExtractorApp::handle_update,
        app::ExtractorApp::render_view,
    )
    .title(app::ExtractorApp::window_title)
    .subscription(app::ExtractorApp::handle_subscription)
    .run()
}
