#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use iced::Theme;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(app::init, app::update, app::view)
        .title("Recycle Pickup")
        .theme(|_state: &app::State| Theme::Dark)
        .window(iced::window::Settings {
            size: iced::Size::new(760.0, 880.0),
            ..Default::default()
        })
        .run()
}
