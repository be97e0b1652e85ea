// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod config;
mod contact;
mod content;
mod error;
mod ui;

use app::Portfolio;
use config::Config;

fn main() -> iced::Result {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A broken config file is not fatal; fall back to defaults.
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    iced::application(content::SITE_TITLE, Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .window_size((config.window_width, config.window_height))
        .run_with(Portfolio::new)
}
