//! Day Ruler
//!
//! A scrollable minute/hour ruler for a single day, with a step selector and a
//! settings panel for theme and ruler density.

mod app;
mod components;
mod constants;
mod core;
mod state;
mod timeline;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::new()
            .with_window(
                WindowBuilder::new()
                    .with_title("Day Ruler")
                    .with_inner_size(LogicalSize::new(1280.0, 480.0))
                    .with_resizable(true),
            )
            .with_menu(None);

        dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app::App);
}
