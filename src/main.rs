//! ImageFinder: desktop client for the local AI image search backend
//!
//! One window: a prompt box on top, the result grid below. The Python
//! backend does the semantic search and serves the image files; this client
//! only queries, renders, and downloads.

mod app;
mod backend;
mod config;
mod native;
mod ui;

use app::ImageFinder;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = config::Config::get();
    tracing::info!(
        "Starting ImageFinder (search: {}, images: {})",
        config.search_url,
        config.image_url
    );

    iced::application("ImageFinder", ImageFinder::update, ImageFinder::view)
        .theme(ImageFinder::theme)
        .window(window::Settings {
            size: Size::new(1180.0, 820.0),
            position: window::Position::Centered,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
