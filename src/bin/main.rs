//! Desktop runner for the reader state machine.
//!
//! Scans `INKREADER_BOOKS_DIR` (default `books`), reads touches as `x y`
//! lines from stdin and logs every draw call instead of driving a panel.

use std::time::Instant;

use anyhow::{Context, Result};
use inkreader_core::{
    app::ReaderApp,
    config::ReaderConfig,
    render::RenderDispatcher,
};
use log::{LevelFilter, info};

use log_display::LogDisplay;
use std_library::StdLibrary;
use stdin_touch::StdinTouch;

#[path = "main/log_display.rs"]
mod log_display;
#[path = "main/std_library.rs"]
mod std_library;
#[path = "main/stdin_touch.rs"]
mod stdin_touch;

const BOOKS_DIR_ENV: &str = "INKREADER_BOOKS_DIR";
const DEFAULT_BOOKS_DIR: &str = "books";

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let books_root = std::env::var(BOOKS_DIR_ENV).unwrap_or_else(|_| DEFAULT_BOOKS_DIR.into());
    let config = ReaderConfig::default();
    info!(
        "boot: books_root={} panel={}x{} debounce_ms={} full_refresh_threshold={}",
        books_root,
        config.geometry.width,
        config.geometry.height,
        config.debounce_ms,
        config.full_refresh_threshold
    );

    let mut app = ReaderApp::new(
        StdLibrary::new(),
        StdinTouch::new(std::io::stdin().lock()),
        config,
        &books_root,
    )
    .with_context(|| format!("cannot start reader on {books_root}"))?;
    let mut dispatcher = RenderDispatcher::new(LogDisplay::new(), &config);

    let started = Instant::now();
    let mut frames: u32 = 0;

    loop {
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if let Some(region) = app.poll_touch(now_ms) {
            dispatcher.render_press(app.mode(), region)?;
            app.apply_region(region);
        }

        if app.take_redraw() {
            let refresh = app.with_screen(|screen| dispatcher.render(screen))?;
            frames = frames.saturating_add(1);
            info!("frame: #{} mode={:?} refresh={:?}", frames, app.mode(), refresh);
        }

        if app.input().is_closed() {
            break;
        }
    }

    info!("session: input closed after {} frames", frames);
    Ok(())
}

