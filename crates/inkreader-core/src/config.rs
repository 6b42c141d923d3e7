//! Compile-time defaults and the runtime reader configuration.

use crate::layout::ScreenGeometry;

/// Directory whose immediate subdirectories are the books.
pub const DEFAULT_BOOKS_ROOT: &str = "/books";

/// Page image extensions, matched case-insensitively.
pub const PAGE_EXTENSIONS: [&str; 4] = ["bmp", "jpg", "jpeg", "png"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub app_title: &'static str,
    pub geometry: ScreenGeometry,
    /// Minimum spacing between two accepted touch events.
    pub debounce_ms: u64,
    /// Partial refreshes allowed before the next refresh is forced to full.
    pub full_refresh_threshold: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            app_title: "Books",
            geometry: ScreenGeometry::INKPLATE_6FLICK,
            debounce_ms: 250,
            full_refresh_threshold: 10,
        }
    }
}

impl ReaderConfig {
    pub const fn with_geometry(mut self, geometry: ScreenGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_full_refresh_threshold(mut self, full_refresh_threshold: u16) -> Self {
        self.full_refresh_threshold = full_refresh_threshold;
        self
    }
}
