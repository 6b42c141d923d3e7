use std::{convert::Infallible, path::Path};

use embedded_graphics_core::{geometry::Point, pixelcolor::BinaryColor, primitives::Rectangle};
use inkreader_core::render::{DisplaySurface, ImageOptions, RefreshMode};
use log::{debug, info, warn};

/// Display surface that logs draw calls instead of driving a panel.
#[derive(Debug, Default)]
pub struct LogDisplay {
    cursor: Point,
    draw_calls: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn count(&mut self) {
        self.draw_calls = self.draw_calls.saturating_add(1);
    }
}

impl DisplaySurface for LogDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.count();
        debug!("display: clear");
        Ok(())
    }

    fn draw_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
        self.count();
        debug!(
            "display: rect at=({},{}) size={}x{} color={:?}",
            area.top_left.x, area.top_left.y, area.size.width, area.size.height, color
        );
        Ok(())
    }

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
        self.count();
        debug!(
            "display: fill at=({},{}) size={}x{} color={:?}",
            area.top_left.x, area.top_left.y, area.size.width, area.size.height, color
        );
        Ok(())
    }

    fn set_cursor(&mut self, position: Point) -> Result<(), Self::Error> {
        self.cursor = position;
        Ok(())
    }

    fn print(&mut self, text: &str, color: BinaryColor) -> Result<(), Self::Error> {
        self.count();
        info!(
            "display: text at=({},{}) color={:?} {:?}",
            self.cursor.x, self.cursor.y, color, text
        );
        Ok(())
    }

    fn draw_image(
        &mut self,
        path: &str,
        position: Point,
        options: ImageOptions,
    ) -> Result<(), Self::Error> {
        self.count();
        if !Path::new(path).is_file() {
            warn!("display: image missing path={}", path);
        }
        info!(
            "display: image at=({},{}) dither={} invert={} path={}",
            position.x, position.y, options.dither, options.invert, path
        );
        Ok(())
    }

    fn refresh(&mut self, mode: RefreshMode) -> Result<(), Self::Error> {
        info!("display: refresh {:?} after {} draw calls", mode, self.draw_calls);
        self.draw_calls = 0;
        Ok(())
    }
}
