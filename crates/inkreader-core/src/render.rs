//! Screen view models and their translation into display draw calls.

use embedded_graphics_core::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};
use log::debug;

use crate::{
    config::ReaderConfig,
    input::TouchRegion,
    layout::{RegionSpec, ScreenGeometry, ViewMode},
    text_policy::{book_count_label, fit_label, page_counter_label},
};

/// Approximate advance of one glyph at the label text size.
const CHAR_WIDTH_PX: u32 = 12;
const TEXT_INSET_PX: i32 = 14;
const LABEL_BYTES: usize = 160;
const EMPTY_ENTRY: &str = "_";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshMode {
    Full,
    Partial,
}

/// How the display collaborator should convert a page image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageOptions {
    pub dither: bool,
    pub invert: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            dither: true,
            invert: false,
        }
    }
}

/// Drawing surface of the e-paper panel.
///
/// `On` is ink, `Off` is paper. Nothing becomes visible before `refresh`.
pub trait DisplaySurface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn draw_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error>;
    fn set_cursor(&mut self, position: Point) -> Result<(), Self::Error>;
    fn print(&mut self, text: &str, color: BinaryColor) -> Result<(), Self::Error>;
    /// Decodes and draws the image at `path`; decoding is the surface's job.
    fn draw_image(
        &mut self,
        path: &str,
        position: Point,
        options: ImageOptions,
    ) -> Result<(), Self::Error>;
    fn refresh(&mut self, mode: RefreshMode) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookRowView<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl Default for BookRowView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            selected: false,
        }
    }
}

/// App-level view model consumed by [`RenderDispatcher`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    Home {
        title: &'a str,
        rows: &'a [BookRowView<'a>],
        book_count: usize,
        more_above: bool,
        more_below: bool,
    },
    Picture {
        book: &'a str,
        image_path: &'a str,
        page_number: usize,
        page_total: usize,
    },
    GotoOverlay {
        entry: &'a str,
        page_number: usize,
        page_total: usize,
    },
}

impl Screen<'_> {
    pub const fn mode(&self) -> ViewMode {
        match self {
            Self::Home { .. } => ViewMode::Home,
            Self::Picture { .. } => ViewMode::Picture,
            Self::GotoOverlay { .. } => ViewMode::GotoOverlay,
        }
    }
}

/// Turns [`Screen`]s into draw calls and picks the refresh mode.
///
/// A refresh is full on the first frame, when switching between the home
/// and picture screens, and once `full_refresh_threshold` partial refreshes
/// have accumulated. A threshold of zero disables the periodic full refresh.
#[derive(Debug)]
pub struct RenderDispatcher<D> {
    display: D,
    geometry: ScreenGeometry,
    image_options: ImageOptions,
    full_refresh_threshold: u16,
    partials_since_full: u16,
    last_mode: Option<ViewMode>,
}

impl<D> RenderDispatcher<D>
where
    D: DisplaySurface,
{
    pub fn new(display: D, config: &ReaderConfig) -> Self {
        Self {
            display,
            geometry: config.geometry,
            image_options: ImageOptions::default(),
            full_refresh_threshold: config.full_refresh_threshold,
            partials_since_full: 0,
            last_mode: None,
        }
    }

    pub const fn with_image_options(mut self, image_options: ImageOptions) -> Self {
        self.image_options = image_options;
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_inner(self) -> D {
        self.display
    }

    /// Draws `screen` and refreshes the panel.
    pub fn render(&mut self, screen: Screen<'_>) -> Result<RefreshMode, D::Error> {
        match screen {
            Screen::Home {
                title,
                rows,
                book_count,
                more_above,
                more_below,
            } => self.draw_home(title, rows, book_count, more_above, more_below)?,
            Screen::Picture {
                book,
                image_path,
                page_number,
                page_total,
            } => self.draw_picture(book, image_path, page_number, page_total)?,
            Screen::GotoOverlay {
                entry,
                page_number,
                page_total,
            } => self.draw_goto_overlay(entry, page_number, page_total)?,
        }

        let mode = self.next_refresh(screen.mode());
        debug!("render: screen={:?} refresh={:?}", screen.mode(), mode);
        self.display.refresh(mode)?;
        Ok(mode)
    }

    /// Shows `region` inverted as touch feedback. No-op when `mode` has no
    /// such region.
    pub fn render_press(&mut self, mode: ViewMode, region: TouchRegion) -> Result<(), D::Error> {
        let Some(area) = self.geometry.region_area(mode, region) else {
            return Ok(());
        };

        self.display.fill_rect(area, BinaryColor::On)?;
        self.print_in(area, region.label(), BinaryColor::Off)?;
        self.partials_since_full = self.partials_since_full.saturating_add(1);
        self.display.refresh(RefreshMode::Partial)
    }

    fn next_refresh(&mut self, mode: ViewMode) -> RefreshMode {
        let switched_screen = match (self.last_mode, mode) {
            (None, _) => true,
            (Some(ViewMode::Home), ViewMode::Home) => false,
            (Some(ViewMode::Home), _) | (Some(_), ViewMode::Home) => true,
            _ => false,
        };
        self.last_mode = Some(mode);

        let threshold_hit = self.full_refresh_threshold > 0
            && self.partials_since_full >= self.full_refresh_threshold;

        if switched_screen || threshold_hit {
            self.partials_since_full = 0;
            RefreshMode::Full
        } else {
            self.partials_since_full = self.partials_since_full.saturating_add(1);
            RefreshMode::Partial
        }
    }

    fn draw_home(
        &mut self,
        title: &str,
        rows: &[BookRowView<'_>],
        book_count: usize,
        more_above: bool,
        more_below: bool,
    ) -> Result<(), D::Error> {
        let geometry = self.geometry;
        self.display.clear()?;

        let header = geometry.header_area();
        self.print_in(header, title, BinaryColor::On)?;
        let mut count_buf = [0u8; 24];
        let count = book_count_label(book_count, &mut count_buf);
        self.print_right_in(header, count, BinaryColor::On)?;
        self.draw_divider(header.top_left.y + header.size.height as i32 - 1)?;

        let mut label_buf = [0u8; LABEL_BYTES];
        for (row_index, row) in rows.iter().enumerate() {
            let area = geometry.list_row(row_index);
            let max_chars = chars_fitting(area.size.width);
            let label = fit_label(row.label, &mut label_buf, max_chars);
            if row.selected {
                self.display.fill_rect(area, BinaryColor::On)?;
                self.print_in(area, label, BinaryColor::Off)?;
            } else {
                self.print_in(area, label, BinaryColor::On)?;
            }
        }

        if more_above {
            self.print_right_in(geometry.list_row(0), "^", BinaryColor::On)?;
        }
        if more_below {
            // The window may hold fewer rows than the panel fits.
            let last = rows.len().saturating_sub(1);
            self.print_right_in(geometry.list_row(last), "v", BinaryColor::On)?;
        }

        self.draw_buttons(ViewMode::Home)
    }

    fn draw_picture(
        &mut self,
        book: &str,
        image_path: &str,
        page_number: usize,
        page_total: usize,
    ) -> Result<(), D::Error> {
        let geometry = self.geometry;
        self.display.clear()?;
        self.display
            .draw_image(image_path, Point::zero(), self.image_options)?;

        let header = geometry.header_area();
        let mut title_buf = [0u8; LABEL_BYTES];
        // Leave the corner buttons uncovered.
        let title_width = geometry
            .width
            .saturating_sub(2 * (geometry.button_width + 2 * geometry.margin));
        let title = fit_label(book, &mut title_buf, chars_fitting(title_width));
        self.print_centered_in(header, title, BinaryColor::On)?;

        let mut counter_buf = [0u8; 24];
        let counter = page_counter_label(page_number, page_total, &mut counter_buf);
        self.print_centered_in(geometry.footer_area(), counter, BinaryColor::On)?;

        self.draw_buttons(ViewMode::Picture)
    }

    fn draw_goto_overlay(
        &mut self,
        entry: &str,
        page_number: usize,
        page_total: usize,
    ) -> Result<(), D::Error> {
        let geometry = self.geometry;
        let panel = geometry.goto_panel();
        self.display.fill_rect(panel, BinaryColor::Off)?;
        self.display.draw_rect(panel, BinaryColor::On)?;

        let entry_area = geometry.goto_entry();
        self.display.draw_rect(entry_area, BinaryColor::On)?;
        let shown = if entry.is_empty() { EMPTY_ENTRY } else { entry };
        self.print_in(entry_area, shown, BinaryColor::On)?;

        let mut counter_buf = [0u8; 24];
        let counter = page_counter_label(page_number, page_total, &mut counter_buf);
        self.print_right_in(entry_area, counter, BinaryColor::On)?;

        self.draw_buttons(ViewMode::GotoOverlay)
    }

    fn draw_buttons(&mut self, mode: ViewMode) -> Result<(), D::Error> {
        for RegionSpec { region, area } in self.geometry.regions(mode) {
            self.display.fill_rect(area, BinaryColor::Off)?;
            self.display.draw_rect(area, BinaryColor::On)?;
            self.print_centered_in(area, region.label(), BinaryColor::On)?;
        }
        Ok(())
    }

    fn draw_divider(&mut self, y: i32) -> Result<(), D::Error> {
        let line = Rectangle::new(
            Point::new(self.geometry.margin as i32, y),
            Size::new(
                self.geometry
                    .width
                    .saturating_sub(2 * self.geometry.margin),
                1,
            ),
        );
        self.display.fill_rect(line, BinaryColor::On)
    }

    fn print_in(&mut self, area: Rectangle, text: &str, color: BinaryColor) -> Result<(), D::Error> {
        let position = Point::new(area.top_left.x + TEXT_INSET_PX, text_baseline(area));
        self.display.set_cursor(position)?;
        self.display.print(text, color)
    }

    fn print_right_in(
        &mut self,
        area: Rectangle,
        text: &str,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        let right = area.top_left.x + area.size.width as i32 - TEXT_INSET_PX;
        let position = Point::new(right - text_width(text), text_baseline(area));
        self.display.set_cursor(position)?;
        self.display.print(text, color)
    }

    fn print_centered_in(
        &mut self,
        area: Rectangle,
        text: &str,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        let x = area.center().x - text_width(text) / 2;
        self.display.set_cursor(Point::new(x, text_baseline(area)))?;
        self.display.print(text, color)
    }
}

fn chars_fitting(width: u32) -> usize {
    (width.saturating_sub(2 * TEXT_INSET_PX as u32) / CHAR_WIDTH_PX) as usize
}

fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * CHAR_WIDTH_PX as i32
}

fn text_baseline(area: Rectangle) -> i32 {
    area.center().y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Clear,
        Rect(Rectangle, BinaryColor),
        Fill(Rectangle, BinaryColor),
        Cursor(Point),
        Print(std::string::String, BinaryColor),
        Image(std::string::String, ImageOptions),
        Refresh(RefreshMode),
    }

    #[derive(Default)]
    struct RecordingDisplay {
        ops: std::vec::Vec<Op>,
    }

    impl RecordingDisplay {
        fn printed(&self) -> std::vec::Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Print(text, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn refreshes(&self) -> std::vec::Vec<RefreshMode> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Refresh(mode) => Some(*mode),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplaySurface for RecordingDisplay {
        type Error = core::convert::Infallible;

        fn clear(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
            self.ops.push(Op::Rect(area, color));
            Ok(())
        }

        fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error> {
            self.ops.push(Op::Fill(area, color));
            Ok(())
        }

        fn set_cursor(&mut self, position: Point) -> Result<(), Self::Error> {
            self.ops.push(Op::Cursor(position));
            Ok(())
        }

        fn print(&mut self, text: &str, color: BinaryColor) -> Result<(), Self::Error> {
            self.ops.push(Op::Print(text.into(), color));
            Ok(())
        }

        fn draw_image(
            &mut self,
            path: &str,
            _position: Point,
            options: ImageOptions,
        ) -> Result<(), Self::Error> {
            self.ops.push(Op::Image(path.into(), options));
            Ok(())
        }

        fn refresh(&mut self, mode: RefreshMode) -> Result<(), Self::Error> {
            self.ops.push(Op::Refresh(mode));
            Ok(())
        }
    }

    fn dispatcher(threshold: u16) -> RenderDispatcher<RecordingDisplay> {
        let config = ReaderConfig::default().with_full_refresh_threshold(threshold);
        RenderDispatcher::new(RecordingDisplay::default(), &config)
    }

    const PICTURE: Screen<'static> = Screen::Picture {
        book: "Alpha",
        image_path: "/books/Alpha/0001.png",
        page_number: 1,
        page_total: 3,
    };

    #[test]
    fn home_highlights_selected_row() {
        let mut dispatcher = dispatcher(10);
        let rows = [
            BookRowView {
                label: "Alpha",
                selected: false,
            },
            BookRowView {
                label: "Beta",
                selected: true,
            },
        ];

        dispatcher
            .render(Screen::Home {
                title: "Books",
                rows: &rows,
                book_count: 2,
                more_above: false,
                more_below: false,
            })
            .unwrap();

        let display = dispatcher.display();
        let selected_area = ScreenGeometry::default().list_row(1);
        assert!(display.ops.contains(&Op::Fill(selected_area, BinaryColor::On)));
        assert!(display.ops.contains(&Op::Print("Beta".into(), BinaryColor::Off)));
        assert!(display.ops.contains(&Op::Print("Alpha".into(), BinaryColor::On)));
        assert_eq!(display.ops.first(), Some(&Op::Clear));
        assert!(display.printed().contains(&"2 books"));
    }

    #[test]
    fn picture_draws_image_counter_and_controls() {
        let mut dispatcher = dispatcher(10);

        dispatcher.render(PICTURE).unwrap();

        let display = dispatcher.display();
        assert!(display.ops.contains(&Op::Image(
            "/books/Alpha/0001.png".into(),
            ImageOptions::default()
        )));
        let printed = display.printed();
        for expected in ["Alpha", "1/3", "Home", "Go to", "<", ">"] {
            assert!(printed.contains(&expected), "{expected}");
        }
    }

    #[test]
    fn image_options_reach_the_display() {
        let options = ImageOptions {
            dither: false,
            invert: true,
        };
        let mut dispatcher = dispatcher(10).with_image_options(options);

        dispatcher.render(PICTURE).unwrap();

        let display = dispatcher.into_inner();
        assert!(display.ops.contains(&Op::Image(
            "/books/Alpha/0001.png".into(),
            options
        )));
    }

    #[test]
    fn more_below_marker_sits_on_last_drawn_row() {
        let tall = ScreenGeometry {
            height: 80 + 102 + 40 * 64,
            ..ScreenGeometry::INKPLATE_6FLICK
        };
        let config = ReaderConfig::default().with_geometry(tall);
        let mut dispatcher = RenderDispatcher::new(RecordingDisplay::default(), &config);
        let rows = [BookRowView::default(); 3];

        dispatcher
            .render(Screen::Home {
                title: "Books",
                rows: &rows,
                book_count: 5,
                more_above: false,
                more_below: true,
            })
            .unwrap();

        let ops = &dispatcher.display().ops;
        let marker = ops
            .iter()
            .position(|op| *op == Op::Print("v".into(), BinaryColor::On))
            .unwrap();
        let Op::Cursor(position) = ops[marker - 1] else {
            panic!("marker printed without a cursor");
        };
        assert!(tall.list_row(2).contains(position));
        assert!(!tall.list_row(39).contains(position));
    }

    #[test]
    fn overlay_keeps_page_and_shows_placeholder() {
        let mut dispatcher = dispatcher(10);
        dispatcher.render(PICTURE).unwrap();
        dispatcher.display_mut().ops.clear();

        dispatcher
            .render(Screen::GotoOverlay {
                entry: "",
                page_number: 1,
                page_total: 3,
            })
            .unwrap();

        let display = dispatcher.display();
        assert!(!display.ops.contains(&Op::Clear));
        let printed = display.printed();
        assert!(printed.contains(&EMPTY_ENTRY));
        assert!(printed.contains(&"OK"));
        assert!(printed.contains(&"CLR"));
        assert_eq!(display.refreshes(), [RefreshMode::Partial]);
    }

    #[test]
    fn first_frame_and_screen_switches_are_full() {
        let mut dispatcher = dispatcher(10);
        let home = Screen::Home {
            title: "Books",
            rows: &[],
            book_count: 0,
            more_above: false,
            more_below: false,
        };

        assert_eq!(dispatcher.render(home).unwrap(), RefreshMode::Full);
        assert_eq!(dispatcher.render(home).unwrap(), RefreshMode::Partial);
        assert_eq!(dispatcher.render(PICTURE).unwrap(), RefreshMode::Full);
        assert_eq!(dispatcher.render(PICTURE).unwrap(), RefreshMode::Partial);
        assert_eq!(dispatcher.render(home).unwrap(), RefreshMode::Full);
    }

    #[test]
    fn threshold_forces_periodic_full_refresh() {
        let mut dispatcher = dispatcher(3);
        let modes: std::vec::Vec<RefreshMode> = (0..6)
            .map(|_| dispatcher.render(PICTURE).unwrap())
            .collect();
        assert_eq!(
            modes,
            [
                RefreshMode::Full,
                RefreshMode::Partial,
                RefreshMode::Partial,
                RefreshMode::Partial,
                RefreshMode::Full,
                RefreshMode::Partial,
            ]
        );
    }

    #[test]
    fn zero_threshold_never_forces_full() {
        let mut dispatcher = dispatcher(0);
        dispatcher.render(PICTURE).unwrap();
        for _ in 0..20 {
            assert_eq!(dispatcher.render(PICTURE).unwrap(), RefreshMode::Partial);
        }
    }

    #[test]
    fn press_feedback_inverts_region() {
        let mut dispatcher = dispatcher(10);
        dispatcher
            .render_press(ViewMode::Picture, TouchRegion::Next)
            .unwrap();

        let area = ScreenGeometry::default()
            .region_area(ViewMode::Picture, TouchRegion::Next)
            .unwrap();
        let display = dispatcher.display();
        assert_eq!(display.ops[0], Op::Fill(area, BinaryColor::On));
        assert!(display.ops.contains(&Op::Print(">".into(), BinaryColor::Off)));
        assert_eq!(display.refreshes(), [RefreshMode::Partial]);
    }

    #[test]
    fn press_outside_mode_draws_nothing() {
        let mut dispatcher = dispatcher(10);
        dispatcher
            .render_press(ViewMode::Home, TouchRegion::Confirm)
            .unwrap();
        assert!(dispatcher.display().ops.is_empty());
    }
}
