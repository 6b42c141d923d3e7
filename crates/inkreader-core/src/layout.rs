//! Screen geometry and the touch regions laid over it.
//!
//! Every view mode owns a fixed, ordered list of regions. Hit-testing walks
//! that list front to back and the first region containing the point wins,
//! so overlapping regions resolve deterministically.

use embedded_graphics_core::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use heapless::Vec;

use crate::input::TouchRegion;

pub const MAX_REGIONS: usize = 16;

const KEY_WIDTH: u32 = 140;
const KEY_HEIGHT: u32 = 96;
const KEY_GAP: u32 = 12;
const KEYPAD_COLUMNS: u32 = 3;
/// Entry row plus four keypad rows.
const KEYPAD_ROWS: u32 = 5;

const KEYPAD: [[TouchRegion; 3]; 4] = [
    [TouchRegion::Digit(1), TouchRegion::Digit(2), TouchRegion::Digit(3)],
    [TouchRegion::Digit(4), TouchRegion::Digit(5), TouchRegion::Digit(6)],
    [TouchRegion::Digit(7), TouchRegion::Digit(8), TouchRegion::Digit(9)],
    [TouchRegion::Clear, TouchRegion::Digit(0), TouchRegion::Confirm],
];

/// Which screen the touch regions belong to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMode {
    Home,
    Picture,
    GotoOverlay,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionSpec {
    pub region: TouchRegion,
    pub area: Rectangle,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
    pub header_height: u32,
    pub footer_height: u32,
    pub row_height: u32,
    pub margin: u32,
    pub button_width: u32,
    pub button_height: u32,
}

impl ScreenGeometry {
    /// 1024x758 panel of the Inkplate 6FLICK.
    pub const INKPLATE_6FLICK: Self = Self {
        width: 1024,
        height: 758,
        header_height: 80,
        footer_height: 102,
        row_height: 64,
        margin: 24,
        button_width: 200,
        button_height: 64,
    };

    /// Number of book rows that fit between header and footer.
    pub const fn visible_rows(&self) -> usize {
        let body = self
            .height
            .saturating_sub(self.header_height)
            .saturating_sub(self.footer_height);
        let row_height = if self.row_height == 0 {
            1
        } else {
            self.row_height
        };
        let rows = (body / row_height) as usize;
        if rows == 0 { 1 } else { rows }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.height))
    }

    pub fn header_area(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.header_height))
    }

    pub fn footer_area(&self) -> Rectangle {
        Rectangle::new(
            Point::new(0, self.height.saturating_sub(self.footer_height) as i32),
            Size::new(self.width, self.footer_height),
        )
    }

    /// Area of the `row`-th visible book row (zero-based within the window).
    pub fn list_row(&self, row: usize) -> Rectangle {
        let y = self.header_height + self.row_height * row as u32;
        Rectangle::new(
            Point::new(self.margin as i32, y as i32),
            Size::new(
                self.width.saturating_sub(2 * self.margin),
                self.row_height,
            ),
        )
    }

    /// Panel hosting the goto keypad, centered on screen.
    pub fn goto_panel(&self) -> Rectangle {
        let width = KEYPAD_COLUMNS * KEY_WIDTH + (KEYPAD_COLUMNS + 1) * KEY_GAP;
        let height = KEYPAD_ROWS * KEY_HEIGHT + (KEYPAD_ROWS + 1) * KEY_GAP;
        Rectangle::new(
            Point::new(
                (self.width.saturating_sub(width) / 2) as i32,
                (self.height.saturating_sub(height) / 2) as i32,
            ),
            Size::new(width, height),
        )
    }

    /// Read-only field that echoes the typed page number.
    pub fn goto_entry(&self) -> Rectangle {
        let panel = self.goto_panel();
        Rectangle::new(
            panel.top_left + Point::new(KEY_GAP as i32, KEY_GAP as i32),
            Size::new(2 * KEY_WIDTH + KEY_GAP, KEY_HEIGHT),
        )
    }

    /// Touch regions of `mode` in hit-test priority order.
    pub fn regions(&self, mode: ViewMode) -> Vec<RegionSpec, MAX_REGIONS> {
        let mut regions = Vec::new();
        let mut push = |region: TouchRegion, area: Rectangle| {
            // Capacity covers the largest mode (the keypad).
            let _ = regions.push(RegionSpec { region, area });
        };

        match mode {
            ViewMode::Home => {
                push(TouchRegion::Select, self.footer_button(Column::Center));
                push(TouchRegion::Prev, self.footer_button(Column::Left));
                push(TouchRegion::Next, self.footer_button(Column::Right));
            }
            ViewMode::Picture => {
                push(TouchRegion::Home, self.header_button(Column::Left));
                push(TouchRegion::Goto, self.header_button(Column::Right));
                push(TouchRegion::Prev, self.footer_button(Column::Left));
                push(TouchRegion::Next, self.footer_button(Column::Right));
            }
            ViewMode::GotoOverlay => {
                push(TouchRegion::Back, self.keypad_cell(0, 2));
                for (row, keys) in KEYPAD.iter().enumerate() {
                    for (col, key) in keys.iter().enumerate() {
                        push(*key, self.keypad_cell(row as u32 + 1, col as u32));
                    }
                }
            }
        }

        regions
    }

    /// First region of `mode` containing `point`.
    pub fn region_at(&self, mode: ViewMode, point: Point) -> Option<TouchRegion> {
        self.regions(mode)
            .iter()
            .find(|entry| entry.area.contains(point))
            .map(|entry| entry.region)
    }

    pub fn region_area(&self, mode: ViewMode, region: TouchRegion) -> Option<Rectangle> {
        self.regions(mode)
            .iter()
            .find(|entry| entry.region == region)
            .map(|entry| entry.area)
    }

    fn header_button(&self, column: Column) -> Rectangle {
        let y = self.header_height.saturating_sub(self.button_height) / 2;
        self.button_at(column, y)
    }

    fn footer_button(&self, column: Column) -> Rectangle {
        let footer_top = self.height.saturating_sub(self.footer_height);
        let y = footer_top + self.footer_height.saturating_sub(self.button_height) / 2;
        self.button_at(column, y)
    }

    fn button_at(&self, column: Column, y: u32) -> Rectangle {
        let x = match column {
            Column::Left => self.margin,
            Column::Center => self.width.saturating_sub(self.button_width) / 2,
            Column::Right => self
                .width
                .saturating_sub(self.margin)
                .saturating_sub(self.button_width),
        };
        Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(self.button_width, self.button_height),
        )
    }

    fn keypad_cell(&self, row: u32, col: u32) -> Rectangle {
        let panel = self.goto_panel();
        let x = KEY_GAP + col * (KEY_WIDTH + KEY_GAP);
        let y = KEY_GAP + row * (KEY_HEIGHT + KEY_GAP);
        Rectangle::new(
            panel.top_left + Point::new(x as i32, y as i32),
            Size::new(KEY_WIDTH, KEY_HEIGHT),
        )
    }
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self::INKPLATE_6FLICK
    }
}

#[derive(Clone, Copy)]
enum Column {
    Left,
    Center,
    Right,
}
