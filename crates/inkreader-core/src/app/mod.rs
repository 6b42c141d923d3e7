//! Touch-driven state machine for the home, picture and goto views.

use core::fmt;

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    catalog::{BookDirectory, Catalog, CatalogError, EntryPath},
    config::ReaderConfig,
    cursor::{BookCursor, Direction, PageCursor},
    goto_buffer::GotoBuffer,
    input::{TouchProvider, TouchRegion},
    layout::ViewMode,
    render::{BookRowView, Screen},
};

/// Upper bound on book rows drawn at once, whatever the geometry allows.
pub const MAX_VISIBLE_ROWS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Failures that stop the reader before the first frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartupError {
    Catalog(CatalogError),
}

impl From<CatalogError> for StartupError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "library scan failed: {err}"),
        }
    }
}

impl core::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
        }
    }
}

/// Mode plus the data that only exists in that mode.
#[derive(Clone, Debug, Eq, PartialEq)]
enum UiState {
    Home,
    Picture { page: PageCursor },
    GotoOverlay { page: PageCursor, entry: GotoBuffer },
}

pub struct ReaderApp<FS, IN>
where
    FS: BookDirectory,
    IN: TouchProvider,
{
    library: FS,
    input: IN,
    config: ReaderConfig,
    catalog: Catalog,
    books: BookCursor,
    ui: UiState,
    gate: EventGate,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");
include!("gate.rs");
