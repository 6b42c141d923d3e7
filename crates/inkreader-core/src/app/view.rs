impl<FS, IN> ReaderApp<FS, IN>
where
    FS: BookDirectory,
    IN: TouchProvider,
{
    /// Scans `books_root` and starts on the home view with the first book
    /// selected. An empty library is fatal.
    pub fn new(
        mut library: FS,
        input: IN,
        config: ReaderConfig,
        books_root: &str,
    ) -> Result<Self, StartupError> {
        let mut catalog = Catalog::new();
        catalog.scan_books(&mut library, books_root)?;

        let visible_rows = config.geometry.visible_rows().min(MAX_VISIBLE_ROWS);
        info!(
            "ui-nav: start books={} visible_rows={}",
            catalog.book_count(),
            visible_rows
        );

        Ok(Self {
            library,
            input,
            config,
            catalog,
            books: BookCursor::new(visible_rows),
            ui: UiState::Home,
            gate: EventGate::new(config.debounce_ms),
            pending_redraw: true,
        })
    }

    /// Polls one touch, applies it and reports whether a frame is due.
    ///
    /// Skips the press feedback; callers that draw it use
    /// [`poll_touch`](Self::poll_touch) and [`apply_region`](Self::apply_region)
    /// directly.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if let Some(region) = self.poll_touch(now_ms) {
            self.apply_region(region);
        }

        if self.take_redraw() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Returns `true` once after every state change that needs a new frame.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.pending_redraw, false)
    }

    pub fn with_screen<R, F>(&self, f: F) -> R
    where
        F: FnOnce(Screen<'_>) -> R,
    {
        match &self.ui {
            UiState::Home => {
                let book_count = self.catalog.book_count();
                let window = self.books.visible_range(book_count);
                let mut rows: Vec<BookRowView<'_>, MAX_VISIBLE_ROWS> = Vec::new();
                for index in window.clone() {
                    let label = self
                        .catalog
                        .book_at(index)
                        .map(|book| book.name())
                        .unwrap_or("Untitled");
                    let _ = rows.push(BookRowView {
                        label,
                        selected: index == self.books.current(),
                    });
                }

                f(Screen::Home {
                    title: self.config.app_title,
                    rows: &rows,
                    book_count,
                    more_above: window.start > 0,
                    more_below: window.end < book_count,
                })
            }
            UiState::Picture { page } => {
                let image_path = self.page_path(page);
                f(Screen::Picture {
                    book: self.open_book_name(),
                    image_path: &image_path,
                    page_number: page.number(),
                    page_total: page.total(),
                })
            }
            UiState::GotoOverlay { page, entry } => f(Screen::GotoOverlay {
                entry: entry.as_str(),
                page_number: page.number(),
                page_total: page.total(),
            }),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self.ui {
            UiState::Home => ViewMode::Home,
            UiState::Picture { .. } => ViewMode::Picture,
            UiState::GotoOverlay { .. } => ViewMode::GotoOverlay,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn input(&self) -> &IN {
        &self.input
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn book_cursor(&self) -> BookCursor {
        self.books
    }

    /// Page cursor of the open book; `None` on the home view.
    pub fn page_cursor(&self) -> Option<PageCursor> {
        match &self.ui {
            UiState::Home => None,
            UiState::Picture { page } | UiState::GotoOverlay { page, .. } => Some(*page),
        }
    }

    /// Digits typed so far; `None` outside the goto overlay.
    pub fn goto_entry(&self) -> Option<&str> {
        match &self.ui {
            UiState::GotoOverlay { entry, .. } => Some(entry.as_str()),
            _ => None,
        }
    }

    fn open_book_name(&self) -> &str {
        self.catalog
            .open_book_index()
            .and_then(|index| self.catalog.book_at(index))
            .map(|book| book.name())
            .unwrap_or("")
    }

    fn page_path(&self, page: &PageCursor) -> EntryPath {
        self.catalog.page_path(page.index()).unwrap_or_else(|| {
            warn!("ui-nav: no path for page_index={}", page.index());
            EntryPath::new()
        })
    }
}
