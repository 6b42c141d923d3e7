impl<FS, IN> ReaderApp<FS, IN>
where
    FS: BookDirectory,
    IN: TouchProvider,
{
    fn enter_home(&mut self) {
        self.catalog.close_book();
        debug!("ui-nav: enter home book={}", self.books.current());
        self.ui = UiState::Home;
        self.pending_redraw = true;
    }

    fn enter_picture(&mut self, page: PageCursor) {
        self.ui = UiState::Picture { page };
        self.pending_redraw = true;
    }

    fn enter_goto(&mut self, page: PageCursor) {
        debug!("ui-nav: enter goto page={}/{}", page.number(), page.total());
        self.ui = UiState::GotoOverlay {
            page,
            entry: GotoBuffer::new(),
        };
        self.pending_redraw = true;
    }

    fn step_book(&mut self, direction: Direction) {
        let book_count = self.catalog.book_count();
        if self.books.advance(direction, book_count) {
            debug!(
                "ui-nav: book {}/{} scroll_offset={}",
                self.books.current().saturating_add(1),
                book_count,
                self.books.scroll_offset()
            );
        }
        self.pending_redraw = true;
    }

    /// Loads the selected book and shows its first page. A book without
    /// page images leaves the home view in place.
    fn open_selected_book(&mut self) {
        let selected = self.books.current();
        self.catalog.close_book();

        let loaded = match self.catalog.open_book(&mut self.library, selected) {
            Ok(result) => result,
            Err(err) => {
                warn!("ui-nav: open failed book={} err={}", selected, err);
                self.pending_redraw = true;
                return;
            }
        };

        match PageCursor::first(self.catalog.total_pages()) {
            Some(page) => {
                debug!(
                    "ui-nav: open book={} pages={} truncated={}",
                    selected, loaded.loaded, loaded.truncated
                );
                self.enter_picture(page);
            }
            None => {
                info!("ui-nav: book={} has no pages, staying home", selected);
                self.pending_redraw = true;
            }
        }
    }
}
