impl<FS, IN> ReaderApp<FS, IN>
where
    FS: BookDirectory,
    IN: TouchProvider,
{
    /// Polls the touch controller once and resolves the report to a region of
    /// the current view.
    ///
    /// Misses, debounced repeats and controller errors all yield `None`.
    pub fn poll_touch(&mut self, now_ms: u64) -> Option<TouchRegion> {
        let point = match self.input.poll_touch() {
            Ok(Some(point)) => point,
            Ok(None) => return None,
            Err(_) => {
                warn!("input: touch poll failed");
                return None;
            }
        };

        let mode = self.mode();
        let Some(region) = self.config.geometry.region_at(mode, point.as_point()) else {
            debug!("input: miss mode={:?} x={} y={}", mode, point.x, point.y);
            return None;
        };

        if !self.gate.accept(now_ms) {
            debug!("input: debounced region={:?} now_ms={}", region, now_ms);
            return None;
        }

        Some(region)
    }

    /// Runs the transition bound to `region` in the current view.
    ///
    /// Regions that belong to another view are ignored.
    pub fn apply_region(&mut self, region: TouchRegion) {
        match self.ui {
            UiState::Home => self.apply_home_region(region),
            UiState::Picture { page } => self.apply_picture_region(page, region),
            UiState::GotoOverlay { page, .. } => self.apply_goto_region(page, region),
        }
    }

    fn apply_home_region(&mut self, region: TouchRegion) {
        match region {
            TouchRegion::Select => self.open_selected_book(),
            TouchRegion::Prev => self.step_book(Direction::Backward),
            TouchRegion::Next => self.step_book(Direction::Forward),
            _ => debug!("ui-nav: ignore region={:?} mode=home", region),
        }
    }

    fn apply_picture_region(&mut self, mut page: PageCursor, region: TouchRegion) {
        match region {
            TouchRegion::Home => self.enter_home(),
            TouchRegion::Goto => self.enter_goto(page),
            TouchRegion::Prev | TouchRegion::Next => {
                let direction = if region == TouchRegion::Next {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                if page.advance(direction) {
                    debug!(
                        "ui-nav: page {}/{} direction={:?}",
                        page.number(),
                        page.total(),
                        direction
                    );
                } else {
                    debug!("ui-nav: page boundary direction={:?}", direction);
                }
                self.enter_picture(page);
            }
            _ => debug!("ui-nav: ignore region={:?} mode=picture", region),
        }
    }

    fn apply_goto_region(&mut self, mut page: PageCursor, region: TouchRegion) {
        let UiState::GotoOverlay { entry, .. } = &mut self.ui else {
            return;
        };

        match region {
            TouchRegion::Digit(digit) => {
                if !entry.append_digit(digit) {
                    debug!("ui-nav: goto entry full entry={}", entry.as_str());
                }
                self.pending_redraw = true;
            }
            TouchRegion::Clear => {
                entry.clear();
                self.pending_redraw = true;
            }
            TouchRegion::Confirm => {
                let requested = entry.commit();
                page.jump_to(requested);
                debug!(
                    "ui-nav: goto requested={} page={}/{}",
                    requested,
                    page.number(),
                    page.total()
                );
                self.enter_picture(page);
            }
            TouchRegion::Back => {
                debug!("ui-nav: goto dismissed page={}", page.number());
                self.enter_picture(page);
            }
            _ => debug!("ui-nav: ignore region={:?} mode=goto", region),
        }
    }
}
