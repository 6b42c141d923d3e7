use super::BookDirectory;

/// One entry inside a mock book directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MockEntry {
    File(&'static str),
    Directory(&'static str),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MockBook {
    pub name: &'static str,
    pub entries: &'static [MockEntry],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MockDirectoryError {
    NotFound,
    Unreadable,
}

/// Static in-memory books tree used by tests and bring-up.
#[derive(Debug, Clone)]
pub struct MockLibrary {
    root: &'static str,
    books: &'static [MockBook],
    unreadable: bool,
    listings: u32,
}

impl MockLibrary {
    pub const fn new(root: &'static str, books: &'static [MockBook]) -> Self {
        Self {
            root,
            books,
            unreadable: false,
            listings: 0,
        }
    }

    /// Every listing fails from now on.
    pub const fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    /// Number of listings served so far.
    pub const fn listings(&self) -> u32 {
        self.listings
    }

    fn book(&self, path: &str) -> Option<&'static MockBook> {
        let name = path.strip_prefix(self.root)?.strip_prefix('/')?;
        self.books.iter().find(|book| book.name == name)
    }

    fn begin_listing(&mut self) -> Result<(), MockDirectoryError> {
        self.listings = self.listings.saturating_add(1);
        if self.unreadable {
            Err(MockDirectoryError::Unreadable)
        } else {
            Ok(())
        }
    }
}

impl BookDirectory for MockLibrary {
    type Error = MockDirectoryError;

    fn list_directories(
        &mut self,
        path: &str,
        visit: &mut dyn FnMut(&str),
    ) -> Result<(), Self::Error> {
        self.begin_listing()?;

        if path == self.root {
            for book in self.books {
                visit(book.name);
            }
            return Ok(());
        }

        let book = self.book(path).ok_or(MockDirectoryError::NotFound)?;
        for entry in book.entries {
            if let MockEntry::Directory(name) = entry {
                visit(name);
            }
        }
        Ok(())
    }

    fn list_files(&mut self, path: &str, visit: &mut dyn FnMut(&str)) -> Result<(), Self::Error> {
        self.begin_listing()?;

        let book = self.book(path).ok_or(MockDirectoryError::NotFound)?;
        for entry in book.entries {
            if let MockEntry::File(name) = entry {
                visit(name);
            }
        }
        Ok(())
    }
}
