//! Book and page catalog built from directory scans.
//!
//! The catalog owns every [`Book`] and, for the one open book, every [`Page`].
//! Storage is fixed-capacity; entries past capacity are skipped and reported
//! through [`CatalogLoadResult::truncated`].

pub mod mock;

use core::fmt;

use heapless::{String, Vec};
use log::{debug, info, warn};

use crate::{config::PAGE_EXTENSIONS, natural::natural_cmp};

pub const CATALOG_MAX_BOOKS: usize = 64;
pub const CATALOG_MAX_PAGES: usize = 512;
pub const CATALOG_NAME_BYTES: usize = 64;
pub const CATALOG_PATH_BYTES: usize = 192;

pub type EntryName = String<CATALOG_NAME_BYTES>;
pub type EntryPath = String<CATALOG_PATH_BYTES>;

/// Directory listing collaborator.
///
/// Both listings report names only, relative to `path`. A failed listing is
/// treated by the catalog exactly like an empty one.
pub trait BookDirectory {
    type Error;

    /// Immediate subdirectories of `path`, in enumeration order.
    fn list_directories(
        &mut self,
        path: &str,
        visit: &mut dyn FnMut(&str),
    ) -> Result<(), Self::Error>;

    /// Regular files directly inside `path`, in enumeration order.
    fn list_files(&mut self, path: &str, visit: &mut dyn FnMut(&str)) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Book {
    name: EntryName,
}

impl Book {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    name: EntryName,
}

impl Page {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    RootPathTooLong,
    EmptyLibrary,
    InvalidBookIndex,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootPathTooLong => write!(f, "books root path exceeds {CATALOG_PATH_BYTES} bytes"),
            Self::EmptyLibrary => write!(f, "no book directories found"),
            Self::InvalidBookIndex => write!(f, "book index out of range"),
        }
    }
}

impl core::error::Error for CatalogError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CatalogLoadResult {
    pub loaded: u16,
    pub truncated: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    root: EntryPath,
    books: Vec<Book, CATALOG_MAX_BOOKS>,
    pages: Vec<Page, CATALOG_MAX_PAGES>,
    open_book: Option<usize>,
}

impl Catalog {
    pub const fn new() -> Self {
        Self {
            root: String::new(),
            books: Vec::new(),
            pages: Vec::new(),
            open_book: None,
        }
    }

    /// Rebuilds the book sequence from the subdirectories of `root`.
    ///
    /// Discovery order is kept. An empty result is an error: the reader has
    /// nothing to show.
    pub fn scan_books<FS>(
        &mut self,
        fs: &mut FS,
        root: &str,
    ) -> Result<CatalogLoadResult, CatalogError>
    where
        FS: BookDirectory,
    {
        self.close_book();
        self.books.clear();
        self.root.clear();
        self.root
            .push_str(root.trim_end_matches('/'))
            .map_err(|_| CatalogError::RootPathTooLong)?;
        if self.root.is_empty() && root.starts_with('/') {
            let _ = self.root.push('/');
        }

        let books = &mut self.books;
        let mut truncated = false;
        let listed = fs.list_directories(&self.root, &mut |name: &str| {
            if name == "." || name == ".." {
                return;
            }
            let Ok(name) = EntryName::try_from(name) else {
                warn!("catalog: skip book name_len={} reason=name_too_long", name.len());
                truncated = true;
                return;
            };
            if books.push(Book { name }).is_err() {
                truncated = true;
            }
        });
        if listed.is_err() {
            warn!("catalog: listing books failed root={}", self.root.as_str());
        }

        if self.books.is_empty() {
            warn!("catalog: no books root={}", self.root.as_str());
            return Err(CatalogError::EmptyLibrary);
        }

        info!(
            "catalog: scanned books root={} count={} truncated={}",
            self.root.as_str(),
            self.books.len(),
            truncated
        );
        Ok(CatalogLoadResult {
            loaded: self.books.len() as u16,
            truncated,
        })
    }

    /// Replaces the page sequence with the images of book `index`.
    ///
    /// Always rescans. When the directory holds no page images the result
    /// reports zero pages and no book is left open.
    pub fn open_book<FS>(
        &mut self,
        fs: &mut FS,
        index: usize,
    ) -> Result<CatalogLoadResult, CatalogError>
    where
        FS: BookDirectory,
    {
        if index >= self.books.len() {
            return Err(CatalogError::InvalidBookIndex);
        }
        self.close_book();

        let mut dir = EntryPath::new();
        if join_path(&mut dir, &self.root, self.books[index].name()).is_err() {
            warn!(
                "catalog: skip open book={} reason=path_too_long",
                self.books[index].name()
            );
            return Ok(CatalogLoadResult {
                loaded: 0,
                truncated: true,
            });
        }

        let pages = &mut self.pages;
        let mut truncated = false;
        let listed = fs.list_files(&dir, &mut |name: &str| {
            if !is_page_file(name) {
                return;
            }
            // `page_path` must be able to rebuild `<dir>/<name>`.
            if dir.len() + 1 + name.len() > CATALOG_PATH_BYTES {
                warn!("catalog: skip page name={} reason=path_too_long", name);
                truncated = true;
                return;
            }
            let Ok(name) = EntryName::try_from(name) else {
                warn!("catalog: skip page name_len={} reason=name_too_long", name.len());
                truncated = true;
                return;
            };
            if !keep_head_page(pages, Page { name }) {
                truncated = true;
            }
        });
        if listed.is_err() {
            warn!("catalog: listing pages failed dir={}", dir.as_str());
        }

        self.pages
            .sort_unstable_by(|a, b| natural_cmp(a.name(), b.name()));

        if truncated {
            warn!(
                "catalog: page list truncated dir={} kept={}",
                dir.as_str(),
                self.pages.len()
            );
        }

        if self.pages.is_empty() {
            info!("catalog: book has no pages dir={}", dir.as_str());
        } else {
            self.open_book = Some(index);
            info!(
                "catalog: opened book={} pages={} truncated={}",
                self.books[index].name(),
                self.pages.len(),
                truncated
            );
        }

        Ok(CatalogLoadResult {
            loaded: self.pages.len() as u16,
            truncated,
        })
    }

    /// Drops every page of the open book. Safe to call with no book open.
    pub fn close_book(&mut self) {
        if let Some(index) = self.open_book.take() {
            debug!("catalog: closed book_index={} pages={}", index, self.pages.len());
        }
        self.pages.clear();
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn book_at(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn page_at(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn open_book_index(&self) -> Option<usize> {
        self.open_book
    }

    /// Position of the book called `name`. A miss is reported as `None`
    /// rather than defaulting to the head book.
    pub fn index_of_book(&self, name: &str) -> Option<usize> {
        self.books.iter().position(|book| book.name() == name)
    }

    pub fn index_of_page(&self, name: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.name() == name)
    }

    /// Full path of page `index` of the open book.
    pub fn page_path(&self, index: usize) -> Option<EntryPath> {
        let book = self.book_at(self.open_book?)?;
        let page = self.page_at(index)?;

        let mut path = EntryPath::new();
        join_path(&mut path, &self.root, book.name()).ok()?;
        path.push('/').ok()?;
        path.push_str(page.name()).ok()?;
        Some(path)
    }
}

/// Whether `name` carries one of the page image extensions.
pub fn is_page_file(name: &str) -> bool {
    let Some((stem, extension)) = name.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && PAGE_EXTENSIONS
            .iter()
            .any(|candidate| extension.eq_ignore_ascii_case(candidate))
}

/// Pushes `page`, or once `pages` is full, lets it replace the page that
/// sorts last. Overflow thus only ever drops the tail of the natural order.
///
/// Returns `false` when a page was dropped.
fn keep_head_page(pages: &mut Vec<Page, CATALOG_MAX_PAGES>, page: Page) -> bool {
    let Err(page) = pages.push(page) else {
        return true;
    };

    let last = pages
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| natural_cmp(a.name(), b.name()))
        .map(|(index, _)| index);
    if let Some(last) = last {
        if natural_cmp(page.name(), pages[last].name()).is_lt() {
            debug!(
                "catalog: page capacity full, drop={} keep={}",
                pages[last].name(),
                page.name()
            );
            pages[last] = page;
        }
    }
    false
}

fn join_path(out: &mut EntryPath, dir: &str, name: &str) -> Result<(), ()> {
    out.clear();
    out.push_str(dir)?;
    if !dir.ends_with('/') {
        out.push('/')?;
    }
    out.push_str(name)
}
