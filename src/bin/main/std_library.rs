use std::{fs, io};

use inkreader_core::catalog::BookDirectory;
use log::warn;

/// Book directory backed by the host filesystem.
#[derive(Debug, Default)]
pub struct StdLibrary;

impl StdLibrary {
    pub fn new() -> Self {
        Self
    }

    fn visit_entries(
        path: &str,
        want_dirs: bool,
        visit: &mut dyn FnMut(&str),
    ) -> io::Result<()> {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Follows symlinks, so linked books and pages are listed too.
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("catalog: skip entry path={} err={}", entry.path().display(), err);
                    continue;
                }
            };
            let wanted = if want_dirs {
                metadata.is_dir()
            } else {
                metadata.is_file()
            };
            if !wanted {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => visit(name),
                None => warn!("catalog: skip non-utf8 entry in {}", path),
            }
        }
        Ok(())
    }
}

impl BookDirectory for StdLibrary {
    type Error = io::Error;

    fn list_directories(
        &mut self,
        path: &str,
        visit: &mut dyn FnMut(&str),
    ) -> Result<(), Self::Error> {
        Self::visit_entries(path, true, visit)
    }

    fn list_files(&mut self, path: &str, visit: &mut dyn FnMut(&str)) -> Result<(), Self::Error> {
        Self::visit_entries(path, false, visit)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("inkreader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn listed(library: &mut StdLibrary, path: &std::path::Path, dirs: bool) -> Vec<String> {
        let path = path.to_str().unwrap();
        let mut names = Vec::new();
        let mut visit = |name: &str| names.push(name.to_owned());
        if dirs {
            library.list_directories(path, &mut visit).unwrap();
        } else {
            library.list_files(path, &mut visit).unwrap();
        }
        names.sort();
        names
    }

    #[test]
    fn splits_directories_from_files() {
        let root = scratch_dir("split");
        fs::create_dir(root.join("Alpha")).unwrap();
        fs::write(root.join("0001.png"), b"").unwrap();

        let mut library = StdLibrary::new();
        assert_eq!(listed(&mut library, &root, true), ["Alpha"]);
        assert_eq!(listed(&mut library, &root, false), ["0001.png"]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_books_and_pages_are_listed() {
        use std::os::unix::fs::symlink;

        let store = scratch_dir("store");
        fs::create_dir(store.join("Alpha")).unwrap();
        fs::write(store.join("0001.png"), b"").unwrap();

        let root = scratch_dir("links");
        symlink(store.join("Alpha"), root.join("Alpha")).unwrap();
        symlink(store.join("0001.png"), root.join("0001.png")).unwrap();
        symlink(store.join("missing.png"), root.join("broken.png")).unwrap();

        let mut library = StdLibrary::new();
        assert_eq!(listed(&mut library, &root, true), ["Alpha"]);
        assert_eq!(listed(&mut library, &root, false), ["0001.png"]);

        fs::remove_dir_all(&root).unwrap();
        fs::remove_dir_all(&store).unwrap();
    }
}
