//! Lazy depth-first directory-tree traversal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::util::join_child;

/// Walk the entries below `dir_root`.
///
/// Returns a finite, pull-based iterator over fully-qualified entry paths.
/// A root that is missing or not a directory yields an empty walk, never an
/// error. Each invocation re-reads the tree; the iterator is not restartable.
///
/// Entry order follows the underlying directory listing and is unspecified
/// and platform dependent; `.` and `..` are never yielded. Every directory
/// entry is yielded before its own children, and with `if_recursive` the walk
/// descends into every directory it yields; recursion stays on for the whole
/// subtree once it starts.
///
/// Symbolic links are not resolved: a symlinked directory that cycles back
/// into the tree causes unbounded traversal. Unreadable subdirectories are
/// logged and skipped.
pub fn walk_tree<P: AsRef<Path>>(dir_root: P, if_recursive: bool) -> IterWalkTree {
    let path_root = dir_root.as_ref();
    let mut l_frames = Vec::new();
    if path_root.is_dir() {
        l_frames.push(_list_child_paths(path_root).into_iter());
    }
    IterWalkTree {
        if_recursive,
        l_frames,
    }
}

/// Cursor over one in-progress tree walk.
///
/// Holds one exhausted-on-demand frame per directory level. Listings are
/// collected frame-by-frame, so no OS directory handle stays open across the
/// walk; abandoning the iterator mid-walk releases everything.
#[derive(Debug)]
pub struct IterWalkTree {
    if_recursive: bool,
    l_frames: Vec<std::vec::IntoIter<PathBuf>>,
}

impl Iterator for IterWalkTree {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let iter_frame = self.l_frames.last_mut()?;
            let Some(path_entry) = iter_frame.next() else {
                self.l_frames.pop();
                continue;
            };

            if self.if_recursive && path_entry.is_dir() {
                self.l_frames.push(_list_child_paths(&path_entry).into_iter());
            }
            return Some(path_entry);
        }
    }
}

/// Collect the child paths of one directory, releasing its handle before
/// returning.
fn _list_child_paths(path_dir: &Path) -> Vec<PathBuf> {
    let iter_entries = match fs::read_dir(path_dir) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Failed to read directory {} ({e})", path_dir.display());
            return Vec::new();
        }
    };

    let mut l_children = Vec::new();
    for entry_res in iter_entries {
        let entry = match entry_res {
            Ok(v) => v,
            Err(e) => {
                log::warn!(
                    "Failed to read directory entry under {} ({e})",
                    path_dir.display()
                );
                continue;
            }
        };
        let c_name = entry.file_name().to_string_lossy().to_string();
        l_children.push(join_child(path_dir, &c_name));
    }
    l_children
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::walk_tree;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("pathkit_walk_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn write_text(path: &Path, txt: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, txt).expect("write text");
    }

    fn build_two_by_three(root: &Path) {
        for c_dir in ["1", "2"] {
            for c_file in ["a", "b", "c"] {
                write_text(&root.join(c_dir).join(c_file), "0123456789");
            }
        }
    }

    #[test]
    fn walk_tree_recursive_yields_every_entry_once() {
        let tmp = TestDir::new();
        build_two_by_three(tmp.path());

        let l_entries: Vec<PathBuf> = walk_tree(tmp.path(), true).collect();
        assert_eq!(l_entries.len(), 8);
        for path_entry in &l_entries {
            assert!(path_entry.exists());
        }

        let set_unique: BTreeSet<&PathBuf> = l_entries.iter().collect();
        assert_eq!(set_unique.len(), 8);
    }

    #[test]
    fn walk_tree_non_recursive_stays_on_top_level() {
        let tmp = TestDir::new();
        build_two_by_three(tmp.path());

        let l_entries: Vec<PathBuf> = walk_tree(tmp.path(), false).collect();
        assert_eq!(l_entries.len(), 2);
        for path_entry in &l_entries {
            assert!(path_entry.is_dir());
        }
    }

    #[test]
    fn walk_tree_yields_directory_before_its_children() {
        let tmp = TestDir::new();
        write_text(&tmp.path().join("sub/inner/file.txt"), "x");

        let l_entries: Vec<PathBuf> = walk_tree(tmp.path(), true).collect();
        let n_idx_sub = l_entries
            .iter()
            .position(|p| p.ends_with("sub"))
            .expect("sub yielded");
        let n_idx_inner = l_entries
            .iter()
            .position(|p| p.ends_with("inner"))
            .expect("inner yielded");
        let n_idx_file = l_entries
            .iter()
            .position(|p| p.ends_with("file.txt"))
            .expect("file yielded");

        assert!(n_idx_sub < n_idx_inner);
        assert!(n_idx_inner < n_idx_file);
    }

    #[test]
    fn walk_tree_missing_root_is_empty() {
        let tmp = TestDir::new();
        let path_missing = tmp.path().join("nope");
        assert_eq!(walk_tree(&path_missing, true).count(), 0);
    }

    #[test]
    fn walk_tree_file_root_is_empty() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("plain.txt");
        write_text(&path_file, "x");
        assert_eq!(walk_tree(&path_file, true).count(), 0);
    }

    #[test]
    fn walk_tree_empty_directory_is_empty() {
        let tmp = TestDir::new();
        assert_eq!(walk_tree(tmp.path(), true).count(), 0);
    }

    #[test]
    fn walk_tree_is_lazy_per_level() {
        let tmp = TestDir::new();
        build_two_by_three(tmp.path());

        // Taking only the first entry must not require walking the rest.
        let mut iter_walk = walk_tree(tmp.path(), true);
        let path_first = iter_walk.next().expect("first entry");
        assert!(path_first.exists());
        drop(iter_walk);
    }
}
