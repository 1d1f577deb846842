//! File-extension derivation.

use crate::conf::C_PATH_DELIMITER;

/// Extension of the final path segment, or `None`.
///
/// Only the basename is inspected, so dots in directory components are
/// ignored. A dot in first position marks a hidden file rather than an
/// extension, and a trailing dot has nothing after it; both yield `None`.
pub fn derive_file_extension(path: &str) -> Option<String> {
    let c_basename = path.rsplit(C_PATH_DELIMITER).next().unwrap_or(path);
    let n_idx_dot = c_basename.rfind('.')?;
    if n_idx_dot == 0 || n_idx_dot == c_basename.len() - 1 {
        return None;
    }
    Some(c_basename[n_idx_dot + 1..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn derive_file_extension_uses_basename_only() {
        assert_eq!(derive_file_extension("/etc/sysctl.conf"), Some("conf".to_string()));
        assert_eq!(derive_file_extension("/etc.d/hostname"), None);
    }

    #[test]
    fn derive_file_extension_takes_last_dot() {
        assert_eq!(derive_file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(derive_file_extension("test.txt"), Some("txt".to_string()));
    }

    #[test]
    fn derive_file_extension_rejects_hidden_and_trailing_dots() {
        assert_eq!(derive_file_extension(".bashrc"), None);
        assert_eq!(derive_file_extension(".profile"), None);
        assert_eq!(derive_file_extension("test.txt."), None);
    }

    #[test]
    fn derive_file_extension_without_dot_is_none() {
        assert_eq!(derive_file_extension("hostname"), None);
        assert_eq!(derive_file_extension(""), None);
    }
}
