//! Absolute-path classification and normalized joining.

use crate::conf::C_PATH_DELIMITER;
use crate::parts::clean_parts;

/// True iff the first character of `path` is the platform delimiter.
///
/// A zero-length input is not absolute.
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with(C_PATH_DELIMITER)
}

/// True iff `path` starts at the filesystem root.
///
/// Same classification as [`is_absolute_path`]; this is the predicate
/// [`join_path`] consults to decide whether to re-prepend a leading
/// delimiter after cleaning.
pub fn is_root(path: &str) -> bool {
    is_absolute_path(path)
}

/// Join `parts` into one normalized, delimiter-separated path.
///
/// Returns `None` for an empty slice: no path can be formed, which is
/// distinct from an empty-string path. Otherwise every part is cleaned via
/// [`clean_parts`] (surrounding whitespace and delimiter characters removed,
/// emptied segments kept), the cleaned parts are joined with the delimiter,
/// and a single leading delimiter is re-prepended iff the first part was
/// absolute.
///
/// Not the inverse of [`crate::parts::split_path`]: trimming is lossy, so
/// `join_path` of `split_path(p)` need not reproduce `p`. Joining is
/// idempotent after the first normalization.
pub fn join_path<S: AsRef<str>>(parts: &[S]) -> Option<String> {
    let part_first = parts.first()?;
    let b_leading = is_root(part_first.as_ref());

    let l_parts_clean = clean_parts(parts);
    let c_path = l_parts_clean.join(&C_PATH_DELIMITER.to_string());

    if b_leading {
        return Some(format!("{C_PATH_DELIMITER}{c_path}"));
    }
    Some(c_path)
}
