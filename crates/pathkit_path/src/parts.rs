//! Segment-level operations: split, clean, sanitize.

use crate::conf::{C_PATH_DELIMITER, TUP_PARTS_FORBIDDEN};

/// Split `path` on the platform delimiter into its segments.
///
/// Purely structural: empty, `.` and `..` segments are preserved, and an
/// empty input yields a single empty segment. Never fails.
pub fn split_path(path: &str) -> Vec<String> {
    path.split(C_PATH_DELIMITER).map(str::to_string).collect()
}

/// True iff `part` is exactly `""`, `"."` or `".."`.
pub fn is_forbidden_part(part: &str) -> bool {
    TUP_PARTS_FORBIDDEN.contains(&part)
}

/// Remove forbidden segments from `parts`, preserving relative order.
///
/// Stricter than [`clean_parts`]: meant for untrusted segment lists whose
/// entries end up as standalone components (URL paths, archive member names).
/// Performs no trimming of its own.
pub fn sanitize_parts<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .map(|part| part.as_ref())
        .filter(|part| !is_forbidden_part(part))
        .map(str::to_string)
        .collect()
}

/// Trim surrounding whitespace and delimiter characters from each segment.
///
/// Segments that become empty through trimming stay in the output; callers
/// that need them gone must run [`sanitize_parts`] separately.
pub fn clean_parts<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .map(|part| {
            part.as_ref()
                .trim_matches(|ch: char| ch == C_PATH_DELIMITER || ch.is_whitespace())
                .to_string()
        })
        .collect()
}
