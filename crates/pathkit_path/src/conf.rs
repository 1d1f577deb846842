//! Path-syntax constants.

/// Platform path delimiter used by all split/join operations.
pub const C_PATH_DELIMITER: char = std::path::MAIN_SEPARATOR;

/// Segments excluded by `sanitize_parts`: structurally valid for
/// `split_path`/`join_path` but unsafe as standalone components.
pub const TUP_PARTS_FORBIDDEN: [&str; 3] = ["", ".", ".."];
