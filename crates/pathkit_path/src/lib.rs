//! `pathkit_path` v1:
//! Pure string path-syntax kernel.
//!
//! - `conf`      : delimiter and forbidden-segment constants
//! - `parts`     : segment split/clean/sanitize operations
//! - `join`      : absolute-path classification and normalized joining
//! - `extension` : file-extension derivation

pub mod conf;
pub mod extension;
pub mod join;
pub mod parts;

pub use conf::{C_PATH_DELIMITER, TUP_PARTS_FORBIDDEN};
pub use extension::derive_file_extension;
pub use join::{is_absolute_path, is_root, join_path};
pub use parts::{clean_parts, is_forbidden_part, sanitize_parts, split_path};
