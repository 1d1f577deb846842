//! Copy/remove specification models and error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for include/exclude lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Exact substring match.
    Literal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `copy_tree`.
#[derive(Debug, Clone)]
pub struct SpecCopyOptions {
    /// Include patterns applied to file basename.
    pub patterns_include_files: Option<Vec<String>>,
    /// Exclude patterns applied to file basename.
    pub patterns_exclude_files: Option<Vec<String>>,
    /// Include patterns applied to directory basename.
    pub patterns_include_dirs: Option<Vec<String>>,
    /// Exclude patterns applied to directory basename.
    pub patterns_exclude_dirs: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumPatternMode,
    /// Permission mode forced onto every copied file after the copy.
    pub mode_permissions: Option<u32>,
    /// Preserve timestamps (and xattrs on Linux) of copied files.
    pub if_preserve_metadata: bool,
    /// Do not mutate the filesystem; count what would happen.
    pub if_dry_run: bool,
}

impl Default for SpecCopyOptions {
    fn default() -> Self {
        Self {
            patterns_include_files: None,
            patterns_exclude_files: None,
            patterns_include_dirs: None,
            patterns_exclude_dirs: None,
            rule_pattern: EnumPatternMode::Glob,
            mode_permissions: None,
            if_preserve_metadata: true,
            if_dry_run: false,
        }
    }
}

/// Failures surfaced by `copy_tree`. First failure aborts the walk.
#[derive(Debug)]
pub enum CopyTreeError {
    /// Source path is not an existing directory.
    SourceNotFound(PathBuf),
    /// Source and destination overlap (one root contains the other).
    SourceDestinationOverlap {
        /// Normalized source directory.
        source: PathBuf,
        /// Normalized destination directory.
        destination: PathBuf,
    },
    /// Destination root could not be created.
    DestinationCreateFailed {
        /// Destination path that failed creation.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// A destination subdirectory could not be created.
    DirectoryCreateFailed {
        /// Subdirectory path that failed creation.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// A source directory listing could not be opened mid-copy.
    ListDirFailed {
        /// Directory whose listing failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// One file could not be copied (or its mode could not be set).
    CopyFailed {
        /// Source file path.
        source: PathBuf,
        /// Destination file path.
        destination: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Invalid include/exclude pattern.
    InvalidPattern(String),
}

impl fmt::Display for CopyTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound(path) => {
                write!(f, "Source is not a directory: {}", path.display())
            }
            Self::SourceDestinationOverlap {
                source,
                destination,
            } => write!(
                f,
                "Source and destination directories overlap: {} <-> {}",
                source.display(),
                destination.display()
            ),
            Self::DestinationCreateFailed { path, message } => {
                write!(
                    f,
                    "Failed to create destination {}: {message}",
                    path.display()
                )
            }
            Self::DirectoryCreateFailed { path, message } => {
                write!(f, "Failed to create directory {}: {message}", path.display())
            }
            Self::ListDirFailed { path, message } => {
                write!(f, "Failed to list directory {}: {message}", path.display())
            }
            Self::CopyFailed {
                source,
                destination,
                message,
            } => write!(
                f,
                "Failed to copy {} to {}: {message}",
                source.display(),
                destination.display()
            ),
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CopyTreeError {}

/// Failures surfaced by `remove_tree`. First failure aborts the walk.
#[derive(Debug)]
pub enum RemoveTreeError {
    /// One entry (or the emptied directory itself) could not be deleted.
    DeleteFailed {
        /// Path that failed deletion.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for RemoveTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteFailed { path, message } => {
                write!(f, "Failed to delete {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for RemoveTreeError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
