//! `pathkit_fs` v1:
//! Directory-tree traversal and operation kernel.
//!
//! - `walk`   : lazy depth-first tree traversal
//! - `ops`    : copy/remove/size orchestration
//! - `spec`   : enums/options/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod ops;
pub mod report;
pub mod spec;
pub mod walk;
mod util;

pub use ops::{copy_tree, remove_tree, tree_size};
pub use report::{ReportCopy, ReportCopyBuilder};
pub use spec::{CopyTreeError, EnumPatternMode, RemoveTreeError, SpecCopyOptions};
pub use walk::{IterWalkTree, walk_tree};
