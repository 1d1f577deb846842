//! Copy, remove and size operations over directory trees.

use std::fs;
use std::path::Path;

use crate::report::{ReportCopy, ReportCopyBuilder};
use crate::spec::{CopyTreeError, RemoveTreeError, SpecCopyOptions};
use crate::util::{
    SpecCopyPatterns, apply_permission_mode, copy_file_with_metadata, is_overlap, join_child,
    list_entry_names,
};
use crate::walk::walk_tree;

#[derive(Debug)]
struct SpecCopyContext {
    spec_cp_options: SpecCopyOptions,
    spec_cp_pats: SpecCopyPatterns,
    builder_cp_report: ReportCopyBuilder,
}

/// Copy the directory tree at `dir_source` into `dir_destination`.
///
/// The destination root is created (with missing parents) when absent. The
/// copy then proceeds one directory level at a time: subdirectories get a
/// matching destination directory and are descended into, everything else is
/// copied as a file, and `options.mode_permissions` (when set) is forced onto
/// each copied file after the copy.
///
/// Behavior is controlled by [`SpecCopyOptions`]:
/// - include/exclude basename patterns for files and directories,
/// - permission-mode propagation,
/// - metadata preservation (timestamps, Linux xattrs),
/// - dry-run.
///
/// The first failure aborts the run with [`CopyTreeError`]; whatever was
/// already copied stays in place. On success the returned [`ReportCopy`]
/// carries the run's counters.
pub fn copy_tree<P, Q>(
    dir_source: P,
    dir_destination: Q,
    spec_cp_options: SpecCopyOptions,
) -> Result<ReportCopy, CopyTreeError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref().to_path_buf();
    let path_dir_dst = dir_destination.as_ref().to_path_buf();

    if !path_dir_src.is_dir() {
        return Err(CopyTreeError::SourceNotFound(path_dir_src));
    }
    if is_overlap(&path_dir_src, &path_dir_dst) {
        return Err(CopyTreeError::SourceDestinationOverlap {
            source: path_dir_src,
            destination: path_dir_dst,
        });
    }

    let spec_cp_pats = SpecCopyPatterns::from_raw(
        spec_cp_options.patterns_include_files.as_deref(),
        spec_cp_options.patterns_exclude_files.as_deref(),
        spec_cp_options.patterns_include_dirs.as_deref(),
        spec_cp_options.patterns_exclude_dirs.as_deref(),
        spec_cp_options.rule_pattern,
    )?;

    if !path_dir_dst.is_dir() && !spec_cp_options.if_dry_run {
        fs::create_dir_all(&path_dir_dst).map_err(|e| CopyTreeError::DestinationCreateFailed {
            path: path_dir_dst.clone(),
            message: e.to_string(),
        })?;
    }

    let mut spec_cp_ctx = SpecCopyContext {
        spec_cp_options,
        spec_cp_pats,
        builder_cp_report: ReportCopyBuilder::default(),
    };

    _copy_tree_level(&path_dir_src, &path_dir_dst, &mut spec_cp_ctx)?;
    Ok(spec_cp_ctx.builder_cp_report.build())
}

fn _copy_tree_level(
    path_dir_src: &Path,
    path_dir_dst: &Path,
    spec_cp_ctx: &mut SpecCopyContext,
) -> Result<(), CopyTreeError> {
    let l_names = list_entry_names(path_dir_src).map_err(|e| CopyTreeError::ListDirFailed {
        path: path_dir_src.to_path_buf(),
        message: e.to_string(),
    })?;

    for c_name in l_names {
        let path_entry_src = join_child(path_dir_src, &c_name);
        let path_entry_dst = join_child(path_dir_dst, &c_name);
        spec_cp_ctx.builder_cp_report.add_scanned();

        if path_entry_src.is_dir() {
            if spec_cp_ctx.spec_cp_pats.should_exclude_dir(&c_name) {
                spec_cp_ctx.builder_cp_report.add_skipped();
                continue;
            }
            if !path_entry_dst.is_dir() {
                if spec_cp_ctx.spec_cp_options.if_dry_run {
                    spec_cp_ctx.builder_cp_report.add_skipped();
                } else {
                    fs::create_dir(&path_entry_dst).map_err(|e| {
                        CopyTreeError::DirectoryCreateFailed {
                            path: path_entry_dst.clone(),
                            message: e.to_string(),
                        }
                    })?;
                    spec_cp_ctx.builder_cp_report.add_dir_created();
                }
            }
            _copy_tree_level(&path_entry_src, &path_entry_dst, spec_cp_ctx)?;
            continue;
        }

        if spec_cp_ctx.spec_cp_pats.should_exclude_file(&c_name) {
            spec_cp_ctx.builder_cp_report.add_skipped();
            continue;
        }
        if spec_cp_ctx.spec_cp_options.if_dry_run {
            spec_cp_ctx.builder_cp_report.add_skipped();
            continue;
        }

        let n_bytes = copy_file_with_metadata(
            &path_entry_src,
            &path_entry_dst,
            spec_cp_ctx.spec_cp_options.if_preserve_metadata,
        )
        .map_err(|e| CopyTreeError::CopyFailed {
            source: path_entry_src.clone(),
            destination: path_entry_dst.clone(),
            message: e.to_string(),
        })?;

        if let Some(n_mode) = spec_cp_ctx.spec_cp_options.mode_permissions {
            apply_permission_mode(&path_entry_dst, n_mode).map_err(|e| {
                CopyTreeError::CopyFailed {
                    source: path_entry_src.clone(),
                    destination: path_entry_dst.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        spec_cp_ctx.builder_cp_report.add_file_copied(n_bytes);
    }

    Ok(())
}

/// Remove the directory tree at `dir_root`.
///
/// Returns `Ok(false)` without touching anything when `dir_root` is not a
/// directory. Children are removed before the directory itself (post-order;
/// the filesystem refuses to drop a non-empty directory), recursing through
/// one non-recursive [`walk_tree`] level at a time. `Ok(true)` once the root
/// itself is gone.
pub fn remove_tree<P: AsRef<Path>>(dir_root: P) -> Result<bool, RemoveTreeError> {
    let path_root = dir_root.as_ref();
    if !path_root.is_dir() {
        return Ok(false);
    }

    for path_entry in walk_tree(path_root, false) {
        if path_entry.is_dir() {
            remove_tree(&path_entry)?;
        } else {
            fs::remove_file(&path_entry).map_err(|e| RemoveTreeError::DeleteFailed {
                path: path_entry.clone(),
                message: e.to_string(),
            })?;
        }
    }

    fs::remove_dir(path_root).map_err(|e| RemoveTreeError::DeleteFailed {
        path: path_root.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(true)
}

/// Total byte size of every plain file below `dir_root`.
///
/// Directories contribute 0 directly; their contents are counted through
/// their own entries. A missing or non-directory root measures 0. Entries
/// whose metadata cannot be read are counted as 0 and logged.
pub fn tree_size<P: AsRef<Path>>(dir_root: P) -> u64 {
    let mut n_sum = 0;
    for path_entry in walk_tree(dir_root.as_ref(), true) {
        if !path_entry.is_file() {
            continue;
        }
        match fs::metadata(&path_entry) {
            Ok(stat_entry) => n_sum += stat_entry.len(),
            Err(e) => log::warn!("Failed to stat {} ({e})", path_entry.display()),
        }
    }
    n_sum
}
