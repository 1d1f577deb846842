use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use pathkit_path::join_path;

use crate::spec::{CopyTreeError, EnumPatternMode};

////////////////////////////////////////////////////////////////////////////////
// #region ListingCollaborator

/// List entry names of `path_dir` in collaborator order, `.`/`..` excluded.
pub(crate) fn list_entry_names(path_dir: &Path) -> io::Result<Vec<String>> {
    let mut l_names = Vec::new();
    for entry_res in fs::read_dir(path_dir)? {
        let entry = entry_res?;
        l_names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(l_names)
}

/// Child path of `path_dir`/`name`, normalized through `join_path`.
pub(crate) fn join_child(path_dir: &Path, name: &str) -> PathBuf {
    let c_dir = path_dir.to_string_lossy();
    match join_path(&[c_dir.as_ref(), name]) {
        Some(c_child) => PathBuf::from(c_child),
        // Unreachable with two parts; fall back to the raw join.
        None => path_dir.join(name),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypePatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

impl TypePatternSeq {
    fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Literal(l_patterns) => l_patterns.iter().any(|p| value.contains(p)),
            Self::Glob(l_patterns) => l_patterns.iter().any(|p| p.is_match(value)),
            Self::Regex(l_patterns) => l_patterns.iter().any(|p| p.is_match(value)),
        }
    }
}

/// Compiled include/exclude pattern sets for one copy run.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpecCopyPatterns {
    patterns_include_files: Option<TypePatternSeq>,
    patterns_exclude_files: Option<TypePatternSeq>,
    patterns_include_dirs: Option<TypePatternSeq>,
    patterns_exclude_dirs: Option<TypePatternSeq>,
}

impl SpecCopyPatterns {
    pub(crate) fn from_raw(
        patterns_include_files: Option<&[String]>,
        patterns_exclude_files: Option<&[String]>,
        patterns_include_dirs: Option<&[String]>,
        patterns_exclude_dirs: Option<&[String]>,
        rule_pattern: EnumPatternMode,
    ) -> Result<Self, CopyTreeError> {
        Ok(Self {
            patterns_include_files: _compile(patterns_include_files, rule_pattern)?,
            patterns_exclude_files: _compile(patterns_exclude_files, rule_pattern)?,
            patterns_include_dirs: _compile(patterns_include_dirs, rule_pattern)?,
            patterns_exclude_dirs: _compile(patterns_exclude_dirs, rule_pattern)?,
        })
    }

    /// True when a file basename fails the include list or hits the exclude list.
    pub(crate) fn should_exclude_file(&self, name: &str) -> bool {
        _should_exclude(
            name,
            self.patterns_include_files.as_ref(),
            self.patterns_exclude_files.as_ref(),
        )
    }

    /// True when a directory basename fails the include list or hits the exclude list.
    pub(crate) fn should_exclude_dir(&self, name: &str) -> bool {
        _should_exclude(
            name,
            self.patterns_include_dirs.as_ref(),
            self.patterns_exclude_dirs.as_ref(),
        )
    }
}

fn _should_exclude(
    value: &str,
    patterns_include: Option<&TypePatternSeq>,
    patterns_exclude: Option<&TypePatternSeq>,
) -> bool {
    !patterns_include.map_or(true, |p| p.is_match(value))
        || patterns_exclude.is_some_and(|p| p.is_match(value))
}

fn _compile(
    patterns: Option<&[String]>,
    rule_pattern: EnumPatternMode,
) -> Result<Option<TypePatternSeq>, CopyTreeError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    match rule_pattern {
        EnumPatternMode::Literal => Ok(Some(TypePatternSeq::Literal(patterns.to_vec()))),
        EnumPatternMode::Glob => {
            let mut l_glob = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let matcher = Glob::new(pattern)
                    .map_err(|e| {
                        CopyTreeError::InvalidPattern(format!(
                            "Invalid pattern in include/exclude: {e}"
                        ))
                    })?
                    .compile_matcher();
                l_glob.push(matcher);
            }
            Ok(Some(TypePatternSeq::Glob(l_glob)))
        }
        EnumPatternMode::Regex => {
            let mut l_regex = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let regex = Regex::new(pattern).map_err(|e| {
                    CopyTreeError::InvalidPattern(format!("Invalid pattern in include/exclude: {e}"))
                })?;
                l_regex.push(regex);
            }
            Ok(Some(TypePatternSeq::Regex(l_regex)))
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathSafety

fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// True when one of the two roots contains the other.
pub(crate) fn is_overlap(src: &Path, dst: &Path) -> bool {
    let src_resolved = _normalize_path(src);
    let dst_resolved = _normalize_path(dst);
    dst_resolved.starts_with(&src_resolved) || src_resolved.starts_with(&dst_resolved)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

/// Copy one file, returning the byte count written.
///
/// With `if_preserve_metadata`, permission bits, timestamps and (on Linux)
/// xattrs of the source are applied to the destination after the copy.
pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
    if_preserve_metadata: bool,
) -> Result<u64, io::Error> {
    let n_bytes = fs::copy(path_file_src, path_file_dst)?;
    if if_preserve_metadata {
        apply_metadata(path_file_src, path_file_dst)?;
    }
    Ok(n_bytes)
}

fn apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    #[cfg(target_os = "linux")]
    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

/// Force `n_mode` permission bits onto `path`.
///
/// No-op on platforms without Unix permission bits.
pub(crate) fn apply_permission_mode(path: &Path, n_mode: u32) -> Result<(), io::Error> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(n_mode))
    }
    #[cfg(not(unix))]
    {
        let _ = (path, n_mode);
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
