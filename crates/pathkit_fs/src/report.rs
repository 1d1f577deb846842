//! Copy report model and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one `copy_tree` run.
///
/// Hard failures never land here; they abort the run through
/// [`crate::spec::CopyTreeError`]. The report only accumulates counters and
/// non-fatal warnings.
#[derive(Debug, Default, Clone)]
pub struct ReportCopy {
    /// Total source entries examined.
    pub cnt_scanned: u64,
    /// Files copied to the destination.
    pub cnt_files_copied: u64,
    /// Destination subdirectories created.
    pub cnt_dirs_created: u64,
    /// Entries skipped by pattern filters or dry-run.
    pub cnt_skipped: u64,
    /// Total bytes written through file copies.
    pub n_bytes_copied: u64,
    /// Non-fatal warnings collected during the copy.
    pub warnings: Vec<String>,
}

impl ReportCopy {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_files_copied".to_string(), self.cnt_files_copied);
        dict_counts.insert("cnt_dirs_created".to_string(), self.cnt_dirs_created);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts.insert("n_bytes_copied".to_string(), self.n_bytes_copied);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} scanned={} files={} dirs={} skipped={} bytes={} warnings={}",
            dict_counts["cnt_scanned"],
            dict_counts["cnt_files_copied"],
            dict_counts["cnt_dirs_created"],
            dict_counts["cnt_skipped"],
            dict_counts["n_bytes_copied"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[COPY]"))
    }
}

/// Mutable accumulator for copy statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportCopyBuilder {
    /// See [`ReportCopy::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportCopy::cnt_files_copied`].
    pub cnt_files_copied: u64,
    /// See [`ReportCopy::cnt_dirs_created`].
    pub cnt_dirs_created: u64,
    /// See [`ReportCopy::cnt_skipped`].
    pub cnt_skipped: u64,
    /// See [`ReportCopy::n_bytes_copied`].
    pub n_bytes_copied: u64,
    /// See [`ReportCopy::warnings`].
    pub warnings: Vec<String>,
}

impl ReportCopyBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Record one copied file of `n_bytes` bytes.
    pub fn add_file_copied(&mut self, n_bytes: u64) {
        self.cnt_files_copied += 1;
        self.n_bytes_copied += n_bytes;
    }

    /// Increment created-directory count by one.
    pub fn add_dir_created(&mut self) {
        self.cnt_dirs_created += 1;
    }

    /// Increment skipped count by one.
    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportCopy {
        ReportCopy {
            cnt_scanned: self.cnt_scanned,
            cnt_files_copied: self.cnt_files_copied,
            cnt_dirs_created: self.cnt_dirs_created,
            cnt_skipped: self.cnt_skipped,
            n_bytes_copied: self.n_bytes_copied,
            warnings: self.warnings,
        }
    }
}
