//! Status-code classification and exit-code policy.
//!
//! Exit codes follow the monitoring-plugin convention:
//! - `0` = OK
//! - `1` = WARNING
//! - `2` = CRITICAL
//! - `3` = UNKNOWN (the check itself could not be performed)
//!
//! UNKNOWN is reserved for operational failures at the API boundary and
//! never comes out of the job classifier.

/// Exit code: the API could not be queried or answered nonsense.
pub const UNKNOWN_EXIT: i32 = 3;

/// Severity rank of a single job, ordered so `max` picks the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "[OK]",
            Severity::Warning => "[WARNING]",
            Severity::Critical => "[CRITICAL]",
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

/// Termination status of a job, as reported in the `jobstatus` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// `E` - terminated with errors
    Error,
    /// `W` - terminated with warnings
    Warning,
    /// `T` - terminated normally
    Terminated,
    /// Any other code the director may report
    Other(String),
}

impl JobStatus {
    pub fn from_code(raw: &str) -> Self {
        match raw {
            "E" => JobStatus::Error,
            "W" => JobStatus::Warning,
            "T" => JobStatus::Terminated,
            other => JobStatus::Other(other.to_string()),
        }
    }

    /// Classification policy. Codes we do not recognize count as Ok.
    pub fn severity(&self) -> Severity {
        match self {
            JobStatus::Error => Severity::Critical,
            JobStatus::Warning => Severity::Warning,
            JobStatus::Terminated => Severity::Ok,
            JobStatus::Other(_) => Severity::Ok,
        }
    }
}

/// Backup level of a job (`level` field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupLevel {
    Full,
    Incremental,
    Differential,
    /// Unmapped codes pass through as-is
    Other(String),
}

impl BackupLevel {
    pub fn from_code(raw: &str) -> Self {
        match raw {
            "F" => BackupLevel::Full,
            "I" => BackupLevel::Incremental,
            "D" => BackupLevel::Differential,
            other => BackupLevel::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for BackupLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackupLevel::Full => f.write_str("Full"),
            BackupLevel::Incremental => f.write_str("Incremental"),
            // Historical output spelling; downstream alert rules match on
            // the literal string.
            BackupLevel::Differential => f.write_str("Differencial"),
            BackupLevel::Other(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_severities() {
        assert_eq!(JobStatus::from_code("E").severity(), Severity::Critical);
        assert_eq!(JobStatus::from_code("W").severity(), Severity::Warning);
        assert_eq!(JobStatus::from_code("T").severity(), Severity::Ok);
    }

    #[test]
    fn unrecognized_status_counts_as_ok() {
        let status = JobStatus::from_code("R");
        assert_eq!(status, JobStatus::Other("R".to_string()));
        assert_eq!(status.severity(), Severity::Ok);
    }

    #[test]
    fn worst_severity_wins_under_max() {
        assert_eq!(Severity::Ok.max(Severity::Critical), Severity::Critical);
        assert_eq!(Severity::Warning.max(Severity::Ok), Severity::Warning);
    }

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(UNKNOWN_EXIT, 3);
    }

    #[test]
    fn level_codes_render_display_names() {
        assert_eq!(BackupLevel::from_code("F").to_string(), "Full");
        assert_eq!(BackupLevel::from_code("I").to_string(), "Incremental");
        assert_eq!(BackupLevel::from_code("D").to_string(), "Differencial");
    }

    #[test]
    fn unmapped_level_passes_through() {
        assert_eq!(BackupLevel::from_code("VirtualFull").to_string(), "VirtualFull");
    }
}
