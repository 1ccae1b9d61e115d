//! Job severity aggregation.
//!
//! Folds the raw job list into the plugin report: jobs are ordered newest
//! first, only the newest job of each client is kept, kept severities are
//! tallied, and the worst tallied severity becomes the exit code.

use std::collections::HashSet;

use crate::api::models::JobRecord;

use super::severity::{BackupLevel, JobStatus, Severity};
use super::units::format_bytes;

/// One job, normalized for display.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub job_id: u64,
    pub client: String,
    pub level: BackupLevel,
    pub status: JobStatus,
    pub severity: Severity,
    pub duration: String,
    pub files: u64,
    pub size: String,
}

impl JobSummary {
    fn from_record(record: &JobRecord) -> Self {
        let status = JobStatus::from_code(&record.jobstatus);
        let severity = status.severity();
        Self {
            job_id: record.jobid,
            client: record.client.clone(),
            level: BackupLevel::from_code(&record.level),
            status,
            severity,
            duration: record.duration.clone(),
            files: record.jobfiles,
            size: format_bytes(record.jobbytes),
        }
    }

    fn render_line(&self) -> String {
        format!(
            "{} JobID: {}, {} ({}), ExecutionTime: {}, (Usage: {}, Files: {})",
            self.severity.label(),
            self.job_id,
            self.client,
            self.level,
            self.duration,
            self.size,
            self.files,
        )
    }
}

/// Aggregated report over the newest job of every client.
#[derive(Debug)]
pub struct JobReport {
    pub jobs: Vec<JobSummary>,
    pub critical: usize,
    pub warning: usize,
    pub ok: usize,
    /// Worst severity among the tallied jobs; Ok when nothing was tallied.
    pub severity: Severity,
}

impl JobReport {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.ok
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }

    /// Summary line, worst state first.
    pub fn header(&self) -> String {
        if self.critical > 0 {
            format!("[CRITICAL] {} of {} Jobs failed:", self.critical, self.total())
        } else if self.warning > 0 {
            format!(
                "[WARNING] {} of {} Jobs are in warning state:",
                self.warning,
                self.total()
            )
        } else {
            format!("[OK] {} of {} Jobs ok:", self.ok, self.total())
        }
    }

    /// Full report text: header plus one line per reported job.
    pub fn render(&self) -> String {
        let mut out = self.header();
        for job in &self.jobs {
            out.push('\n');
            out.push_str(&job.render_line());
        }
        out
    }
}

/// Aggregate raw job records into a [`JobReport`].
///
/// Jobs are sorted by job id descending (stable, so equal ids keep their
/// payload order). The first job seen for a client is reported and
/// tallied; later jobs of that client are dropped outright - no line, no
/// tally.
pub fn aggregate(jobs: &[JobRecord]) -> JobReport {
    let mut summaries: Vec<JobSummary> = jobs.iter().map(JobSummary::from_record).collect();
    summaries.sort_by(|a, b| b.job_id.cmp(&a.job_id));

    let mut seen: HashSet<String> = HashSet::new();
    let mut included = Vec::new();
    let (mut critical, mut warning, mut ok) = (0, 0, 0);
    let mut worst = Severity::Ok;

    for job in summaries {
        if !seen.insert(job.client.clone()) {
            continue;
        }
        match job.severity {
            Severity::Critical => critical += 1,
            Severity::Warning => warning += 1,
            Severity::Ok => ok += 1,
        }
        worst = worst.max(job.severity);
        included.push(job);
    }

    JobReport {
        jobs: included,
        critical,
        warning,
        ok,
        severity: worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(jobid: u64, client: &str, jobstatus: &str) -> JobRecord {
        JobRecord {
            jobid,
            client: client.to_string(),
            level: "F".to_string(),
            jobstatus: jobstatus.to_string(),
            duration: "00:01:40".to_string(),
            jobfiles: 12,
            jobbytes: 1536,
        }
    }

    #[test]
    fn header_prefers_critical_over_warning() {
        let report = aggregate(&[
            record(3, "alpha-fd", "E"),
            record(2, "beta-fd", "W"),
            record(1, "gamma-fd", "T"),
        ]);
        assert_eq!(report.header(), "[CRITICAL] 1 of 3 Jobs failed:");
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn header_reports_warnings_when_no_critical() {
        let report = aggregate(&[record(2, "beta-fd", "W"), record(1, "gamma-fd", "T")]);
        assert_eq!(report.header(), "[WARNING] 1 of 2 Jobs are in warning state:");
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn line_format_is_stable() {
        let report = aggregate(&[record(7, "web01-fd", "T")]);
        assert_eq!(
            report.render(),
            "[OK] 1 of 1 Jobs ok:\n\
             [OK] JobID: 7, web01-fd (Full), ExecutionTime: 00:01:40, (Usage: 1.5KB, Files: 12)"
        );
    }
}
