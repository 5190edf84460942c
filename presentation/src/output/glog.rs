//! `glog` — show the failed read log to an operator.

use crate::output::report::FailedReadReport;
use dictwrap_application::{FailureLog, FailureLogError};
use tracing::error;

/// Options for [`glog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlogOptions {
    /// Print the usage reminder after the entries
    pub pause: bool,
    /// Colorize the banner
    pub color: bool,
}

impl Default for GlogOptions {
    fn default() -> Self {
        Self {
            pause: true,
            color: true,
        }
    }
}

impl GlogOptions {
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Build the report for `log`, or `None` if the log is missing or empty.
pub fn glog_report(
    log: &impl FailureLog,
    options: GlogOptions,
) -> Result<Option<String>, FailureLogError> {
    let Some(lines) = log.read_lines()? else {
        return Ok(None);
    };
    if lines.is_empty() {
        return Ok(None);
    }

    error!("ERROR: {}) Failed Reads DictWrapper", lines.len());
    Ok(FailedReadReport::new(options.color).render(&lines, options.pause))
}

/// Print the failed read log to stdout.
///
/// Prints nothing when the log does not exist or holds no entries.
pub fn glog(log: &impl FailureLog, options: GlogOptions) -> Result<(), FailureLogError> {
    if let Some(report) = glog_report(log, options)? {
        print!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use dictwrap_application::MemoryFailureLog;
    use dictwrap_domain::{CallSite, FailedRead, ReadStamp};

    fn plain() -> GlogOptions {
        GlogOptions::default().with_color(false)
    }

    #[test]
    fn test_missing_log_reports_nothing() {
        let log = MemoryFailureLog::default();
        assert!(glog_report(&log, plain()).unwrap().is_none());
        glog(&log, plain()).unwrap();
    }

    #[test]
    fn test_empty_log_reports_nothing() {
        let log = MemoryFailureLog::default();
        log.reset().unwrap();
        assert!(glog_report(&log, plain()).unwrap().is_none());
    }

    #[test]
    fn test_report_lists_entries_verbatim() {
        let log = MemoryFailureLog::default();
        log.reset().unwrap();
        let entry = FailedRead::new(
            "missing",
            CallSite::new("main.rs", 8),
            ReadStamp::new(Weekday::Thu, 17, 45).unwrap(),
        );
        log.append(&entry).unwrap();

        let report = glog_report(&log, plain().with_pause(false))
            .unwrap()
            .unwrap();
        assert!(report.contains("(1) Failed Reads DictWrapper"));
        assert!(report.contains("-->> missing <<-  LINE:8 main.rs Thu 17:45"));
    }

    #[test]
    fn test_default_options_pause() {
        assert!(GlogOptions::default().pause);
        assert!(!GlogOptions::default().with_pause(false).pause);
    }
}
