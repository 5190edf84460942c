//! Failed read entry and its log line format.
//!
//! Every entry occupies exactly one line:
//!
//! ```text
//! -->> {key} <<-  LINE:{line} {file} {weekday} {HH:MM}
//! ```
//!
//! Backslashes, `\n` and `\r` in the key are escaped so an entry never
//! spans more than one line.

use super::call_site::CallSite;
use crate::core::error::DomainError;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use std::fmt;

const KEY_PREFIX: &str = "-->> ";
const KEY_SUFFIX: &str = " <<-  LINE:";

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn unescape_key(escaped: &str) -> Option<String> {
    let mut key = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            key.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => key.push('\\'),
            'n' => key.push('\n'),
            'r' => key.push('\r'),
            _ => return None,
        }
    }
    Some(key)
}

/// Weekday and minute of a failed read (`Tue 09:15`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadStamp {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl ReadStamp {
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self {
            weekday,
            hour,
            minute,
        })
    }

    /// Truncate a full timestamp to weekday and minute.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            weekday: at.weekday(),
            hour: at.hour(),
            minute: at.minute(),
        }
    }

    pub fn now() -> Self {
        Self::from_datetime(&chrono::Local::now())
    }

    fn parse(weekday: &str, time: &str) -> Option<Self> {
        let weekday = weekday.parse::<Weekday>().ok()?;
        let (hour, minute) = time.split_once(':')?;
        if hour.len() != 2 || minute.len() != 2 {
            return None;
        }
        Self::new(weekday, hour.parse().ok()?, minute.parse().ok()?)
    }
}

impl fmt::Display for ReadStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.weekday, self.hour, self.minute)
    }
}

/// One failed read: which key, asked for from where, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRead {
    pub key: String,
    pub call_site: CallSite,
    pub stamp: ReadStamp,
}

impl FailedRead {
    pub fn new(key: impl Into<String>, call_site: CallSite, stamp: ReadStamp) -> Self {
        Self {
            key: key.into(),
            call_site,
            stamp,
        }
    }

    /// Render the entry as a log line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{KEY_PREFIX}{}{KEY_SUFFIX}{} {} {}",
            escape_key(&self.key),
            self.call_site.line,
            self.call_site.file,
            self.stamp
        )
    }

    /// Read a log line back into an entry.
    ///
    /// Keys may contain spaces; the last `<<-  LINE:` marker ends the key.
    /// The file name is everything between the line number and the stamp.
    pub fn parse_line(line: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedLogLine(line.to_string());
        let line = line.trim_end_matches(['\r', '\n']);

        let rest = line.strip_prefix(KEY_PREFIX).ok_or_else(malformed)?;
        let split = rest.rfind(KEY_SUFFIX).ok_or_else(malformed)?;
        let key = unescape_key(&rest[..split]).ok_or_else(malformed)?;
        let rest = &rest[split + KEY_SUFFIX.len()..];

        let mut tail = rest.rsplitn(3, ' ');
        let time = tail.next().ok_or_else(malformed)?;
        let weekday = tail.next().ok_or_else(malformed)?;
        let head = tail.next().ok_or_else(malformed)?;
        let stamp = ReadStamp::parse(weekday, time).ok_or_else(malformed)?;

        let (line_number, file) = head.split_once(' ').ok_or_else(malformed)?;
        let line_number = line_number.parse::<u32>().map_err(|_| malformed())?;
        if file.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            key,
            call_site: CallSite {
                file: file.to_string(),
                line: line_number,
            },
            stamp,
        })
    }
}

impl fmt::Display for FailedRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
