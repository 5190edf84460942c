//! Lookup value objects.
//!
//! - [`call_site::CallSite`] — source location of a lookup
//! - [`failed_read::FailedRead`] — one failed read, as written to the log
//! - [`value::FieldValue`] — values a wrapper can hand back

pub mod call_site;
pub mod failed_read;
pub mod value;
