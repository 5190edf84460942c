//! Console output for the failed read log.

pub mod glog;
pub mod report;
