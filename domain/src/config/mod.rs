//! Configuration value objects.
//!
//! - [`miss_policy::MissPolicy`] — which lookups count as failed reads
//! - [`validation`] — structured issues reported while loading configuration

pub mod miss_policy;
pub mod validation;
