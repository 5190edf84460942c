//! Use cases (application services)
//!
//! - [`dict_wrapper::DictWrapper`] — named-field lookups with failed read logging

pub mod dict_wrapper;
