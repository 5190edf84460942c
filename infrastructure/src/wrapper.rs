//! File-backed dictionary wrapper construction.

use crate::logging::TextFailureLog;
use dictwrap_application::{DictWrapper, FailureLogError, WrapperConfig};
use dictwrap_domain::FieldValue;
use std::collections::HashMap;

/// Wrap `mapping` with a [`TextFailureLog`] built from `config`.
///
/// The log file is cleared before this returns.
pub fn open_wrapper<V: FieldValue>(
    mapping: HashMap<String, V>,
    config: &WrapperConfig,
) -> Result<DictWrapper<V, TextFailureLog>, FailureLogError> {
    let log = TextFailureLog::from_config(config);
    Ok(DictWrapper::new(mapping, log)?.with_policy(config.policy))
}
