//! Tree configuration module.
//!
//! Validation for the `[tree]` section, which deserializes straight into
//! [`TernarySearchTreeConfig`].

use super::ConfigResult;
use super::Validate;
use crate::data_structures::TernarySearchTreeConfig;
use crate::error::config::ConfigError;

impl Validate for TernarySearchTreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "tree.max_word_length".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
