use async_trait::async_trait;
use serde_json::Value;

use super::{FieldContext, Rule, RuleOutcome};
use crate::core::error::Result;

/// Normalizes string values by trimming surrounding whitespace.
pub struct Trim;

#[async_trait]
impl Rule for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    async fn apply(&self, value: &mut Value, _field: &FieldContext<'_>) -> Result<RuleOutcome> {
        if let Value::String(s) = value {
            *value = Value::String(s.trim().to_string());
        }
        Ok(RuleOutcome::Pass)
    }
}

/// Rejects missing and empty values.
pub struct Required;

const REQUIRED_MESSAGE: &str = "Value for {field} is required";

#[async_trait]
impl Rule for Required {
    fn name(&self) -> &'static str {
        "required"
    }

    async fn apply(&self, value: &mut Value, field: &FieldContext<'_>) -> Result<RuleOutcome> {
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };

        if missing {
            return Ok(RuleOutcome::fail(field.message(REQUIRED_MESSAGE)));
        }
        Ok(RuleOutcome::Pass)
    }
}
