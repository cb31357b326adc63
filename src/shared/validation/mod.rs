//! Declarative request validation.
//!
//! Rules are plain strategy objects implementing [`Rule`], registered in a
//! [`RuleRegistry`] keyed by rule name. A [`Schema`] binds input fields to a
//! chain of rules; validating runs every field's chain in order and collects
//! structured field-level errors.

mod exists;
mod rules;

pub use exists::{ExistenceChecker, Exists, ExistsOptions, PgExistenceChecker};
pub use rules::{Required, Trim};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationError {
    pub message: String,
    pub rule: String,
    pub field: String,
}

/// All failures collected by one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// The field a rule is currently inspecting.
pub struct FieldContext<'a> {
    pub name: &'a str,
}

impl FieldContext<'_> {
    /// Substitute `{field}` in a rule's message template.
    pub fn message(&self, template: &str) -> String {
        template.replace("{field}", self.name)
    }
}

/// Outcome of applying one rule to one field value.
#[derive(Debug)]
pub enum RuleOutcome {
    Pass,
    Fail { message: String },
}

impl RuleOutcome {
    pub fn fail(message: String) -> Self {
        RuleOutcome::Fail { message }
    }
}

/// A named predicate over a field's JSON value.
///
/// Rules may normalize the value in place (e.g. `trim`). Infrastructure
/// failures (a lost database connection during an existence check) are
/// returned as errors and abort validation; rule failures are outcomes.
#[async_trait]
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    async fn apply(&self, value: &mut Value, field: &FieldContext<'_>) -> Result<RuleOutcome>;
}

/// Rules available to schema builders, keyed by rule name.
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<&'static str, Arc<dyn Rule>>,
}

impl RuleRegistry {
    pub fn register(&mut self, rule: Arc<dyn Rule>) -> &mut Self {
        self.rules.insert(rule.name(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(name).cloned()
    }
}

struct FieldSchema {
    name: String,
    rules: Vec<Arc<dyn Rule>>,
}

/// A compiled validation schema for one request's input fields.
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Validate `input` in place (rules may normalize values).
    ///
    /// Every field runs even when an earlier field already failed; within a
    /// field the chain stops at the first failing rule.
    pub async fn validate(&self, input: &mut Map<String, Value>) -> Result<()> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let mut value = input.remove(&field.name).unwrap_or(Value::Null);
            let ctx = FieldContext { name: &field.name };

            for rule in &field.rules {
                match rule.apply(&mut value, &ctx).await? {
                    RuleOutcome::Pass => {}
                    RuleOutcome::Fail { message } => {
                        errors.push(ValidationError {
                            message,
                            rule: rule.name().to_string(),
                            field: field.name.clone(),
                        });
                        break;
                    }
                }
            }

            input.insert(field.name.clone(), value);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(ValidationErrors(errors)))
        }
    }
}

pub struct SchemaBuilder {
    fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
    /// Bind `name` to `rule_names`, looked up in `registry`.
    ///
    /// Panics on an unknown rule name; schemas are assembled once at startup.
    pub fn field(mut self, name: &str, registry: &RuleRegistry, rule_names: &[&str]) -> Self {
        let rules = rule_names
            .iter()
            .map(|rule_name| {
                registry
                    .get(rule_name)
                    .unwrap_or_else(|| panic!("unknown validation rule '{rule_name}'"))
            })
            .collect();

        self.fields.push(FieldSchema {
            name: name.to_string(),
            rules,
        });
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryExistenceChecker;

    fn region_id_schema(known_ulids: &[&str]) -> Schema {
        let checker = Arc::new(InMemoryExistenceChecker::with_values(
            "regions",
            "ulid",
            known_ulids.iter().map(|s| s.to_string()),
        ));

        let mut registry = RuleRegistry::default();
        registry.register(Arc::new(Trim));
        registry.register(Arc::new(Required));
        registry.register(Arc::new(Exists::new(
            ExistsOptions {
                table: "regions",
                column: "ulid",
            },
            checker,
        )));

        Schema::builder()
            .field("regionId", &registry, &["trim", "required", "exists"])
            .build()
    }

    fn params(value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("regionId".to_string(), value);
        map
    }

    #[tokio::test]
    async fn known_value_passes() {
        let schema = region_id_schema(&["01HTEST"]);
        let mut input = params(Value::String("01HTEST".to_string()));
        assert!(schema.validate(&mut input).await.is_ok());
    }

    #[tokio::test]
    async fn values_are_trimmed_before_the_existence_check() {
        let schema = region_id_schema(&["01HTEST"]);
        let mut input = params(Value::String("  01HTEST  ".to_string()));

        schema.validate(&mut input).await.unwrap();
        assert_eq!(input["regionId"], Value::String("01HTEST".to_string()));
    }

    #[tokio::test]
    async fn unknown_value_fails_with_the_fixed_message() {
        let schema = region_id_schema(&["01HTEST"]);
        let mut input = params(Value::String("nope".to_string()));

        let err = schema.validate(&mut input).await.unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.0.len(), 1);
                assert_eq!(errors.0[0].field, "regionId");
                assert_eq!(errors.0[0].rule, "exists");
                assert_eq!(errors.0[0].message, "Value for regionId does not exist");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_value_bails_on_required_before_exists() {
        let schema = region_id_schema(&["01HTEST"]);
        let mut input = Map::new();

        let err = schema.validate(&mut input).await.unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.0.len(), 1);
                assert_eq!(errors.0[0].rule, "required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_field_is_validated_even_after_a_failure() {
        let checker = Arc::new(InMemoryExistenceChecker::with_values(
            "regions",
            "ulid",
            ["01HTEST".to_string()],
        ));

        let mut registry = RuleRegistry::default();
        registry.register(Arc::new(Required));
        registry.register(Arc::new(Exists::new(
            ExistsOptions {
                table: "regions",
                column: "ulid",
            },
            checker,
        )));

        let schema = Schema::builder()
            .field("regionId", &registry, &["required", "exists"])
            .field("other", &registry, &["required"])
            .build();

        let mut input = params(Value::String("nope".to_string()));
        let err = schema.validate(&mut input).await.unwrap_err();
        match err {
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.0.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["regionId", "other"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "unknown validation rule")]
    fn unknown_rule_names_are_rejected_at_build_time() {
        let registry = RuleRegistry::default();
        let _ = Schema::builder().field("regionId", &registry, &["nonsense"]);
    }
}
