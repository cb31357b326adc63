use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{FieldContext, Rule, RuleOutcome};
use crate::core::error::Result;

/// Which table/column an [`Exists`] rule checks against.
#[derive(Debug, Clone, Copy)]
pub struct ExistsOptions {
    pub table: &'static str,
    pub column: &'static str,
}

/// Answers single-value existence queries for the `exists` rule.
#[async_trait]
pub trait ExistenceChecker: Send + Sync + 'static {
    async fn exists(&self, table: &str, column: &str, value: &str) -> sqlx::Result<bool>;
}

/// Passes when the value occurs in `{table}.{column}`.
///
/// Values that are not strings or numbers are skipped; type rules earlier in
/// the chain are expected to have rejected those already.
pub struct Exists {
    options: ExistsOptions,
    checker: Arc<dyn ExistenceChecker>,
}

impl Exists {
    pub fn new(options: ExistsOptions, checker: Arc<dyn ExistenceChecker>) -> Self {
        Self { options, checker }
    }
}

const EXISTS_MESSAGE: &str = "Value for {field} does not exist";

#[async_trait]
impl Rule for Exists {
    fn name(&self) -> &'static str {
        "exists"
    }

    async fn apply(&self, value: &mut Value, field: &FieldContext<'_>) -> Result<RuleOutcome> {
        let needle = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Ok(RuleOutcome::Pass),
        };

        let found = self
            .checker
            .exists(self.options.table, self.options.column, &needle)
            .await?;

        if found {
            Ok(RuleOutcome::Pass)
        } else {
            Ok(RuleOutcome::fail(field.message(EXISTS_MESSAGE)))
        }
    }
}

/// [`ExistenceChecker`] backed by the application's Postgres pool.
pub struct PgExistenceChecker {
    pool: PgPool,
}

impl PgExistenceChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExistenceChecker for PgExistenceChecker {
    async fn exists(&self, table: &str, column: &str, value: &str) -> sqlx::Result<bool> {
        // Identifiers come from rule options in code, never from request input.
        let query = format!("SELECT {column} FROM {table} WHERE {column} = $1 LIMIT 1");
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryExistenceChecker;

    fn rule(known: &[&str]) -> Exists {
        Exists::new(
            ExistsOptions {
                table: "regions",
                column: "ulid",
            },
            Arc::new(InMemoryExistenceChecker::with_values(
                "regions",
                "ulid",
                known.iter().map(|s| s.to_string()),
            )),
        )
    }

    #[tokio::test]
    async fn non_string_non_number_values_are_skipped() {
        let field = FieldContext { name: "regionId" };
        let rule = rule(&[]);

        for mut value in [Value::Null, Value::Bool(true), Value::Array(vec![])] {
            assert!(matches!(
                rule.apply(&mut value, &field).await.unwrap(),
                RuleOutcome::Pass
            ));
        }
    }

    #[tokio::test]
    async fn numbers_are_checked_by_their_decimal_form() {
        let field = FieldContext { name: "regionId" };
        let rule = rule(&["42"]);

        let mut value = Value::from(42);
        assert!(matches!(
            rule.apply(&mut value, &field).await.unwrap(),
            RuleOutcome::Pass
        ));

        let mut absent = Value::from(7);
        assert!(matches!(
            rule.apply(&mut absent, &field).await.unwrap(),
            RuleOutcome::Fail { .. }
        ));
    }

    #[tokio::test]
    async fn missing_rows_fail_with_the_template_message() {
        let field = FieldContext { name: "regionId" };
        let rule = rule(&["known"]);

        let mut value = Value::String("unknown".to_string());
        match rule.apply(&mut value, &field).await.unwrap() {
            RuleOutcome::Fail { message } => {
                assert_eq!(message, "Value for regionId does not exist");
            }
            RuleOutcome::Pass => panic!("unknown value must fail"),
        }
    }
}
