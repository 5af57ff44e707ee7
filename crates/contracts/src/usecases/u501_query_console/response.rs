use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::usecases::common::UseCaseError;

/// One result row: column name -> scalar value, in the order the service sent it
pub type Row = serde_json::Map<String, Value>;

/// Successful body of `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Generated SQL
    pub sql: String,

    /// Result rows; absent for data-modifying statements
    #[serde(default)]
    pub data: Vec<Row>,

    /// Summary for data-modifying statements, e.g. "3 rows affected."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryResult {
    /// Header columns, taken from the first row only.
    ///
    /// Later rows with extra keys do not add columns.
    pub fn columns(&self) -> Vec<String> {
        self.data
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Display cells of `row`, aligned to `columns`. Missing keys render empty.
    pub fn cells(row: &Row, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|column| row.get(column).map(display_value).unwrap_or_default())
            .collect()
    }
}

/// Text shown in a table cell
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// What the service answered, once the body parsed
#[derive(Debug, Clone, PartialEq)]
pub enum QueryReply {
    /// The body carried an `error` indicator
    Failed(String),
    Succeeded(QueryResult),
}

/// Error indicator of a reply body, following JSON truthiness.
///
/// `null`, `false`, `0` and `""` do not count as an error.
fn error_indicator(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parses a reply body.
///
/// An `error` indicator wins over any `sql`/`data` in the same body.
/// A body that is not JSON, or a success body without `sql`, is a transport error.
pub fn interpret_reply(body: &str) -> Result<QueryReply, UseCaseError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| UseCaseError::transport(format!("malformed body: {}", e)))?;

    if let Some(message) = error_indicator(&value) {
        return Ok(QueryReply::Failed(message));
    }

    let result: QueryResult = serde_json::from_value(value)
        .map_err(|e| UseCaseError::transport(format!("unexpected body: {}", e)))?;
    Ok(QueryReply::Succeeded(result))
}
