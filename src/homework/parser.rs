use serde_json::Value;

use super::error::ResponseError;
use super::verdict::Verdict;

/// Key holding the list of homework entries
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Server-reported time of the response, in Unix seconds
const CURRENT_DATE_KEY: &str = "current_date";

/// One homework entry as reported by the API.
///
/// Fields stay optional here: a missing name or status is a semantic error
/// raised by [`describe`], not a shape error of the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkItem {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: field("homework_name"),
            status: field("status"),
        }
    }
}

/// Pull the homework list out of a raw payload.
///
/// Order is preserved as sent by the server, newest first.
///
/// # Errors
/// - [`ResponseError::Shape`] when the payload is not an object or
///   `homeworks` is not an array
/// - [`ResponseError::EmptyResult`] when `homeworks` is absent
pub fn extract_items(payload: &Value) -> Result<Vec<WorkItem>, ResponseError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ResponseError::shape(format!("response is not a mapping: {payload}")))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(ResponseError::EmptyResult)?;

    let items = homeworks.as_array().ok_or_else(|| {
        ResponseError::shape(format!("`{HOMEWORKS_KEY}` is not a list: {homeworks}"))
    })?;

    tracing::debug!(count = items.len(), "Extracted homeworks from response");

    Ok(items.iter().map(WorkItem::from_value).collect())
}

/// Render the status-change sentence for a homework.
///
/// # Errors
/// - [`ResponseError::MissingName`] when the name is absent or blank
/// - [`ResponseError::UnknownVerdict`] when the status is absent or unknown
pub fn describe(item: &WorkItem) -> Result<String, ResponseError> {
    let name = item
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or(ResponseError::MissingName)?;

    let verdict = item
        .status
        .as_deref()
        .and_then(|status| status.parse::<Verdict>().ok())
        .ok_or_else(|| ResponseError::UnknownVerdict {
            name: name.to_owned(),
            status: item.status.clone(),
        })?;

    tracing::debug!(homework = name, %verdict, "Parsed homework status");

    Ok(format!(
        "Review status changed for homework \"{name}\". {}",
        verdict.text()
    ))
}

/// The `current_date` field, when present as an integer
pub fn server_time(payload: &Value) -> Option<i64> {
    payload.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}
