//! Raw records as delivered by the data-access collaborator
//!
//! Upstream expense and income collections are not trusted: amounts may carry
//! either sign or arrive as strings, fields may be missing, dates may be
//! malformed. `RawRecord::from_json` extracts what it can from each record and
//! leaves the rest as `None` so one bad record never aborts a load.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::money::Money;

/// An unvalidated expense or income record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub occurred_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

impl RawRecord {
    /// Start a record with an amount (builder style, used by callers and tests)
    pub fn with_amount(amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn occurred_on(mut self, date: NaiveDate) -> Self {
        self.occurred_on = Some(date);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Extract a record from an arbitrary JSON value.
    ///
    /// Accepts both `snake_case` and `camelCase` field names, amounts as
    /// numbers (in currency units) or strings, dates as `YYYY-MM-DD` or
    /// RFC 3339 timestamps. Anything unusable is dropped to `None`.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let field = |names: &[&str]| {
            names
                .iter()
                .find_map(|n| object.get(*n))
                .filter(|v| !v.is_null())
        };

        Self {
            id: field(&["id", "_id"]).and_then(json_to_text),
            amount: field(&["amount"]).and_then(json_to_money),
            category: field(&["category"]).and_then(json_to_text),
            description: field(&["description", "desc"]).and_then(json_to_text),
            occurred_on: field(&["occurred_on", "occurredOn", "date"]).and_then(json_to_date),
            created_at: field(&["created_at", "createdAt"]).and_then(json_to_timestamp),
        }
    }

    /// Render the record the way upstream collections store it: amounts in
    /// currency units, missing fields omitted.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(id) = &self.id {
            object.insert("id".into(), Value::String(id.clone()));
        }
        if let Some(amount) = self.amount {
            object.insert("amount".into(), serde_json::json!(amount.to_decimal()));
        }
        if let Some(category) = &self.category {
            object.insert("category".into(), Value::String(category.clone()));
        }
        if let Some(description) = &self.description {
            object.insert("description".into(), Value::String(description.clone()));
        }
        if let Some(date) = self.occurred_on {
            object.insert(
                "occurred_on".into(),
                Value::String(date.format("%Y-%m-%d").to_string()),
            );
        }
        if let Some(at) = self.created_at {
            object.insert(
                "created_at".into(),
                Value::String(at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }
        Value::Object(object)
    }
}

fn json_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_to_money(value: &Value) -> Option<Money> {
    match value {
        Value::Number(n) => n.as_f64().and_then(Money::try_from_decimal),
        Value::String(s) => Money::parse(s).ok(),
        _ => None,
    }
}

fn json_to_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(text).map(|ts| ts.date_naive()))
}

fn json_to_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s.trim()),
        // Epoch milliseconds
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
