//! Account record types and allow-listed field updates.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted Account. The id is assigned by the store on creation and is
/// immutable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

/// Creation payload: everything but the id. The store fills date_joined with
/// the current date when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

impl Account {
    /// Apply a partial update, one field assignment per key. Unknown keys and
    /// attempts to reassign the id are rejected; fields absent from the map
    /// keep their prior values.
    pub fn apply_update(&mut self, fields: &Map<String, Value>) -> Result<(), AppError> {
        for (key, value) in fields {
            match key.as_str() {
                "name" => self.name = require_string(key, value)?,
                "email" => self.email = optional_string(key, value)?,
                "address" => self.address = optional_string(key, value)?,
                "phone_number" => self.phone_number = optional_string(key, value)?,
                "date_joined" => self.date_joined = require_date(key, value)?,
                "id" => {
                    return Err(AppError::Validation("id is immutable".into()));
                }
                _ => {
                    return Err(AppError::Validation(format!("unknown field '{}'", key)));
                }
            }
        }
        Ok(())
    }
}

fn require_string(field: &str, value: &Value) -> Result<String, AppError> {
    value
        .as_str()
        .map(String::from)
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", field)))
}

fn optional_string(field: &str, value: &Value) -> Result<Option<String>, AppError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

fn require_date(field: &str, value: &Value) -> Result<NaiveDate, AppError> {
    let s = value
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{} must be a date string", field)))?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Account {
        Account {
            id: 1,
            name: "Alice".into(),
            email: Some("alice@example.com".into()),
            address: Some("1 Main St".into()),
            phone_number: None,
            date_joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn partial_update_keeps_unmentioned_fields() {
        let mut account = sample();
        let fields = json!({"address": "2 Side St"});
        account.apply_update(fields.as_object().unwrap()).unwrap();
        assert_eq!(account.address.as_deref(), Some("2 Side St"));
        assert_eq!(account.name, "Alice");
        assert_eq!(account.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut account = sample();
        let fields = json!({"favourite_colour": "green"});
        let err = account.apply_update(fields.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn id_cannot_be_reassigned() {
        let mut account = sample();
        let fields = json!({"id": 99});
        let err = account.apply_update(fields.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("immutable"));
        assert_eq!(account.id, 1);
    }

    #[test]
    fn nullable_field_accepts_null() {
        let mut account = sample();
        let fields = json!({"email": null});
        account.apply_update(fields.as_object().unwrap()).unwrap();
        assert_eq!(account.email, None);
    }

    #[test]
    fn wrong_type_names_the_field() {
        let mut account = sample();
        let fields = json!({"name": 42});
        let err = account.apply_update(fields.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("name must be a string"));
    }

    #[test]
    fn date_joined_parses_iso_date() {
        let mut account = sample();
        let fields = json!({"date_joined": "2025-06-01"});
        account.apply_update(fields.as_object().unwrap()).unwrap();
        assert_eq!(
            account.date_joined,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );

        let bad = json!({"date_joined": "June 1st"});
        assert!(account.apply_update(bad.as_object().unwrap()).is_err());
    }

    #[test]
    fn new_account_deserializes_with_missing_optionals() {
        let new: NewAccount =
            serde_json::from_value(json!({"name": "Alice", "address": "1 Main St"})).unwrap();
        assert_eq!(new.name, "Alice");
        assert_eq!(new.address.as_deref(), Some("1 Main St"));
        assert_eq!(new.email, None);
        assert_eq!(new.date_joined, None);
    }
}
