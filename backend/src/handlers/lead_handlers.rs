use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{
    api::airtable::LeadFields,
    error::RelayError,
    AppState,
};

/// `/api/airtable-lead`: validates a landing page lead and stores it as an
/// Airtable record. Registered for every method so that preflight and
/// method errors get the same CORS headers as successful calls.
pub async fn airtable_lead(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, RelayError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    if method != Method::POST {
        tracing::debug!("Rejecting {} on lead relay", method);
        return Err(RelayError::MethodNotAllowed);
    }

    let Some(airtable) = state.airtable.as_ref() else {
        tracing::warn!("Lead received but Airtable is not configured");
        return Err(RelayError::NotConfigured);
    };

    let body = parse_body(&body);
    let fields = lead_fields(&body).ok_or_else(|| {
        tracing::info!("Lead rejected: missing required fields");
        RelayError::MissingFields
    })?;

    let record = airtable.create_record(&fields).await?;
    tracing::info!("Lead stored in Airtable as record {}", record.id);

    Ok(Json(json!({"ok": true, "id": record.id})).into_response())
}

/// Decodes the request body, unwrapping one level of string encoding.
/// Anything unparseable becomes an empty object.
pub fn parse_body(raw: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::String(inner)) => serde_json::from_str(&inner).unwrap_or_else(|_| json!({})),
        Ok(value) => value,
        Err(_) => json!({}),
    }
}

/// Builds the record fields, or `None` when name, email or whatsapp is
/// missing or falsy.
pub fn lead_fields(body: &Value) -> Option<LeadFields> {
    let required = |key: &str| body.get(key).filter(|value| is_truthy(value)).cloned();
    let optional = |key: &str| {
        body.get(key)
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    };

    Some(LeadFields::new(
        required("name")?,
        required("email")?,
        required("whatsapp")?,
        optional("message"),
        optional("page"),
    ))
}

/// Truthiness as a browser client understands it: `null`, `false`, zero and
/// the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_string_encoded_bodies() {
        let plain = br#"{"name":"Ana"}"#;
        assert_eq!(parse_body(plain)["name"], "Ana");

        let encoded = serde_json::to_vec(&Value::String(r#"{"name":"Ana"}"#.to_string())).unwrap();
        assert_eq!(parse_body(&encoded)["name"], "Ana");
    }

    #[test]
    fn garbage_body_becomes_empty_object() {
        assert_eq!(parse_body(b"not json"), json!({}));
        assert_eq!(parse_body(b""), json!({}));
        assert_eq!(parse_body(br#""still not json""#), json!({}));
    }

    #[test]
    fn truthiness_follows_browser_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(11999999999u64)));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn optional_fields_default_to_empty_strings() {
        let fields = lead_fields(&json!({
            "name": "Ana",
            "email": "a@b.com",
            "whatsapp": "11999999999",
            "message": null
        }))
        .expect("lead is complete");

        assert_eq!(fields.message, json!(""));
        assert_eq!(fields.page, json!(""));
    }

    #[test]
    fn each_required_field_is_enforced() {
        let complete = json!({"name": "Ana", "email": "a@b.com", "whatsapp": "11999999999"});
        for key in ["name", "email", "whatsapp"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(key);
            assert!(lead_fields(&body).is_none(), "{key} should be required");

            let mut body = complete.clone();
            body[key] = json!("");
            assert!(lead_fields(&body).is_none(), "empty {key} should be rejected");
        }
        assert!(lead_fields(&json!(["Ana"])).is_none());
    }
}
