use chrono::{SecondsFormat, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::airtable_config::AirtableConfig;

pub const LEAD_SOURCE: &str = "Landing True Rise";
pub const INITIAL_STATUS: &str = "Novo";

#[derive(Debug, Error)]
pub enum AirtableError {
    #[error("Airtable responded with status {status}")]
    Rejected { status: StatusCode, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// One row of the leads table. Client values are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeadFields {
    pub name: Value,
    pub email: Value,
    pub whatsapp: Value,
    pub message: Value,
    pub page: Value,
    pub source: &'static str,
    pub status: &'static str,
    pub created_at: String,
}

impl LeadFields {
    pub fn new(name: Value, email: Value, whatsapp: Value, message: Value, page: Value) -> Self {
        Self {
            name,
            email,
            whatsapp,
            message,
            page,
            source: LEAD_SOURCE,
            status: INITIAL_STATUS,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    fields: &'a LeadFields,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub id: Value,
}

pub struct AirtableClient {
    http: Client,
    config: AirtableConfig,
}

impl AirtableClient {
    pub fn new(http: Client, config: AirtableConfig) -> Self {
        Self { http, config }
    }

    pub async fn create_record(&self, fields: &LeadFields) -> Result<CreatedRecord, AirtableError> {
        let url = self.config.records_url();
        tracing::debug!("Creating Airtable record at {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&CreateRecordRequest { fields })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            tracing::error!("Airtable request failed. Status: {}, Body: {}", status, body);
            return Err(AirtableError::Rejected { status, body });
        }

        Ok(response.json::<CreatedRecord>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_serialize_with_airtable_column_names() {
        let fields = LeadFields::new(
            json!("Ana"),
            json!("a@b.com"),
            json!("11999999999"),
            json!(""),
            json!("https://truerise.com.br/"),
        );
        let value = serde_json::to_value(&fields).unwrap();

        assert_eq!(value["Name"], "Ana");
        assert_eq!(value["Whatsapp"], "11999999999");
        assert_eq!(value["Source"], "Landing True Rise");
        assert_eq!(value["Status"], "Novo");
        assert!(value["CreatedAt"].as_str().unwrap().ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(value["CreatedAt"].as_str().unwrap()).is_ok());
    }
}
