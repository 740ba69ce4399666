pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Credentials and target table for the Airtable records API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AirtableConfig {
    pub token: String,
    pub base_id: String,
    pub table: String,
    pub api_url: String,
}

impl AirtableConfig {
    /// Reads `AIRTABLE_TOKEN`, `AIRTABLE_BASE_ID` and `AIRTABLE_TABLE_NAME`.
    /// Returns `None` when any of them is missing or empty, which leaves the
    /// relay disabled instead of failing startup.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Some(Self {
            token: required("AIRTABLE_TOKEN")?,
            base_id: required("AIRTABLE_BASE_ID")?,
            table: required("AIRTABLE_TABLE_NAME")?,
            api_url: required("AIRTABLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    pub fn records_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base_id,
            urlencoding::encode(&self.table)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn loads_all_required_values() {
        let config = AirtableConfig::from_lookup(lookup_from(&[
            ("AIRTABLE_TOKEN", "pat123"),
            ("AIRTABLE_BASE_ID", "appABC"),
            ("AIRTABLE_TABLE_NAME", "Leads"),
        ]))
        .expect("config should load");

        assert_eq!(config.token, "pat123");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn missing_or_blank_value_disables_relay() {
        assert!(AirtableConfig::from_lookup(lookup_from(&[
            ("AIRTABLE_TOKEN", "pat123"),
            ("AIRTABLE_BASE_ID", "appABC"),
        ]))
        .is_none());

        assert!(AirtableConfig::from_lookup(lookup_from(&[
            ("AIRTABLE_TOKEN", "pat123"),
            ("AIRTABLE_BASE_ID", "  "),
            ("AIRTABLE_TABLE_NAME", "Leads"),
        ]))
        .is_none());
    }

    #[test]
    fn table_name_is_percent_encoded_in_records_url() {
        let config = AirtableConfig {
            token: "pat123".to_string(),
            base_id: "appABC".to_string(),
            table: "Leads Landing/2025".to_string(),
            api_url: "http://localhost:9999/v0/".to_string(),
        };

        assert_eq!(
            config.records_url(),
            "http://localhost:9999/v0/appABC/Leads%20Landing%2F2025"
        );
    }
}
