use crate::lead::submission::FORMSPREE_PLACEHOLDER;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Lead relay when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Formspree form id baked in at build time, or the placeholder.
pub fn formspree_form_id() -> &'static str {
    option_env!("FORMSPREE_FORM_ID")
        .filter(|id| !id.is_empty())
        .unwrap_or(FORMSPREE_PLACEHOLDER)
}

/// Leads go through the Airtable relay unless the build sets
/// `USE_AIRTABLE_API=false`.
pub fn use_airtable_api() -> bool {
    !matches!(option_env!("USE_AIRTABLE_API"), Some("0") | Some("false"))
}
