use gloo_net::http::Request;
use serde_json::Value;

use super::submission::{error_message, LeadBackend, LeadPayload};

pub const GENERIC_REJECTION: &str = "Não foi possível enviar. Tente novamente.";
pub const GENERIC_FAILURE: &str = "Verifique sua conexão e tente novamente.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// The backend answered with a non-2xx status.
    Rejected(String),
    /// Nothing usable came back: misconfiguration or a network error.
    Failed(String),
}

/// Sends the lead to the selected backend. Never retries.
pub async fn submit(backend: &LeadBackend, payload: &LeadPayload) -> SubmitOutcome {
    let target = match backend.target() {
        Ok(target) => target,
        Err(e) => {
            log::warn!("Lead backend not usable: {}", e);
            return SubmitOutcome::Failed(e.to_string());
        }
    };

    let mut request = Request::post(&target.url);
    if target.accept_json {
        request = request.header("Accept", "application/json");
    }
    let request = match request.json(payload) {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::Failed(failure_message(&e.to_string())),
    };

    match request.send().await {
        Ok(response) => {
            let ok = response.ok();
            log::info!("Lead submission answered with status {}", response.status());
            let body = if ok { None } else { response.json::<Value>().await.ok() };
            outcome_from_response(ok, body.as_ref())
        }
        Err(e) => {
            log::error!("Lead submission failed: {}", e);
            SubmitOutcome::Failed(failure_message(&e.to_string()))
        }
    }
}

pub fn outcome_from_response(ok: bool, body: Option<&Value>) -> SubmitOutcome {
    if ok {
        return SubmitOutcome::Accepted;
    }
    let message = body
        .and_then(error_message)
        .unwrap_or_else(|| GENERIC_REJECTION.to_string());
    SubmitOutcome::Rejected(message)
}

fn failure_message(error: &str) -> String {
    if error.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_status_is_accepted_regardless_of_body() {
        assert_eq!(outcome_from_response(true, None), SubmitOutcome::Accepted);
        assert_eq!(
            outcome_from_response(true, Some(&json!({"error": "ignored"}))),
            SubmitOutcome::Accepted
        );
    }

    #[test]
    fn rejection_surfaces_backend_message_or_fallback() {
        let body = json!({"error": "Airtable not configured"});
        assert_eq!(
            outcome_from_response(false, Some(&body)),
            SubmitOutcome::Rejected("Airtable not configured".to_string())
        );
        assert_eq!(
            outcome_from_response(false, None),
            SubmitOutcome::Rejected(GENERIC_REJECTION.to_string())
        );
    }

    #[test]
    fn empty_network_error_uses_generic_failure() {
        assert_eq!(failure_message(""), GENERIC_FAILURE);
        assert_eq!(failure_message("Failed to fetch"), "Failed to fetch");
    }
}
