use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Sentinel form id shipped in builds without `FORMSPREE_FORM_ID`.
pub const FORMSPREE_PLACEHOLDER: &str = "YOUR_FORMSPREE_ID";
pub const RELAY_PATH: &str = "/api/airtable-lead";

/// Raw values read from the lead form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub message: String,
    /// Honeypot field, hidden from humans.
    pub website: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub message: String,
    pub page: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    MissingFields,
    FormspreeNotConfigured,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingFields => write!(f, "Preencha nome, e-mail e WhatsApp."),
            SubmissionError::FormspreeNotConfigured => write!(f, "FORMSPREE_FORM_ID não configurado"),
        }
    }
}

/// Where a lead goes: our own relay in front of Airtable, or Formspree
/// straight from the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadBackend {
    Relay { endpoint: String },
    Formspree { form_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTarget {
    pub url: String,
    /// Formspree only answers with JSON when asked to.
    pub accept_json: bool,
}

impl LeadBackend {
    pub fn select(use_relay: bool, backend_url: &str, form_id: &str) -> Self {
        if use_relay {
            LeadBackend::Relay {
                endpoint: format!("{}{}", backend_url.trim_end_matches('/'), RELAY_PATH),
            }
        } else {
            LeadBackend::Formspree { form_id: form_id.trim().to_string() }
        }
    }

    pub fn target(&self) -> Result<SubmitTarget, SubmissionError> {
        match self {
            LeadBackend::Relay { endpoint } => Ok(SubmitTarget {
                url: endpoint.clone(),
                accept_json: false,
            }),
            LeadBackend::Formspree { form_id } => {
                if form_id.is_empty() || form_id == FORMSPREE_PLACEHOLDER {
                    return Err(SubmissionError::FormspreeNotConfigured);
                }
                Ok(SubmitTarget {
                    url: format!("https://formspree.io/f/{}", form_id),
                    accept_json: true,
                })
            }
        }
    }
}

/// Turns the form into a payload. `Ok(None)` means the honeypot caught a bot
/// and the submission is dropped without telling anyone.
pub fn prepare(form: &LeadForm, page: &str) -> Result<Option<LeadPayload>, SubmissionError> {
    if !form.website.is_empty() {
        return Ok(None);
    }

    let name = form.name.trim();
    let email = form.email.trim();
    let whatsapp = form.whatsapp.trim();
    if name.is_empty() || email.is_empty() || whatsapp.is_empty() {
        return Err(SubmissionError::MissingFields);
    }

    Ok(Some(LeadPayload {
        name: name.to_string(),
        email: email.to_string(),
        whatsapp: whatsapp.to_string(),
        message: form.message.trim().to_string(),
        page: page.to_string(),
    }))
}

/// Picks a readable message out of an error body: Formspree's
/// `errors[0].message`, then the relay's `error`.
pub fn error_message(body: &Value) -> Option<String> {
    body.pointer("/errors/0/message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_form() -> LeadForm {
        LeadForm {
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            whatsapp: "11999999999".to_string(),
            message: "  Fui demitido  ".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn honeypot_drops_submission_before_any_request() {
        let form = LeadForm { website: "http://spam.example".to_string(), ..filled_form() };
        assert_eq!(prepare(&form, "https://truerise.com.br/"), Ok(None));

        let empty_bot = LeadForm { website: "x".to_string(), ..LeadForm::default() };
        assert_eq!(prepare(&empty_bot, ""), Ok(None));
    }

    #[test]
    fn payload_carries_page_url_and_trimmed_values() {
        let payload = prepare(&filled_form(), "https://truerise.com.br/#cta")
            .unwrap()
            .unwrap();

        assert_eq!(payload.message, "Fui demitido");
        assert_eq!(payload.page, "https://truerise.com.br/#cta");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["whatsapp"], "11999999999");
    }

    #[test]
    fn blank_required_fields_are_refused() {
        let form = LeadForm { whatsapp: "   ".to_string(), ..filled_form() };
        assert_eq!(prepare(&form, ""), Err(SubmissionError::MissingFields));
    }

    #[test]
    fn flag_selects_between_relay_and_formspree() {
        let relay = LeadBackend::select(true, "http://localhost:3000/", "abc");
        assert_eq!(
            relay.target().unwrap(),
            SubmitTarget {
                url: "http://localhost:3000/api/airtable-lead".to_string(),
                accept_json: false,
            }
        );

        let same_origin = LeadBackend::select(true, "", "abc");
        assert_eq!(same_origin.target().unwrap().url, "/api/airtable-lead");

        let formspree = LeadBackend::select(false, "", "xyzabc");
        assert_eq!(
            formspree.target().unwrap(),
            SubmitTarget {
                url: "https://formspree.io/f/xyzabc".to_string(),
                accept_json: true,
            }
        );
    }

    #[test]
    fn placeholder_form_id_counts_as_unconfigured() {
        for form_id in [FORMSPREE_PLACEHOLDER, "", "  "] {
            let backend = LeadBackend::select(false, "", form_id);
            assert_eq!(backend.target(), Err(SubmissionError::FormspreeNotConfigured));
        }
    }

    #[test]
    fn error_message_prefers_formspree_shape() {
        let formspree = json!({"errors": [{"field": "email", "message": "should be an email"}]});
        assert_eq!(error_message(&formspree).as_deref(), Some("should be an email"));

        let relay = json!({"error": "Missing required fields"});
        assert_eq!(error_message(&relay).as_deref(), Some("Missing required fields"));

        assert_eq!(error_message(&json!({})), None);
        assert_eq!(error_message(&json!({"error": {"type": "X"}})), None);
        assert_eq!(error_message(&Value::Null), None);
    }
}
