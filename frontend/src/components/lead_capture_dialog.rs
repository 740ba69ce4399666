use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::toast::{use_toast, ToastRequest};
use crate::config;
use crate::lead::client::{submit, SubmitOutcome};
use crate::lead::submission::{prepare, LeadBackend, LeadForm};

#[derive(Properties, PartialEq)]
pub struct LeadCaptureDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub formspree_form_id: Option<AttrValue>,
    #[prop_or_else(config::use_airtable_api)]
    pub use_airtable_api: bool,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}

fn current_page() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

/// Waiting-list form shown in a modal.
#[function_component(LeadCaptureDialog)]
pub fn lead_capture_dialog(props: &LeadCaptureDialogProps) -> Html {
    let toast = use_toast();
    let is_submitting = use_state(|| false);

    let honeypot_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let whatsapp_ref = use_node_ref();
    let message_ref = use_node_ref();

    let backend = {
        let form_id = props
            .formspree_form_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| config::formspree_form_id());
        LeadBackend::select(props.use_airtable_api, config::get_backend_url(), form_id)
    };

    let onsubmit = {
        let toast = toast.clone();
        let is_submitting = is_submitting.clone();
        let on_open_change = props.on_open_change.clone();
        let refs = (
            honeypot_ref.clone(),
            name_ref.clone(),
            email_ref.clone(),
            whatsapp_ref.clone(),
            message_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (honeypot_ref, name_ref, email_ref, whatsapp_ref, message_ref) = &refs;

            let form = LeadForm {
                name: input_value(name_ref),
                email: input_value(email_ref),
                whatsapp: input_value(whatsapp_ref),
                message: textarea_value(message_ref),
                website: input_value(honeypot_ref),
            };

            let payload = match prepare(&form, &current_page()) {
                Ok(Some(payload)) => payload,
                Ok(None) => {
                    log::info!("Honeypot field filled, ignoring submission");
                    return;
                }
                Err(e) => {
                    toast.emit(ToastRequest::error("Erro", &e.to_string()));
                    return;
                }
            };

            is_submitting.set(true);
            let backend = backend.clone();
            let toast = toast.clone();
            let is_submitting = is_submitting.clone();
            let on_open_change = on_open_change.clone();
            spawn_local(async move {
                match submit(&backend, &payload).await {
                    SubmitOutcome::Accepted => {
                        toast.emit(ToastRequest::info(
                            "Recebido!",
                            "Entraremos em contato para agendar a demonstração.",
                        ));
                        on_open_change.emit(false);
                    }
                    SubmitOutcome::Rejected(message) => {
                        toast.emit(ToastRequest::error("Erro no envio", &message));
                    }
                    SubmitOutcome::Failed(message) => {
                        toast.emit(ToastRequest::error("Erro", &message));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let close = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lead-dialog__overlay" onclick={close.clone()}>
            <div
                class="lead-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="lead-dialog-title"
                onclick={keep_open}
            >
                <button class="lead-dialog__close" onclick={close} aria-label="Fechar">{"✕"}</button>
                <h2 id="lead-dialog-title">{"Entrar na Lista de Espera"}</h2>
                <p class="lead-dialog__description">
                    {"Preencha seus dados e retornaremos com uma demonstração personalizada."}
                </p>

                <form class="lead-dialog__form" {onsubmit}>
                    <input
                        ref={honeypot_ref}
                        type="text"
                        name="website"
                        class="lead-dialog__honeypot"
                        tabindex="-1"
                        autocomplete="off"
                        aria-hidden="true"
                    />

                    <label for="name">{"Nome completo"}</label>
                    <input ref={name_ref} id="name" name="name" placeholder="Seu nome" required=true />

                    <label for="email">{"E-mail"}</label>
                    <input ref={email_ref} id="email" name="email" type="email" placeholder="voce@exemplo.com" required=true />

                    <label for="whatsapp">{"WhatsApp"}</label>
                    <input ref={whatsapp_ref} id="whatsapp" name="whatsapp" placeholder="(11) 99999-9999" required=true />

                    <label for="message">{"Como podemos ajudar?"}</label>
                    <textarea ref={message_ref} id="message" name="message" placeholder="Conte brevemente seu contexto" rows="4" />

                    <button type="submit" class="lead-dialog__submit" disabled={*is_submitting}>
                        { if *is_submitting { "Enviando..." } else { "Enviar" } }
                    </button>
                    <p class="lead-dialog__legal">
                        {"Ao enviar, você concorda com nossa Política de Privacidade."}
                    </p>
                </form>
            </div>
            <style>
                {r#"
                .lead-dialog__overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                    padding: 1rem;
                }
                .lead-dialog {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: #ffffff;
                    color: #1c2a25;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .lead-dialog h2 { font-size: 1.25rem; margin: 0; }
                .lead-dialog__description { color: #5b6b65; font-size: 0.9rem; margin: 0.5rem 0 1.5rem; }
                .lead-dialog__close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #5b6b65;
                }
                .lead-dialog__form {
                    display: grid;
                    gap: 0.5rem;
                }
                .lead-dialog__form label { font-size: 0.85rem; font-weight: 600; margin-top: 0.5rem; }
                .lead-dialog__form input,
                .lead-dialog__form textarea {
                    border: 1px solid rgba(28, 42, 37, 0.2);
                    border-radius: 8px;
                    padding: 0.6rem 0.75rem;
                    font: inherit;
                }
                .lead-dialog__honeypot { display: none; }
                .lead-dialog__submit {
                    margin-top: 1rem;
                    height: 2.75rem;
                    border: none;
                    border-radius: 8px;
                    background: #1f7a5a;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .lead-dialog__submit:disabled { opacity: 0.6; cursor: wait; }
                .lead-dialog__legal { font-size: 0.75rem; color: #5b6b65; text-align: center; }
                "#}
            </style>
        </div>
    }
}
