use yew::prelude::*;
use crate::components::whatsapp_chat::WhatsAppChat;

#[function_component(PhoneMockup)]
pub fn phone_mockup() -> Html {
    html! {
        <div class="phone-mockup">
            <div class="phone-mockup__shell" aria-hidden="true">
                <WhatsAppChat />
                <div class="phone-mockup__ring" />
            </div>
            <style>
                {r#"
                .phone-mockup {
                    margin: 0 auto;
                    width: 320px;
                }
                @media (min-width: 768px) {
                    .phone-mockup { width: 360px; }
                }
                .phone-mockup__shell {
                    position: relative;
                    border-radius: 2.5rem;
                    border: 1px solid rgba(28, 42, 37, 0.12);
                    background: #ffffff;
                    padding: 0.5rem;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
                }
                .phone-mockup__ring {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    border-radius: 2.5rem;
                    box-shadow: inset 0 0 0 1px rgba(28, 42, 37, 0.1);
                }
                "#}
            </style>
        </div>
    }
}
