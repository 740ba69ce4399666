use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::chat::player::ConversationPlayer;
use crate::chat::transcript::{Sender, TRANSCRIPT};

fn side_class(sender: Sender) -> &'static str {
    match sender {
        Sender::Assistant => "chat-row--incoming",
        Sender::Client => "chat-row--outgoing",
    }
}

#[function_component(TypingBubble)]
fn typing_bubble() -> Html {
    html! {
        <div class="chat-typing">
            <span class="sr-only">{"Digitando…"}</span>
            <span class="chat-typing__dot" />
            <span class="chat-typing__dot" />
            <span class="chat-typing__dot" />
        </div>
    }
}

/// Plays the scripted WhatsApp conversation in a loop.
#[function_component(WhatsAppChat)]
pub fn whatsapp_chat() -> Html {
    let player = use_state(|| ConversationPlayer::new(TRANSCRIPT));
    let chat_ref = use_node_ref();

    {
        let player_setter = player.setter();
        let current = (*player).clone();
        use_effect_with_deps(move |current: &ConversationPlayer| {
            let mut next = current.clone();
            let timeout = Timeout::new(current.delay_ms(), move || {
                next.advance();
                player_setter.set(next);
            });

            // Unmount cancels the pending tick.
            move || drop(timeout)
        }, current);
    }

    {
        let chat_ref = chat_ref.clone();
        let current = (*player).clone();
        use_effect_with_deps(move |_| {
            if let Some(chat) = chat_ref.cast::<Element>() {
                chat.set_scroll_top(chat.scroll_height());
            }
            || ()
        }, current);
    }

    html! {
        <div class="chat-phone">
            <div class="chat-phone__notch-bar">
                <div class="chat-phone__notch" />
            </div>
            <div
                ref={chat_ref}
                class="chat-phone__screen"
                aria-live="polite"
                aria-label="Simulação de conversa no WhatsApp"
            >
                <div class="chat-phone__messages">
                    { for player.visible().iter().enumerate().map(|(ordinal, message)| html! {
                        <div key={ordinal} class={classes!("chat-row", side_class(message.sender))}>
                            <div class={classes!("chat-bubble", (message.sender == Sender::Assistant).then(|| "chat-bubble--assistant"))}>
                                { message.text }
                            </div>
                        </div>
                    }) }
                    {
                        if let Some(sender) = player.typing_sender() {
                            html! {
                                <div class={classes!("chat-row", side_class(sender))}>
                                    <TypingBubble />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .chat-phone {
                    border-radius: 2rem;
                    border: 1px solid rgba(28, 42, 37, 0.12);
                    background: #ffffff;
                    overflow: hidden;
                }
                .chat-phone__notch-bar {
                    position: relative;
                    height: 2.5rem;
                    background: rgba(28, 42, 37, 0.05);
                }
                .chat-phone__notch {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    width: 6rem;
                    height: 1rem;
                    transform: translate(-50%, -50%);
                    border-radius: 999px;
                    background: rgba(28, 42, 37, 0.2);
                }
                .chat-phone__screen {
                    height: 520px;
                    overflow-y: auto;
                    background: #efeae2;
                    padding: 1rem 0.75rem;
                    scroll-behavior: smooth;
                }
                .chat-phone__messages {
                    margin: 0 auto;
                    max-width: 20rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .chat-row { display: flex; animation: chatIn 0.35s cubic-bezier(0.22, 1, 0.36, 1); }
                .chat-row--incoming { justify-content: flex-start; }
                .chat-row--outgoing { justify-content: flex-end; }
                .chat-bubble {
                    max-width: 85%;
                    border-radius: 1rem;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    line-height: 1.5;
                    background: #ffffff;
                    color: #1c2a25;
                    border: 1px solid rgba(28, 42, 37, 0.1);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
                }
                .chat-bubble--assistant {
                    background: #1f7a5a;
                    color: #ffffff;
                    border: none;
                }
                .chat-typing {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    width: fit-content;
                    border-radius: 1rem;
                    background: #ffffff;
                    padding: 0.5rem 0.75rem;
                }
                .chat-typing__dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: rgba(28, 42, 37, 0.4);
                    animation: typingPulse 1s infinite;
                }
                .chat-typing__dot:nth-child(3) { animation-delay: 120ms; }
                .chat-typing__dot:nth-child(4) { animation-delay: 240ms; }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @keyframes chatIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes typingPulse {
                    0%, 100% { opacity: 0.4; }
                    50% { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
