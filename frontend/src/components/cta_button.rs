use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;

const RIPPLE_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq)]
struct Ripple {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Primary call-to-action with a ripple where it was clicked.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let ripple = use_state(|| None::<Ripple>);
    let count = use_mut_ref(|| 0u32);

    let handle_click = {
        let ripple = ripple.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            let (x, y) = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|button| {
                    let rect = button.get_bounding_client_rect();
                    (e.client_x() as f64 - rect.left(), e.client_y() as f64 - rect.top())
                })
                .unwrap_or_default();

            let id = {
                let mut count = count.borrow_mut();
                *count += 1;
                *count
            };
            ripple.set(Some(Ripple { id, x, y }));

            let ripple = ripple.clone();
            Timeout::new(RIPPLE_MS, move || ripple.set(None)).forget();

            onclick.emit(e);
        })
    };

    html! {
        <button
            type="button"
            aria-label="Entrar na lista de espera"
            class={classes!("cta-button", props.class.clone())}
            onclick={handle_click}
        >
            {
                if let Some(r) = *ripple {
                    html! {
                        <span
                            key={r.id}
                            class="cta-ripple"
                            style={format!("left: {}px; top: {}px;", r.x, r.y)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            { props.children.clone() }
            <style>
                {r#"
                .cta-button {
                    position: relative;
                    overflow: hidden;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                    height: 3rem;
                    border: none;
                    border-radius: 10px;
                    background: linear-gradient(45deg, #1f7a5a, #2e9c73);
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(31, 122, 90, 0.3);
                }
                .cta-ripple {
                    position: absolute;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.4);
                    transform: translate(-50%, -50%) scale(0);
                    pointer-events: none;
                    animation: ctaRipple 0.6s ease-out forwards;
                }
                @keyframes ctaRipple {
                    from { opacity: 0.25; transform: translate(-50%, -50%) scale(0); }
                    to { opacity: 0; transform: translate(-50%, -50%) scale(4); }
                }
                "#}
            </style>
        </button>
    }
}
