use yew::prelude::*;
use crate::hooks::scroll::use_window_scroll;

const PARALLAX_RANGE: f64 = 600.0;
const SLOW_SHIFT: f64 = 12.0;
const FAST_SHIFT: f64 = 24.0;

/// Maps the scroll offset onto `[0, max_shift]` over the first
/// `PARALLAX_RANGE` pixels.
pub fn parallax_offset(scroll_y: f64, max_shift: f64) -> f64 {
    (scroll_y / PARALLAX_RANGE).clamp(0.0, 1.0) * max_shift
}

#[derive(Properties, PartialEq)]
pub struct FloatingShapesProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FloatingShapes)]
pub fn floating_shapes(props: &FloatingShapesProps) -> Html {
    let scroll_y = use_window_scroll();
    let slow = format!("transform: translateY({}px);", parallax_offset(scroll_y, SLOW_SHIFT));
    let fast = format!("transform: translateY({}px);", parallax_offset(scroll_y, FAST_SHIFT));

    html! {
        <div class={classes!("floating-shapes", props.class.clone())} aria-hidden="true">
            <div class="floating-shape floating-shape--sand" style={slow.clone()} />
            <div class="floating-shape floating-shape--green" style={fast} />
            <div class="floating-shape floating-shape--amber" style={slow} />
            <style>
                {r#"
                .floating-shapes {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    z-index: 0;
                }
                .floating-shape {
                    position: absolute;
                    filter: blur(40px);
                    transition: transform 0.1s linear;
                }
                .floating-shape--sand {
                    left: -6rem;
                    top: 2.5rem;
                    width: 220px;
                    height: 220px;
                    border-radius: 40%;
                    background: #efe3cf;
                    opacity: 0.7;
                }
                .floating-shape--green {
                    right: 0;
                    top: -30px;
                    width: 320px;
                    height: 320px;
                    border-radius: 44%;
                    background: rgba(31, 122, 90, 0.08);
                }
                .floating-shape--amber {
                    bottom: -40px;
                    left: 33%;
                    width: 160px;
                    height: 160px;
                    border-radius: 36%;
                    background: rgba(217, 145, 38, 0.08);
                }
                "#}
            </style>
        </div>
    }
}
