use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub const COUNTER_DURATION_MS: u32 = 1_200;
const COUNTER_TICK_MS: u32 = 16;
/// Share of the element that must be on screen before counting starts.
const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Value shown `elapsed_ms` into a count-up towards `target`.
pub fn counter_value(elapsed_ms: u32, duration_ms: u32, target: u32) -> u32 {
    if duration_ms == 0 {
        return target;
    }
    let progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    (progress * target as f64).round() as u32
}

/// Whether at least `threshold` of an element spanning `top..bottom` lies
/// inside a viewport of height `viewport_height`.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, threshold: f64) -> bool {
    let height = bottom - top;
    if height <= 0.0 {
        return false;
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    visible / height >= threshold
}

/// Formats whole reais the way pt-BR does: `R$ 15.000,00`.
pub fn format_brl(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {},00", grouped)
}

fn element_in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    is_in_view(rect.top(), rect.bottom(), viewport_height, VISIBILITY_THRESHOLD)
}

/// Counts from 0 to `target` once `node` scrolls into view.
#[hook]
pub fn use_in_view_counter(node: NodeRef, target: u32) -> u32 {
    let elapsed = use_state(|| None::<u32>);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(move |node: &NodeRef| {
            let window = web_sys::window().expect("no window");
            let started = Rc::new(Cell::new(false));

            let check = {
                let node = node.clone();
                move || {
                    if !started.get() && element_in_view(&node) {
                        started.set(true);
                        elapsed.set(Some(0));
                    }
                }
            };
            check();

            let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
            if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                log::error!("Failed to listen for scroll: {:?}", e);
            }

            move || {
                let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }
        }, node);
    }

    {
        let elapsed_setter = elapsed.setter();
        use_effect_with_deps(move |elapsed: &Option<u32>| {
            let timeout = match *elapsed {
                Some(ms) if ms < COUNTER_DURATION_MS => Some(Timeout::new(COUNTER_TICK_MS, move || {
                    elapsed_setter.set(Some((ms + COUNTER_TICK_MS).min(COUNTER_DURATION_MS)));
                })),
                _ => None,
            };
            move || drop(timeout)
        }, *elapsed);
    }

    (*elapsed)
        .map(|ms| counter_value(ms, COUNTER_DURATION_MS, target))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_rounds_progress_and_stops_at_target() {
        assert_eq!(counter_value(0, 1_200, 15_000), 0);
        assert_eq!(counter_value(600, 1_200, 15_000), 7_500);
        assert_eq!(counter_value(400, 1_200, 3), 1);
        assert_eq!(counter_value(1_200, 1_200, 3), 3);
        assert_eq!(counter_value(9_999, 1_200, 3), 3);
        assert_eq!(counter_value(0, 0, 3), 3);
    }

    #[test]
    fn visibility_uses_threshold_of_element_height() {
        // 100px tall element, viewport 800px.
        assert!(is_in_view(100.0, 200.0, 800.0, 0.3));
        assert!(is_in_view(730.0, 830.0, 800.0, 0.3));
        assert!(!is_in_view(780.0, 880.0, 800.0, 0.3));
        assert!(!is_in_view(-90.0, 10.0, 800.0, 0.3));
        assert!(!is_in_view(10.0, 10.0, 800.0, 0.3));
    }

    #[test]
    fn brl_uses_dot_thousands_and_comma_cents() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(500), "R$ 500,00");
        assert_eq!(format_brl(2_500), "R$ 2.500,00");
        assert_eq!(format_brl(15_000), "R$ 15.000,00");
        assert_eq!(format_brl(1_234_567), "R$ 1.234.567,00");
    }
}
