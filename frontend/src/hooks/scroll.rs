use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Vertical scroll offset of the window, updated on every scroll event.
#[hook]
pub fn use_window_scroll() -> f64 {
    let scroll_y = use_state(|| {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    });

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().expect("no window");
            let read_window = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                scroll_y.set(read_window.scroll_y().unwrap_or(0.0));
            }) as Box<dyn FnMut()>);

            if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                log::error!("Failed to listen for scroll: {:?}", e);
            }

            move || {
                let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }
        }, ());
    }

    *scroll_y
}
