use dioxus::prelude::*;

/// Width assumed when the window cannot be measured.
#[cfg(not(target_family = "wasm"))]
const FALLBACK_WIDTH: f64 = 1440.0;

#[cfg(target_family = "wasm")]
fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[cfg(not(target_family = "wasm"))]
fn current_width() -> f64 {
    FALLBACK_WIDTH
}

/// Window inner width, updated on resize.
pub fn use_viewport_width() -> Signal<f64> {
    let width = use_signal(current_width);

    #[cfg(target_family = "wasm")]
    use_hook(move || {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let mut width = width;
        let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            width.set(current_width());
        });
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                tracing::warn!("Could not watch window size: {:?}", e);
            }
        }
        // The nav bar lives as long as the page, so the listener does too.
        on_resize.forget();
    });

    width
}
