//! Browser viewport access. Native builds get inert stubs so the rest of the
//! crate stays testable off-wasm.

/// Current viewport width in logical pixels, when a window is available.
#[cfg(target_arch = "wasm32")]
pub fn width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn width() -> Option<f64> {
    None
}

/// Invoke `handler` with the new width on every window resize. Events are
/// not coalesced, and the listener stays attached for the lifetime of the
/// page.
#[cfg(target_arch = "wasm32")]
pub fn subscribe_resize(mut handler: impl FnMut(f64) + 'static) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Some(current) = width() {
            handler(current);
        }
    });

    if window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("window rejected the resize listener");
    }

    // The page never detaches the listener, so the closure leaks by design of
    // the subscription: it must outlive every resize event.
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn subscribe_resize(_handler: impl FnMut(f64) + 'static) {}
