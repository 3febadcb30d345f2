//! Leptos Viewport Utilities
//!
//! Media-query style signals for Leptos using `window` resize events.
//! A signal only fires when the computed class changes, not on every resize.

use std::fmt::Debug;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Current `window.innerWidth` in CSS pixels, if there is a window
pub fn current_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Call `on_resize` with the new width on every `window` resize event.
/// The listener lives for the rest of the page.
pub fn bind_window_resize<F>(on_resize: F)
where
    F: Fn(f64) + 'static,
{
    let Some(win) = web_sys::window() else {
        log::warn!("no window, resize listener not installed");
        return;
    };

    let on_event = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(width) = current_width() {
            on_resize(width);
        }
    });

    if win
        .add_event_listener_with_callback("resize", on_event.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to bind window resize listener");
    }
    on_event.forget();
}

/// `classify` applied to the window width, or `fallback` without a window
pub fn initial_class<T, C>(fallback: T, width: Option<f64>, classify: &C) -> T
where
    C: Fn(f64) -> T,
{
    width.map(classify).unwrap_or(fallback)
}

/// Signal holding `classify(window width)`.
///
/// Evaluated once immediately, then re-evaluated on each resize event and
/// written only when the class differs from the current one.
pub fn create_width_class_signal<T, C>(fallback: T, classify: C) -> ReadSignal<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
    C: Fn(f64) -> T + 'static,
{
    let initial = initial_class(fallback, current_width(), &classify);
    let (class_read, class_write) = signal(initial);

    bind_window_resize(move |width| {
        let next = classify(width);
        if class_read.with_untracked(|current| *current != next) {
            log::debug!("viewport {}px is now {:?}", width, next);
            class_write.set(next);
        }
    });

    class_read
}
