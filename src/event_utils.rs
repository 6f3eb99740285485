use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// Window event subscription. The listener is detached when this is dropped.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl WindowListener {
    /// Subscribe `cb` to a typed window event, e.g. `leptos::ev::popstate`.
    pub fn new<E>(event: E, options: &EventOptions, mut cb: impl FnMut(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(options.passive);
        opts.set_capture(options.capture);

        let event_name = event.name().into_owned();
        let callback = Closure::wrap(Box::new(move |ev: Event| {
            cb(ev.unchecked_into::<E::EventType>());
        }) as Box<dyn FnMut(Event)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &opts,
            );
        }

        Self { event_name, callback, capture: options.capture }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

/// Fires on browser back/forward. `pushState` itself does not trigger it.
pub fn on_history_change(mut cb: impl FnMut() + 'static) -> WindowListener {
    WindowListener::new(leptos::ev::popstate, &EventOptions::default(), move |_| cb())
}
