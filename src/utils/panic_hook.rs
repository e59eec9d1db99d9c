use std::panic;
use leptos::logging::{error, log};

/// Forwards panics to the browser console and adds a hint when the panic
/// comes from a signal used after its page was unmounted.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        let when = js_sys::Date::new_0().to_iso_string();
        error!("[PANIC] {} at {}", message, String::from(when));

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A page was left while one of its requests or forms was still running.");
            log!("[PANIC] Late results must go through try_update so they are dropped, not applied.");
        }
    }));
}

/// Call once before mounting the app.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
