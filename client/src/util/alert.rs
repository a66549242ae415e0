//! Blocking modal notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! List-view failures are reported with the browser's `window.alert`, which
//! blocks until dismissed. Outside the browser the call is a no-op.

/// Show `message` in a blocking alert and log it to the console.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("alert: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
