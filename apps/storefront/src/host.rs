//! Browser implementations of the view's seams.

use leptos::leptos_dom::logging::{console_error, console_log, console_warn};
use leptos::prelude::window;
use shop_core::{StoreConfig, ENV_API_URL, ENV_CURRENCY, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
use shop_observability::{LogEntry, LogLevel, LogSink};
use shop_view::{Notification, Notifier};

/// Blocking notifier backed by `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(err) = window().alert_with_message(notification.message()) {
            console_error(&format!("alert failed: {:?}", err));
        }
    }
}

/// Writes log lines to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry, line: &str) {
        match entry.level {
            LogLevel::Error => console_error(line),
            LogLevel::Warn => console_warn(line),
            _ => console_log(line),
        }
    }
}

/// Environment baked in at build time (there is no process environment in
/// the browser).
fn build_env(key: &str) -> Option<&'static str> {
    match key {
        ENV_API_URL => option_env!("STOREFRONT_API_URL"),
        ENV_CURRENCY => option_env!("STOREFRONT_CURRENCY"),
        ENV_LOG_LEVEL => option_env!("STOREFRONT_LOG_LEVEL"),
        ENV_LOG_FORMAT => option_env!("STOREFRONT_LOG_FORMAT"),
        _ => None,
    }
}

/// Defaults plus build-time environment overrides. An invalid override is
/// reported and the defaults are used instead.
pub fn load_config() -> StoreConfig {
    StoreConfig::default()
        .with_overrides(|key| build_env(key).map(String::from))
        .unwrap_or_else(|err| {
            console_error(&format!("Invalid storefront configuration: {}", err));
            StoreConfig::default()
        })
}
