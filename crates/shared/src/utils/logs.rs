use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub struct Logger {
    _provider: Option<SdkLoggerProvider>,
}

impl Logger {
    /// Installs the global subscriber: JSON file logs, a `RUST_LOG`-filtered
    /// console, and outside dev mode the OpenTelemetry log bridge.
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("user_registration_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if is_dev {
            registry.init();
            None
        } else {
            let provider = SdkLoggerProvider::builder().build();
            registry
                .with(OpenTelemetryTracingBridge::new(&provider).with_filter(otel_filter()))
                .init();
            Some(provider)
        };

        // the writer must outlive every span; the process owns it until exit
        std::mem::forget(guard);

        Self {
            _provider: provider,
        }
    }
}

fn otel_filter() -> EnvFilter {
    ["hyper", "opentelemetry", "h2", "sqlx", "tower_http"]
        .into_iter()
        .filter_map(|target| format!("{target}=off").parse().ok())
        .fold(EnvFilter::new("info"), |filter, directive| {
            filter.add_directive(directive)
        })
}
