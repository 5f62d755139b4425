use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const OTEL_FILTER: &str = "info,hyper=off,opentelemetry=off,tonic=off,h2=off,reqwest=off";

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub component: String,
    pub dev_mode: bool,
    pub file_log: bool,
}

impl LogOptions {
    pub fn from_env(component: &str) -> Self {
        let flag = |name: &str| {
            std::env::var(name)
                .map(|val| val == "true" || val == "1")
                .unwrap_or(false)
        };

        Self {
            component: component.to_string(),
            dev_mode: flag("DEV_MODE"),
            file_log: flag("ENABLE_FILE_LOG"),
        }
    }

    fn log_dir(&self) -> &'static str {
        if self.dev_mode { "./logs" } else { "/var/log/app" }
    }
}

/// Installs the global subscriber: JSON daily file (opt-in), pretty console
/// driven by `RUST_LOG`, and the OpenTelemetry log bridge.
///
/// Keep the returned guard alive for the life of the process or buffered
/// file lines are lost.
pub fn init_logger(
    sdk_logger_provider: &SdkLoggerProvider,
    options: &LogOptions,
) -> Option<WorkerGuard> {
    let (file_layer, guard) = if options.file_log {
        let file_name = format!("storefront_{}.log", options.component);
        let appender = RollingFileAppender::new(Rotation::DAILY, options.log_dir(), file_name);
        let (writer, guard) = non_blocking(appender);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let default_console = if options.dev_mode { "info" } else { "off" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_console));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let otel_layer = OpenTelemetryTracingBridge::new(sdk_logger_provider)
        .with_filter(EnvFilter::new(OTEL_FILTER));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}
