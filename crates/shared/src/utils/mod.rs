mod headers;
mod logs;
mod metrics;
mod order_code;
mod otel;
mod parse_datetime;
mod shutdown;

pub use self::headers::HeaderInjector;
pub use self::logs::{LogOptions, init_logger};
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::order_code::{generate_order_code, generate_order_code_at};
pub use self::otel::{Telemetry, TelemetryProviders, TracingContext};
pub use self::parse_datetime::{parse_optional_order_timestamp, parse_order_timestamp};
pub use self::shutdown::shutdown_signal;
