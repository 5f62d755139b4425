use crate::abstract_trait::BackendHealthTrait;
use anyhow::{Context as _, Result};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use reqwest::{Method as HttpMethod, RequestBuilder, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::{
    errors::{ClientError, extract_error_message},
    utils::{HeaderInjector, Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info};

/// Shared HTTP core for every call to the AussieEat API.
///
/// Each call gets its own client span, the trace context is propagated in the
/// request headers and the outcome is counted in [`Metrics`]. Nothing is retried.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    metrics: Metrics,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration, metrics: Metrics) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build backend http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            metrics,
        })
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("storefront-backend-client")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn inject_trace_context(&self, cx: &Context) -> HeaderMap {
        let mut headers = HeaderMap::new();
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(cx, &mut HeaderInjector(&mut headers))
        });
        headers
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    pub async fn get<T>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let builder = self.http.get(self.url(path)).query(query);
        self.execute(operation, HttpMethod::GET, path, builder, fallback)
            .await
    }

    pub async fn send_json<B, T>(
        &self,
        operation: &str,
        method: HttpMethod,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.http.request(method.clone(), self.url(path)).json(body);
        self.execute(operation, method, path, builder, fallback).await
    }

    async fn execute<T>(
        &self,
        operation: &str,
        method: HttpMethod,
        path: &str,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let metric_method = Method::from(&method);
        let tracing_ctx = self.start_tracing(
            operation,
            vec![
                KeyValue::new("component", "backend"),
                KeyValue::new("http.method", method.to_string()),
                KeyValue::new("http.path", path.to_string()),
            ],
        );

        let headers = self.inject_trace_context(&tracing_ctx.cx);

        let response = match builder.headers(headers).send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ClientError::from(err);
                self.complete_tracing(&tracing_ctx, metric_method, false, &err.to_string());
                return Err(err);
            }
        };

        let status = response.status();

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = extract_error_message(&body, fallback);
            self.complete_tracing(
                &tracing_ctx,
                metric_method,
                false,
                &format!("{operation} returned {status}: {message}"),
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<T>().await {
            Ok(data) => {
                self.complete_tracing(
                    &tracing_ctx,
                    metric_method,
                    true,
                    &format!("{operation} returned {status}"),
                );
                Ok(data)
            }
            Err(err) => {
                let err = ClientError::Decode(err.to_string());
                self.complete_tracing(&tracing_ctx, metric_method, false, &err.to_string());
                Err(err)
            }
        }
    }
}

#[async_trait]
impl BackendHealthTrait for BackendClient {
    async fn health(&self) -> Result<Value, ClientError> {
        self.get("BackendHealth", "/api/health", &[], "Backend unhealthy")
            .await
    }
}
