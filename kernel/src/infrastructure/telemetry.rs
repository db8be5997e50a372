use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Builder for setting up logging.
///
/// Log lines go to stderr so stdout only carries the patch.
pub struct TelemetryBuilder {
    service_name: String,
    service_version: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder with the `warn` level and plain text output.
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            log_level: "warn".to_string(),
            json: false,
        }
    }

    /// Sets the filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches log lines to JSON.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Returns the filter directive that will be used without `RUST_LOG`.
    #[must_use]
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured log level is not a valid filter directive
    /// - A global subscriber is already installed
    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("Invalid log level '{}'", self.log_level))?,
        };

        let fmt_layer = if self.json {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        debug!(
            service = %self.service_name,
            version = %self.service_version,
            "telemetry initialized"
        );
        Ok(())
    }
}
