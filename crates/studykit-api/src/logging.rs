//! Logging configuration for studykit
//!
//! Installs a `tracing` subscriber for the events emitted by the store and
//! the arithmetic helpers. Output can go to stdout, a daily-rotated file,
//! or both.

use std::path::{Path, PathBuf};
use studykit_core::{Error, Result};
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_LOG_FILE: &str = "studykit.log";

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stdout
    Stdout,
    /// Output to a file with rotation
    File(PathBuf),
    /// Output to both stdout and file
    Both(PathBuf),
}

/// Log format style
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// Human-readable multi-line format (default)
    Pretty,
    /// Compact single-line format
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter, overridden by `RUST_LOG` when set
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Stdout,
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Create config with info level and stdout output
    pub fn info() -> Self {
        Self::default()
    }

    /// Create config with debug level
    pub fn debug() -> Self {
        Self::default().with_level("debug")
    }

    /// Create config with warn level
    pub fn warn() -> Self {
        Self::default().with_level("warn")
    }

    /// Set log output to file with rotation
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stdout and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Build the level filter, preferring `RUST_LOG` over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => self.level_filter(),
        }
    }

    /// Build the level filter from the configured level only
    pub fn level_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| Error::InvalidInput(format!("log level {:?}: {}", self.level, e)))
    }

    /// Returns whether stdout is written and which file, if any
    pub fn destinations(&self) -> (bool, Option<&Path>) {
        match &self.output {
            LogOutput::Stdout => (true, None),
            LogOutput::File(path) => (false, Some(path.as_path())),
            LogOutput::Both(path) => (true, Some(path.as_path())),
        }
    }

    /// Initialize global logging with this configuration
    ///
    /// Every destination uses the configured format. Returns a guard when
    /// logging to a file; keep it alive for as long as logs should be
    /// written, dropping it shuts down the writer thread.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidInput` if the level filter cannot be parsed
    /// - `Error::LoggingInit` if a global subscriber is already installed
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use studykit::logging::LogConfig;
    ///
    /// let _guard = LogConfig::debug().init()?;
    /// # Ok::<(), studykit::Error>(())
    /// ```
    pub fn init(self) -> Result<Option<WorkerGuard>> {
        let env_filter = self.env_filter()?;
        let (to_stdout, file) = self.destinations();
        let (file_writer, guard) = match file.map(file_writer) {
            Some((writer, guard)) => (Some(writer), Some(guard)),
            None => (None, None),
        };

        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
        if to_stdout {
            layers.push(format_layer(self.format, std::io::stdout, true));
        }
        if let Some(writer) = file_writer {
            layers.push(format_layer(self.format, writer, false));
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(env_filter)
            .try_init()
            .map_err(|e| Error::LoggingInit(e.to_string()))?;

        Ok(guard)
    }
}

/// Build one fmt layer in the requested format
fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn file_writer(path: &Path) -> (NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_LOG_FILE),
    );
    tracing_appender::non_blocking(file_appender)
}
