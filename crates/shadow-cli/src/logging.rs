//! Tracing subscriber setup for the `shadow` binary

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use crate::error::{CliError, Result};

/// Crate whose events carry per-operation propagation tracing.
const PROPAGATION_TARGET: &str = "shadow_content";

/// Handle for adjusting the installed filter after the config is known.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// Default directives, or `None` when `RUST_LOG` is in control.
    base: Option<String>,
}

impl LogHandle {
    /// Let propagation debug and trace events through.
    ///
    /// A filter set through `RUST_LOG` is left alone.
    pub fn enable_trace(&self) -> Result<()> {
        let Some(base) = &self.base else {
            return Ok(());
        };
        let filter = EnvFilter::try_new(format!("{base},{PROPAGATION_TARGET}=trace"))
            .map_err(|e| CliError::user(format!("Invalid log filter: {e}")))?;
        self.filter
            .reload(filter)
            .map_err(|e| CliError::user(format!("Failed to update log filter: {e}")))
    }
}

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `--verbose`.
pub fn init(verbose: bool) -> Result<LogHandle> {
    let default_level = if verbose { "debug" } else { "info" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let (filter, base) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => (
            EnvFilter::try_new(default_level)
                .map_err(|e| CliError::user(format!("Invalid log filter: {e}")))?,
            Some(default_level.to_string()),
        ),
    };
    let (filter_layer, filter) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;

    tracing::debug!("Verbose mode enabled");
    Ok(LogHandle { filter, base })
}
