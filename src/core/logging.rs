//! Global log verbosity as an explicit initialization step.
//!
//! Nothing here runs at load time: the process entry point decides when (and
//! whether) to install the subscriber, so tests can control verbosity per run.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::core::error::{Result, SettingsError};

/// The two verbosity toggles the backend exposes.
///
/// `debug` selects this crate's own log level, `verbose` widens logging to
/// the libraries it drives (notably sqlx statement logging). Both default to
/// on, matching the backend's historical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_on")]
    pub debug: bool,
    #[serde(default = "default_on")]
    pub verbose: bool,
}

fn default_on() -> bool {
    true
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            debug: true,
            verbose: true,
        }
    }
}

impl LogSettings {
    /// The `EnvFilter` directive string these toggles map onto.
    ///
    /// [`init`](Self::init) layers these on top of `RUST_LOG`, replacing any
    /// same-target `RUST_LOG` entry. `RUST_LOG` still applies to targets not
    /// named here.
    pub fn directives(&self) -> String {
        let base = if self.verbose { "info" } else { "warn" };
        let crate_level = if self.debug { "debug" } else { "info" };
        let mut directives = format!("{base},ragserver_settings={crate_level}");
        if self.verbose {
            directives.push_str(",sqlx=debug");
        }
        directives
    }

    /// Install a stderr subscriber filtered by these settings.
    ///
    /// Returns an error instead of panicking when a global subscriber is
    /// already set, so calling this again (as tests do) is harmless.
    pub fn init(&self) -> Result<()> {
        let mut filter = EnvFilter::from_default_env();
        for directive in self.directives().split(',') {
            let parsed = directive
                .parse()
                .map_err(|e| SettingsError::Logging(format!("bad directive {directive:?}: {e}")))?;
            filter = filter.add_directive(parsed);
        }

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()
            .map_err(|e| SettingsError::Logging(e.to_string()))
    }
}
