//! Diagnostics setup for generator processes that embed this crate.
//!
//! The crate emits one `info` line per discovery pass naming the tests source,
//! `debug` events per skipped or deferred member, and a `trace` event per
//! deferred invocation. [`Verbosity::Normal`] is the lowest level that still
//! shows the per-pass line.
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "gen_from_tests";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only; the per-pass source line is hidden
    Quiet,
    /// One line per discovery pass
    Normal,
    /// Adds per-member discovery events
    Verbose,
    /// Adds one event per deferred invocation
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter enabling this crate's events at this verbosity, ignoring `RUST_LOG`.
    pub fn filter(self) -> EnvFilter {
        EnvFilter::new(format!("{LOG_TARGET}={}", self.level()))
    }
}

/// Build a subscriber writing compact, uncoloured lines to `writer`.
///
/// Usable with `tracing::subscriber::with_default` to scope diagnostics to a
/// single generation run.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .compact()
        .finish()
}

/// Install the global subscriber on stderr. `RUST_LOG` takes precedence over `verbosity`.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity.filter());

    if tracing::subscriber::set_global_default(subscriber(filter, std::io::stderr)).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
