//! Test-vector case generation from test functions.
//!
//! Scans a tests source for functions named `test_*` and turns each one into a
//! lazily produced [`TestCase`] whose deferred call runs the function in
//! generator mode against a fixed fork and BLS setting.
pub mod case;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;

pub use case::{test_fn, CaseArgs, CaseKey, DeferredCase, TestCase, TestFn, SUITE_NAME};
pub use config::GeneratorConfig;
pub use discovery::{generate, generate_from_tests, Cases, Member, TestModule, TestSource};
pub use error::{ConfigError, DiscoveryError, Error, Result};
