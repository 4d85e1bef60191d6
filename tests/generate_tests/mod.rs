//! Generation tests
//!
//! ## Structure
//! - `test_utils` - Shared sources and recording test functions
//! - `discovery` - Which members become cases, and in what order
//! - `deferral` - What a deferred case passes to and returns from its test function
//! - `config` - Config-driven generation
//! - `diagnostics` - The per-pass source line and verbosity levels

pub mod test_utils;
