//! Test case descriptors and the deferred calls they carry.
//!
//! A descriptor pairs identification metadata (runner, handler, suite, case,
//! fork) with a [`DeferredCase`]: the discovered test function together with
//! the exact arguments it will be called with. Arguments are captured by value
//! when the descriptor is built, so a descriptor invoked long after discovery
//! sees the same parameters it was created with.
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Suite label shared by every case produced from test functions.
pub const SUITE_NAME: &str = "pyspec_tests";

/// A discovered test function.
///
/// Errors returned by the function are never inspected here; they travel back
/// to whoever invokes the deferred case.
pub type TestFn<O> = Arc<dyn Fn(&CaseArgs) -> anyhow::Result<O> + Send + Sync>;

/// Wrap a closure or function item as a [`TestFn`].
pub fn test_fn<O, F>(f: F) -> TestFn<O>
where
    F: Fn(&CaseArgs) -> anyhow::Result<O> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Arguments handed to a test function in generator mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseArgs {
    /// Produce test-vector output instead of running plain assertions
    pub generator_mode: bool,

    /// Fork the test runs against
    pub phase: String,

    /// Whether BLS signature verification is active
    pub bls_active: bool,
}

impl CaseArgs {
    /// Arguments for a generated case: generator mode is always on.
    pub fn generation(phase: impl Into<String>, bls_active: bool) -> Self {
        Self {
            generator_mode: true,
            phase: phase.into(),
            bls_active,
        }
    }
}

/// Zero-argument deferred invocation of a test function.
pub struct DeferredCase<O> {
    target: TestFn<O>,
    args: CaseArgs,
}

impl<O> DeferredCase<O> {
    pub fn new(target: TestFn<O>, args: CaseArgs) -> Self {
        Self { target, args }
    }

    /// The arguments fixed at creation time.
    pub fn args(&self) -> &CaseArgs {
        &self.args
    }

    /// Call the wrapped test function with the captured arguments.
    pub fn invoke(&self) -> anyhow::Result<O> {
        tracing::trace!(
            phase = %self.args.phase,
            bls_active = self.args.bls_active,
            "invoking deferred case"
        );
        (self.target)(&self.args)
    }
}

impl<O> Clone for DeferredCase<O> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            args: self.args.clone(),
        }
    }
}

impl<O> fmt::Debug for DeferredCase<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredCase")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Identification of a case, used by vector writers as a hierarchical key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseKey {
    pub fork_name: String,
    pub runner_name: String,
    pub handler_name: String,
    pub suite_name: String,
    pub case_name: String,
}

impl CaseKey {
    /// Key path from the most general label to the case itself.
    pub fn path_segments(&self) -> [&str; 4] {
        [
            self.runner_name.as_str(),
            self.handler_name.as_str(),
            self.suite_name.as_str(),
            self.case_name.as_str(),
        ]
    }
}

impl fmt::Display for CaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segments().join("/"))
    }
}

/// A single generated test case. Immutable once built.
pub struct TestCase<O> {
    fork_name: String,
    runner_name: String,
    handler_name: String,
    suite_name: &'static str,
    case_name: String,
    case_fn: DeferredCase<O>,
}

impl<O> TestCase<O> {
    pub(crate) fn new(
        fork_name: String,
        runner_name: String,
        handler_name: String,
        case_name: String,
        case_fn: DeferredCase<O>,
    ) -> Self {
        Self {
            fork_name,
            runner_name,
            handler_name,
            suite_name: SUITE_NAME,
            case_name,
            case_fn,
        }
    }

    pub fn fork_name(&self) -> &str {
        &self.fork_name
    }

    pub fn runner_name(&self) -> &str {
        &self.runner_name
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    pub fn suite_name(&self) -> &str {
        self.suite_name
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn case_fn(&self) -> &DeferredCase<O> {
        &self.case_fn
    }

    /// Shorthand for `case_fn().invoke()`.
    pub fn run(&self) -> anyhow::Result<O> {
        self.case_fn.invoke()
    }

    pub fn key(&self) -> CaseKey {
        CaseKey {
            fork_name: self.fork_name.clone(),
            runner_name: self.runner_name.clone(),
            handler_name: self.handler_name.clone(),
            suite_name: self.suite_name.to_string(),
            case_name: self.case_name.clone(),
        }
    }
}

impl<O> Clone for TestCase<O> {
    fn clone(&self) -> Self {
        Self {
            fork_name: self.fork_name.clone(),
            runner_name: self.runner_name.clone(),
            handler_name: self.handler_name.clone(),
            suite_name: self.suite_name,
            case_name: self.case_name.clone(),
            case_fn: self.case_fn.clone(),
        }
    }
}

impl<O> fmt::Debug for TestCase<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("fork_name", &self.fork_name)
            .field("runner_name", &self.runner_name)
            .field("handler_name", &self.handler_name)
            .field("suite_name", &self.suite_name)
            .field("case_name", &self.case_name)
            .field("case_fn", &self.case_fn)
            .finish()
    }
}
