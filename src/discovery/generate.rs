use std::iter::FusedIterator;

use tracing::{debug, info};

use crate::case::{CaseArgs, DeferredCase, TestCase, TestFn};
use crate::config::{GeneratorConfig, DEFAULT_BLS_ACTIVE};
use crate::discovery::filter::is_test_name;
use crate::discovery::source::{Member, TestSource};
use crate::error::{DiscoveryError, Result};

const UNNAMED_SOURCE: &str = "<unnamed>";

/// Discover the test functions of `src` and defer each one as a test case.
///
/// `bls_active` defaults to `true` when `None`. `fork_name` becomes the
/// `phase` argument of every deferred call.
pub fn generate<O, S>(
    runner_name: &str,
    handler_name: &str,
    src: &S,
    fork_name: &str,
    bls_active: Option<bool>,
) -> Result<Cases<O>>
where
    S: TestSource<O> + ?Sized,
{
    let config = GeneratorConfig::new(runner_name, handler_name, fork_name)
        .with_bls_active(bls_active.unwrap_or(DEFAULT_BLS_ACTIVE));
    generate_from_tests(&config, src)
}

/// Same as [`generate`], with the batch parameters taken from a config.
///
/// Candidates are snapshotted before returning, so the returned iterator
/// does not borrow `src`. Invalid configs and introspection failures are
/// reported here, before a single case is produced.
pub fn generate_from_tests<O, S>(config: &GeneratorConfig, src: &S) -> Result<Cases<O>>
where
    S: TestSource<O> + ?Sized,
{
    config.validate()?;

    let candidates = discover(src)?;

    let source_name = match src.name() {
        Some(name) => name,
        None if config.require_source_name => {
            return Err(DiscoveryError::MissingSourceName.into());
        }
        None => UNNAMED_SOURCE,
    };

    info!("generating test vectors from tests source: {source_name}");

    Ok(Cases {
        runner_name: config.runner_name.clone(),
        handler_name: config.handler_name.clone(),
        fork_name: config.fork_name.clone(),
        bls_active: config.bls_active,
        candidates: candidates.into_iter(),
    })
}

fn discover<O, S>(src: &S) -> std::result::Result<Vec<(String, TestFn<O>)>, DiscoveryError>
where
    S: TestSource<O> + ?Sized,
{
    let candidates = src
        .members()?
        .into_iter()
        .filter_map(|(name, member)| match member {
            Member::Function(f) if is_test_name(&name) => Some((name, f)),
            other => {
                debug!(member = %name, kind = other.kind(), "skipping non-test member");
                None
            }
        })
        .collect::<Vec<_>>();

    debug!(count = candidates.len(), "discovered test functions");
    Ok(candidates)
}

/// Lazy sequence of test cases produced by one discovery pass.
///
/// Each case is built only when pulled. Dropping the iterator early leaves
/// nothing to clean up.
pub struct Cases<O> {
    runner_name: String,
    handler_name: String,
    fork_name: String,
    bls_active: bool,
    candidates: std::vec::IntoIter<(String, TestFn<O>)>,
}

impl<O> Cases<O> {
    fn defer(&self, case_name: String, target: TestFn<O>) -> TestCase<O> {
        let args = CaseArgs::generation(self.fork_name.clone(), self.bls_active);
        debug!(case = %case_name, "deferring test case");
        TestCase::new(
            self.fork_name.clone(),
            self.runner_name.clone(),
            self.handler_name.clone(),
            case_name,
            DeferredCase::new(target, args),
        )
    }
}

impl<O> Iterator for Cases<O> {
    type Item = TestCase<O>;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, target) = self.candidates.next()?;
        Some(self.defer(name, target))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl<O> std::fmt::Debug for Cases<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cases")
            .field("runner_name", &self.runner_name)
            .field("handler_name", &self.handler_name)
            .field("fork_name", &self.fork_name)
            .field("bls_active", &self.bls_active)
            .field("remaining", &self.candidates.len())
            .finish_non_exhaustive()
    }
}

impl<O> ExactSizeIterator for Cases<O> {}

impl<O> FusedIterator for Cases<O> {}
