//! Shared helpers for generation tests

use std::sync::{Arc, Mutex};

use gen_from_tests::{CaseArgs, TestModule};
use serde_json::{json, Value};

/// Vector parts a test function yields in generator mode.
pub type Parts = Vec<(String, Value)>;

/// Records every argument set a test function was called with.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, CaseArgs)>>>);

impl CallLog {
    pub fn record(&self, name: &str, args: &CaseArgs) {
        self.0.lock().unwrap().push((name.to_string(), args.clone()));
    }

    pub fn calls(&self) -> Vec<(String, CaseArgs)> {
        self.0.lock().unwrap().clone()
    }
}

fn parts_for(name: &str, args: &CaseArgs) -> Parts {
    vec![
        ("case".to_string(), json!(name)),
        ("phase".to_string(), json!(args.phase)),
        ("bls_active".to_string(), json!(args.bls_active)),
    ]
}

/// Module with two test functions, one helper and a constant.
pub fn alpha_beta_module(log: &CallLog) -> TestModule<Parts> {
    let alpha_log = log.clone();
    let beta_log = log.clone();
    let helper_log = log.clone();

    TestModule::new("phase0.sanity.test_slots")
        .with_fn("test_alpha", move |args| {
            alpha_log.record("test_alpha", args);
            Ok(parts_for("test_alpha", args))
        })
        .with_fn("test_beta", move |args| {
            beta_log.record("test_beta", args);
            Ok(parts_for("test_beta", args))
        })
        .with_fn("helper", move |args| {
            helper_log.record("helper", args);
            Ok(parts_for("helper", args))
        })
        .with_value("SLOTS_PER_EPOCH", json!(32))
}

pub fn case_names<O>(cases: impl IntoIterator<Item = gen_from_tests::TestCase<O>>) -> Vec<String> {
    cases
        .into_iter()
        .map(|case| case.case_name().to_string())
        .collect()
}

/// In-memory log sink for scoped subscribers.
#[derive(Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
