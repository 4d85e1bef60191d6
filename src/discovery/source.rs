use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::case::{test_fn, CaseArgs, TestFn};
use crate::error::DiscoveryError;

/// Something that can be scanned for test functions.
pub trait TestSource<O> {
    /// Label used in diagnostics. `None` for anonymous sources.
    fn name(&self) -> Option<&str>;

    /// Enumerate every top-level member, in the order discovery should report them.
    fn members(&self) -> Result<Vec<(String, Member<O>)>, DiscoveryError>;
}

/// A named entry of a tests source.
pub enum Member<O> {
    Function(TestFn<O>),
    Value(serde_json::Value),
    Namespace(TestModule<O>),
}

impl<O> Member<O> {
    pub fn as_function(&self) -> Option<&TestFn<O>> {
        match self {
            Member::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Member::Function(_) => "function",
            Member::Value(_) => "value",
            Member::Namespace(_) => "namespace",
        }
    }
}

impl<O> Clone for Member<O> {
    fn clone(&self) -> Self {
        match self {
            Member::Function(f) => Member::Function(Arc::clone(f)),
            Member::Value(v) => Member::Value(v.clone()),
            Member::Namespace(m) => Member::Namespace(m.clone()),
        }
    }
}

impl<O> fmt::Debug for Member<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Function(_) => f.write_str("Function(..)"),
            Member::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Member::Namespace(m) => f.debug_tuple("Namespace").field(m).finish(),
        }
    }
}

/// In-memory tests module: a name → member registry.
///
/// Members are kept sorted by name, so enumeration is lexicographic and
/// registering the same name twice replaces the earlier member.
pub struct TestModule<O> {
    name: Option<String>,
    members: BTreeMap<String, Member<O>>,
}

impl<O> TestModule<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            members: BTreeMap::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: None,
            members: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, member: Member<O>) {
        self.members.insert(name.into(), member);
    }

    pub fn with_fn<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&CaseArgs) -> anyhow::Result<O> + Send + Sync + 'static,
    {
        self.register(name, Member::Function(test_fn(f)));
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.register(name, Member::Value(value));
        self
    }

    pub fn with_namespace(mut self, name: impl Into<String>, namespace: TestModule<O>) -> Self {
        self.register(name, Member::Namespace(namespace));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Member<O>> {
        self.members.get(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<O> TestSource<O> for TestModule<O> {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn members(&self) -> Result<Vec<(String, Member<O>)>, DiscoveryError> {
        Ok(self
            .members
            .iter()
            .map(|(name, member)| (name.clone(), member.clone()))
            .collect())
    }
}

impl<O> Clone for TestModule<O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            members: self.members.clone(),
        }
    }
}

impl<O> fmt::Debug for TestModule<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestModule")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}
