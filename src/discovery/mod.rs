pub mod filter;
pub mod generate;
pub mod source;

pub use filter::{is_test_name, TEST_PREFIX};
pub use generate::{generate, generate_from_tests, Cases};
pub use source::{Member, TestModule, TestSource};
