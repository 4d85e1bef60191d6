/// Name prefix marking a function as a test case.
pub const TEST_PREFIX: &str = "test_";

/// Whether `name` follows the test naming convention.
pub fn is_test_name(name: &str) -> bool {
    name.starts_with(TEST_PREFIX)
}
