pub const TEST_API_TOKEN: &str = "test-qnas-token";
pub const TEST_API_DOMAIN: &str = "charity.test";
pub const TEST_USER_AGENT: &str = "unwan-tests/0.1";
