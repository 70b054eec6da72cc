//! Shared utilities for AWS integration tests

/// Region the integration tests run against.
///
/// `AWS_REGION` wins, then `AWS_DEFAULT_REGION`, then us-east-2.
pub fn get_test_region() -> String {
    std::env::var("AWS_REGION")
        .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|_| "us-east-2".to_string())
}
