use super::{ChartError, ConfigError, FeedError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for FeedError {
    fn from(message: &'static str) -> Self {
        FeedError::TestExpectation { message }
    }
}

impl From<String> for FeedError {
    fn from(value: String) -> Self {
        FeedError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ChartError {
    fn from(message: &'static str) -> Self {
        ChartError::TestExpectation { message }
    }
}

impl From<String> for ChartError {
    fn from(value: String) -> Self {
        ChartError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
