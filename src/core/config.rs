//! Store connection settings.
//!
//! Settings are plain values handed to the store constructor; nothing is
//! read from process-global state after startup.

use crate::core::constants::DESCRIBE_PAGE_SIZE;

/// How to reach the parameter store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Explicit region. Overrides the AWS provider chain when set.
    pub region: Option<String>,
    /// Custom service endpoint, e.g. a LocalStack URL.
    pub endpoint_url: Option<String>,
    /// Page size for DescribeParameters, between 1 and 50.
    pub page_size: i32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            page_size: DESCRIBE_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    pub fn new(region: Option<String>) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn with_endpoint_url(mut self, url: Option<String>) -> Self {
        self.endpoint_url = url;
        self
    }

    /// The region the user asked for, ignoring blank values.
    pub fn explicit_region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// The endpoint override, ignoring blank values.
    pub fn explicit_endpoint(&self) -> Option<&str> {
        self.endpoint_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}
