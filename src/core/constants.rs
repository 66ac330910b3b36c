//! Constants used throughout paramscan.
//!
//! Centralizes magic strings and configuration values.

use crate::core::types::ParameterType;

/// Region used when neither `--region` nor the AWS provider chain yields one.
pub const DEFAULT_REGION: &str = "sa-east-1";

/// Largest page DescribeParameters accepts.
pub const DESCRIBE_PAGE_SIZE: i32 = 50;

/// Parameter types the scan enumerates.
pub const SEARCHABLE_TYPES: &[ParameterType] =
    &[ParameterType::String, ParameterType::SecureString];

/// Separator of hierarchical parameter names.
pub const PATH_SEPARATOR: char = '/';

/// Default pause before each direct (non-path) lookup, in milliseconds.
pub const DEFAULT_PAUSE_MS: u64 = 100;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PARAMSCAN_LOG";
