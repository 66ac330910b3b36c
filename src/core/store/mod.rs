//! Parameter store backends.
//!
//! The scan talks to the store only through the [`ParameterStore`] trait,
//! so the same enumeration and search logic runs against AWS Systems
//! Manager or an in-memory snapshot.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::types::{Page, ParameterMetadata, ParameterType, ParameterValue};
use crate::error::StoreError;

mod memory;
mod ssm;

pub use memory::MemoryStore;
pub use ssm::SsmStore;

/// Blocking access to a hierarchical key-value parameter store.
///
/// All paged operations take the continuation token of the previous
/// response (`None` for the first page) and return the next one in
/// [`Page::next_token`].
pub trait ParameterStore {
    /// One page of metadata for parameters whose type is in `types`.
    fn describe_parameters(
        &self,
        types: &[ParameterType],
        next_token: Option<&str>,
    ) -> Result<Page<ParameterMetadata>, StoreError>;

    /// Read a single parameter, decrypting secure values.
    fn get_parameter(&self, name: &str) -> Result<ParameterValue, StoreError>;

    /// One page of every parameter below `path`, recursively, decrypted.
    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<Page<ParameterValue>, StoreError>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for Box<S> {
    fn describe_parameters(
        &self,
        types: &[ParameterType],
        next_token: Option<&str>,
    ) -> Result<Page<ParameterMetadata>, StoreError> {
        (**self).describe_parameters(types, next_token)
    }

    fn get_parameter(&self, name: &str) -> Result<ParameterValue, StoreError> {
        (**self).get_parameter(name)
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<Page<ParameterValue>, StoreError> {
        (**self).get_parameters_by_path(path, next_token)
    }
}
