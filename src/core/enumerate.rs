//! Parameter enumeration.

use tracing::debug;

use crate::core::constants::SEARCHABLE_TYPES;
use crate::core::pages::Pages;
use crate::core::store::ParameterStore;
use crate::core::types::{ParameterMetadata, ParameterType};
use crate::error::StoreError;

/// Lazily walk the metadata of every parameter whose type is in `types`.
pub fn parameters<'a, S: ParameterStore + ?Sized>(
    store: &'a S,
    types: &'a [ParameterType],
) -> impl Iterator<Item = Result<ParameterMetadata, StoreError>> + 'a {
    Pages::new(move |token: Option<&str>| store.describe_parameters(types, token))
}

/// Collect the metadata of every searchable parameter.
///
/// Any failed page aborts the enumeration; no partial list is returned.
pub fn list_parameters<S: ParameterStore + ?Sized>(
    store: &S,
) -> Result<Vec<ParameterMetadata>, StoreError> {
    let listed = parameters(store, SEARCHABLE_TYPES).collect::<Result<Vec<_>, _>>()?;
    debug!(count = listed.len(), "enumerated parameters");
    Ok(listed)
}
