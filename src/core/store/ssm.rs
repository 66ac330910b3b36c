//! AWS Systems Manager Parameter Store backend.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.)
//! or from the default credential provider chain.
//!
//! The SDK is async; the store owns a single-threaded tokio runtime and
//! blocks on every request, so exactly one request is in flight at a time.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::{ParametersFilter, ParametersFilterKey};
use aws_sdk_ssm::Client;
use tracing::{debug, trace, warn};

use super::ParameterStore;
use crate::core::config::StoreConfig;
use crate::core::constants::DEFAULT_REGION;
use crate::core::types::{Page, ParameterMetadata, ParameterType, ParameterValue};
use crate::error::StoreError;

/// Parameter store client backed by `aws-sdk-ssm`.
pub struct SsmStore {
    runtime: tokio::runtime::Runtime,
    client: Client,
    page_size: i32,
}

impl SsmStore {
    /// Build a client from explicit settings.
    ///
    /// Region resolution: `config.region`, then the AWS provider chain
    /// (`AWS_REGION`, profile, instance metadata), then `sa-east-1`.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let client = runtime.block_on(async {
            let explicit = config
                .explicit_region()
                .map(|r| Region::new(r.to_string()));
            let region = RegionProviderChain::first_try(explicit)
                .or_default_provider()
                .or_else(DEFAULT_REGION);

            let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
            if let Some(url) = config.explicit_endpoint() {
                loader = loader.endpoint_url(url);
            }
            let sdk_config = loader.load().await;

            debug!(
                region = ?sdk_config.region(),
                endpoint = ?config.explicit_endpoint(),
                "connected to parameter store"
            );
            Client::new(&sdk_config)
        });

        Ok(Self {
            runtime,
            client,
            page_size: config.page_size,
        })
    }
}

impl ParameterStore for SsmStore {
    fn describe_parameters(
        &self,
        types: &[ParameterType],
        next_token: Option<&str>,
    ) -> Result<Page<ParameterMetadata>, StoreError> {
        let filter = ParametersFilter::builder()
            .key(ParametersFilterKey::Type)
            .set_values(Some(types.iter().map(|t| t.as_str().to_string()).collect()))
            .build()
            .map_err(|e| StoreError::Describe(e.to_string()))?;

        trace!(has_token = next_token.is_some(), "describe parameters");
        let response = self
            .runtime
            .block_on(
                self.client
                    .describe_parameters()
                    .filters(filter)
                    .max_results(self.page_size)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::Describe(DisplayErrorContext(&e).to_string()))?;

        let items = response
            .parameters()
            .iter()
            .filter_map(|meta| {
                let name = meta.name()?;
                match meta.r#type().and_then(|t| ParameterType::parse(t.as_str())) {
                    Some(kind) => Some(ParameterMetadata::new(name, kind)),
                    None => {
                        warn!(param = name, "skipping parameter with unknown type");
                        None
                    }
                }
            })
            .collect();

        Ok(Page::new(items, response.next_token().map(str::to_string)))
    }

    fn get_parameter(&self, name: &str) -> Result<ParameterValue, StoreError> {
        trace!(param = name, "get parameter");
        let response = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| StoreError::Get {
                name: name.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let value = response
            .parameter()
            .and_then(|p| p.value())
            .ok_or_else(|| StoreError::NoValue(name.to_string()))?;

        Ok(ParameterValue::new(name, value))
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<Page<ParameterValue>, StoreError> {
        trace!(path, has_token = next_token.is_some(), "get parameters by path");
        let response = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(path)
                    .recursive(true)
                    .with_decryption(true)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::GetByPath {
                path: path.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let items = response
            .parameters()
            .iter()
            .filter_map(|p| Some(ParameterValue::new(p.name()?, p.value()?)))
            .collect();

        Ok(Page::new(items, response.next_token().map(str::to_string)))
    }
}
