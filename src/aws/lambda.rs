//! Lambda function inventory

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_lambda::types::{FunctionConfiguration, FunctionVersion};
use aws_sdk_lambda::Client;
use tracing::debug;

/// List the region's Lambda functions, all versions included.
///
/// Functions without a VPC config carry no group references and can
/// never match a group.
pub async fn list_functions(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .list_functions()
        .function_version(FunctionVersion::All)
        .send()
        .await
        .map_err(|e| api_error("list Lambda functions", e))?;

    let descriptors: Vec<_> = response
        .functions()
        .iter()
        .filter_map(function_descriptor)
        .collect();

    debug!(count = descriptors.len(), "Found Lambda functions");
    Ok(descriptors)
}

/// Normalize one function; name and id are both the function name.
fn function_descriptor(function: &FunctionConfiguration) -> Option<ResourceDescriptor> {
    let name = function.function_name()?.to_string();
    let security_groups = function
        .vpc_config()
        .map(|vpc| vpc.security_group_ids().to_vec())
        .unwrap_or_default();

    Some(ResourceDescriptor {
        kind: ResourceKind::LambdaFunction,
        name: name.clone(),
        id: name,
        security_groups,
    })
}
