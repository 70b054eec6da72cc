//! Application and network load balancer inventory

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_elasticloadbalancingv2::types::LoadBalancer;
use aws_sdk_elasticloadbalancingv2::Client;
use tracing::debug;

/// List the region's v2 (application and network) load balancers.
pub async fn list_load_balancers(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .describe_load_balancers()
        .send()
        .await
        .map_err(|e| api_error("describe load balancers", e))?;

    let descriptors: Vec<_> = response
        .load_balancers()
        .iter()
        .filter_map(load_balancer_descriptor)
        .collect();

    debug!(count = descriptors.len(), "Found load balancers");
    Ok(descriptors)
}

/// Normalize one v2 load balancer.
///
/// The report shows the final path segment of the ARN for both name and
/// id, not the full ARN.
fn load_balancer_descriptor(lb: &LoadBalancer) -> Option<ResourceDescriptor> {
    let short = arn_short_id(lb.load_balancer_arn()?).to_string();

    Some(ResourceDescriptor {
        kind: ResourceKind::LoadBalancer,
        name: short.clone(),
        id: short,
        security_groups: lb.security_groups().to_vec(),
    })
}

/// Final `/`-separated segment of a load balancer ARN.
fn arn_short_id(arn: &str) -> &str {
    arn.rsplit('/').next().unwrap_or(arn)
}
