//! Classic load balancer inventory

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_elasticloadbalancing::types::LoadBalancerDescription;
use aws_sdk_elasticloadbalancing::Client;
use tracing::debug;

/// List the region's classic load balancers.
pub async fn list_load_balancers(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .describe_load_balancers()
        .send()
        .await
        .map_err(|e| api_error("describe classic load balancers", e))?;

    let descriptors: Vec<_> = response
        .load_balancer_descriptions()
        .iter()
        .filter_map(load_balancer_descriptor)
        .collect();

    debug!(count = descriptors.len(), "Found classic load balancers");
    Ok(descriptors)
}

/// Normalize one classic load balancer; name and id are both the LB name.
fn load_balancer_descriptor(lb: &LoadBalancerDescription) -> Option<ResourceDescriptor> {
    let name = lb.load_balancer_name()?.to_string();

    Some(ResourceDescriptor {
        kind: ResourceKind::ClassicLoadBalancer,
        name: name.clone(),
        id: name,
        security_groups: lb.security_groups().to_vec(),
    })
}
