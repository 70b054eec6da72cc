//! EC2 inventory: security groups and per-group instance queries

use crate::attachments::{ResourceDescriptor, ResourceKind, SecurityGroup};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_ec2::types::{Filter, Instance};
use aws_sdk_ec2::Client;
use tracing::debug;

/// List the region's security groups.
pub async fn list_security_groups(client: &Client) -> Result<Vec<SecurityGroup>> {
    let response = client
        .describe_security_groups()
        .send()
        .await
        .map_err(|e| api_error("describe security groups", e))?;

    let groups: Vec<SecurityGroup> = response
        .security_groups()
        .iter()
        .filter_map(|sg| sg.group_id())
        .map(|id| SecurityGroup { id: id.to_string() })
        .collect();

    debug!(count = groups.len(), "Found security groups");
    Ok(groups)
}

/// List the instances that belong to the given security group.
///
/// Uses the server-side `instance.group-id` filter, so every instance in
/// the response is already a member of the group.
pub async fn list_instances_in_group(
    client: &Client,
    group_id: &str,
) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .describe_instances()
        .filters(
            Filter::builder()
                .name("instance.group-id")
                .values(group_id)
                .build(),
        )
        .send()
        .await
        .map_err(|e| api_error("describe instances", e))?;

    let mut descriptors = Vec::new();
    for reservation in response.reservations() {
        for instance in reservation.instances() {
            if let Some(d) = instance_descriptor(instance) {
                descriptors.push(d);
            }
        }
    }

    debug!(group_id = %group_id, count = descriptors.len(), "Found EC2 instances");
    Ok(descriptors)
}

/// Normalize one instance; both the report name and id are the instance id.
fn instance_descriptor(instance: &Instance) -> Option<ResourceDescriptor> {
    let id = instance.instance_id()?.to_string();
    let security_groups = instance
        .security_groups()
        .iter()
        .filter_map(|g| g.group_id())
        .map(str::to_string)
        .collect();

    Some(ResourceDescriptor {
        kind: ResourceKind::Ec2Instance,
        name: id.clone(),
        id,
        security_groups,
    })
}
