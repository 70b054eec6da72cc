//! RDS database instance inventory

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_rds::types::DbInstance;
use aws_sdk_rds::Client;
use tracing::debug;

/// List the region's RDS database instances.
pub async fn list_db_instances(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .describe_db_instances()
        .send()
        .await
        .map_err(|e| api_error("describe RDS instances", e))?;

    let descriptors: Vec<_> = response
        .db_instances()
        .iter()
        .filter_map(db_instance_descriptor)
        .collect();

    debug!(count = descriptors.len(), "Found RDS instances");
    Ok(descriptors)
}

/// Normalize one database; name and id are both the instance identifier.
/// Group references come from the VPC security group memberships.
fn db_instance_descriptor(db: &DbInstance) -> Option<ResourceDescriptor> {
    let id = db.db_instance_identifier()?.to_string();
    let security_groups = db
        .vpc_security_groups()
        .iter()
        .filter_map(|m| m.vpc_security_group_id())
        .map(str::to_string)
        .collect();

    Some(ResourceDescriptor {
        kind: ResourceKind::RdsInstance,
        name: id.clone(),
        id,
        security_groups,
    })
}
