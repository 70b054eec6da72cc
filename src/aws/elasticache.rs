//! ElastiCache cluster inventory

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_elasticache::types::CacheCluster;
use aws_sdk_elasticache::Client;
use tracing::debug;

/// List the region's ElastiCache clusters.
pub async fn list_cache_clusters(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .describe_cache_clusters()
        .send()
        .await
        .map_err(|e| api_error("describe ElastiCache clusters", e))?;

    let descriptors: Vec<_> = response
        .cache_clusters()
        .iter()
        .filter_map(cache_cluster_descriptor)
        .collect();

    debug!(count = descriptors.len(), "Found ElastiCache clusters");
    Ok(descriptors)
}

/// Normalize one cache cluster; name and id are both the cluster id.
fn cache_cluster_descriptor(cluster: &CacheCluster) -> Option<ResourceDescriptor> {
    let id = cluster.cache_cluster_id()?.to_string();
    let security_groups = cluster
        .security_groups()
        .iter()
        .filter_map(|m| m.security_group_id())
        .map(str::to_string)
        .collect();

    Some(ResourceDescriptor {
        kind: ResourceKind::ElasticacheCluster,
        name: id.clone(),
        id,
        security_groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_elasticache::types::SecurityGroupMembership;

    #[test]
    fn test_descriptor_reads_security_group_memberships() {
        let cluster = CacheCluster::builder()
            .cache_cluster_id("sessions-redis")
            .security_groups(
                SecurityGroupMembership::builder()
                    .security_group_id("sg-1")
                    .status("active")
                    .build(),
            )
            .build();

        let d = cache_cluster_descriptor(&cluster).unwrap();
        assert_eq!(d.kind, ResourceKind::ElasticacheCluster);
        assert_eq!(d.name, "sessions-redis");
        assert_eq!(d.security_groups, vec!["sg-1"]);
    }
}
