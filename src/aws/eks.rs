//! EKS cluster inventory
//!
//! Cluster descriptors carry no group references. Group membership is
//! not evaluated for this family; the scan records each cluster once,
//! under whichever group is being inspected when it is first seen.

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_eks::Client;
use tracing::debug;

/// List the region's EKS clusters, resolving each name through a
/// describe call.
pub async fn list_clusters(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let response = client
        .list_clusters()
        .send()
        .await
        .map_err(|e| api_error("list EKS clusters", e))?;

    let mut descriptors = Vec::new();
    for name in response.clusters() {
        let described = client
            .describe_cluster()
            .name(name)
            .send()
            .await
            .map_err(|e| api_error("describe EKS cluster", e))?;

        let resolved = described
            .cluster()
            .and_then(|c| c.name())
            .unwrap_or(name)
            .to_string();

        descriptors.push(cluster_descriptor(resolved));
    }

    debug!(count = descriptors.len(), "Found EKS clusters");
    Ok(descriptors)
}

fn cluster_descriptor(name: String) -> ResourceDescriptor {
    ResourceDescriptor {
        kind: ResourceKind::EksCluster,
        name: name.clone(),
        id: name,
        security_groups: Vec::new(),
    }
}
