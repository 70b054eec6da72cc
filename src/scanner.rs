//! Security-group attachment scan
//!
//! Fetches each resource-family inventory for the region once, then
//! walks the security groups and records which resources reference each
//! group. EC2 instances are the exception: they are queried per group
//! with a server-side filter instead of being fetched up front.

use crate::attachments::{AttachmentIndex, ResourceDescriptor, ResourceKind, SecurityGroup};
use crate::aws::context::AwsContext;
use crate::aws::{ec2, efs, eks, elasticache, elb, elbv2, lambda, rds};
use anyhow::Result;
use std::collections::HashSet;
use tracing::info;

/// Scanner for finding security-group attachments in one region
pub struct AttachmentScanner {
    ctx: AwsContext,
}

impl AttachmentScanner {
    /// Create a new scanner (loads AWS config from environment).
    pub async fn new(region: &str) -> Result<Self> {
        let ctx = AwsContext::new(region).await;
        Ok(Self::from_context(&ctx))
    }

    /// Create a scanner from a pre-loaded AWS context.
    pub fn from_context(ctx: &AwsContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    /// Run the full scan and return the populated attachment index.
    pub async fn scan(&self) -> Result<AttachmentIndex> {
        let ec2_client = self.ctx.ec2_client();
        let groups = ec2::list_security_groups(&ec2_client).await?;

        info!(
            region = %self.ctx.region(),
            groups = groups.len(),
            "Scanning security group attachments"
        );

        // Without groups there is nothing to match; skip the inventory
        // listings so a family-level permission problem cannot fail an
        // otherwise empty scan
        if groups.is_empty() {
            return Ok(AttachmentIndex::new());
        }

        // Family order is fixed; it decides row order within each group
        let inventories = [
            elb::list_load_balancers(&self.ctx.elb_client()).await?,
            elbv2::list_load_balancers(&self.ctx.elbv2_client()).await?,
            lambda::list_functions(&self.ctx.lambda_client()).await?,
            rds::list_db_instances(&self.ctx.rds_client()).await?,
            elasticache::list_cache_clusters(&self.ctx.elasticache_client()).await?,
            eks::list_clusters(&self.ctx.eks_client()).await?,
            efs::list_mount_targets(&self.ctx.efs_client()).await?,
        ];

        let mut index = AttachmentIndex::new();
        let mut seen_clusters = HashSet::new();

        for group in &groups {
            for instance in ec2::list_instances_in_group(&ec2_client, &group.id).await? {
                index.record(&instance);
            }
            record_matches(&inventories, group, &mut index, &mut seen_clusters);
        }

        info!(rows = index.len(), "Scan complete");
        Ok(index)
    }
}

/// Record every descriptor associated with `group` into the index.
///
/// A descriptor matches when it references the group id. EKS clusters
/// are the exception: each cluster is recorded exactly once per scan,
/// under the group being inspected when it is first seen.
fn record_matches(
    inventories: &[Vec<ResourceDescriptor>],
    group: &SecurityGroup,
    index: &mut AttachmentIndex,
    seen_clusters: &mut HashSet<String>,
) {
    for descriptor in inventories.iter().flatten() {
        let attached = match descriptor.kind {
            ResourceKind::EksCluster => seen_clusters.insert(descriptor.name.clone()),
            _ => descriptor.references(&group.id),
        };
        if attached {
            index.record(descriptor);
        }
    }
}
