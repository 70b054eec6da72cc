//! Shared AWS configuration context
//!
//! The scan talks to eight service APIs. `AwsContext` loads the SDK
//! config once and every service client is constructed from it, so the
//! credential chain is resolved a single time per run.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::sync::Arc;

/// Loaded AWS SDK configuration plus the target region.
///
/// Cheap to clone; all clones share the same underlying config.
#[derive(Clone)]
pub struct AwsContext {
    config: Arc<SdkConfig>,
    region: String,
}

impl AwsContext {
    /// Resolve credentials and settings through the default provider
    /// chain, pinned to the given region.
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            config: Arc::new(config),
            region: region.to_string(),
        }
    }

    /// Region this context was created for.
    pub fn region(&self) -> &str {
        &self.region
    }

    fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// EC2 client (security groups and instances).
    pub fn ec2_client(&self) -> aws_sdk_ec2::Client {
        aws_sdk_ec2::Client::new(self.config())
    }

    /// Classic (v1) Elastic Load Balancing client.
    pub fn elb_client(&self) -> aws_sdk_elasticloadbalancing::Client {
        aws_sdk_elasticloadbalancing::Client::new(self.config())
    }

    /// ELBv2 client (application and network load balancers).
    pub fn elbv2_client(&self) -> aws_sdk_elasticloadbalancingv2::Client {
        aws_sdk_elasticloadbalancingv2::Client::new(self.config())
    }

    /// Lambda client.
    pub fn lambda_client(&self) -> aws_sdk_lambda::Client {
        aws_sdk_lambda::Client::new(self.config())
    }

    /// RDS client.
    pub fn rds_client(&self) -> aws_sdk_rds::Client {
        aws_sdk_rds::Client::new(self.config())
    }

    /// ElastiCache client.
    pub fn elasticache_client(&self) -> aws_sdk_elasticache::Client {
        aws_sdk_elasticache::Client::new(self.config())
    }

    /// EKS client.
    pub fn eks_client(&self) -> aws_sdk_eks::Client {
        aws_sdk_eks::Client::new(self.config())
    }

    /// EFS client (file systems and mount targets).
    pub fn efs_client(&self) -> aws_sdk_efs::Client {
        aws_sdk_efs::Client::new(self.config())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SdkConfig's Debug dumps credentials providers; only show the region
        f.debug_struct("AwsContext")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_context_keeps_requested_region() {
        let ctx = AwsContext::new("eu-central-1").await;
        assert_eq!(ctx.region(), "eu-central-1");
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_clones_share_the_loaded_config() {
        let ctx = AwsContext::new("us-east-2").await;
        let clone = ctx.clone();
        assert_eq!(ctx.region(), clone.region());
        assert!(Arc::ptr_eq(&ctx.config, &clone.config));
    }
}
