//! AWS inventory modules
//!
//! One module per service API the scan touches:
//! - EC2: security groups and per-group instances
//! - ELB / ELBv2: classic and application/network load balancers
//! - Lambda: VPC-attached functions
//! - RDS: database instances
//! - ElastiCache: cache clusters
//! - EKS: clusters
//! - EFS: file systems and mount targets

pub mod context;
pub mod ec2;
pub mod efs;
pub mod eks;
pub mod elasticache;
pub mod elb;
pub mod elbv2;
pub mod error;
pub mod lambda;
pub mod rds;

pub use context::AwsContext;
pub use error::api_error;
