//! sg-attachments - security group attachment reporting
//!
//! Walks the security groups of one AWS region and reports every
//! resource that references each group: EC2 instances, classic and v2
//! load balancers, VPC-attached Lambda functions, RDS instances,
//! ElastiCache clusters, EKS clusters, and EFS mount targets.
//!
//! The library surface exists for the binary and the integration tests;
//! `scanner::AttachmentScanner` is the entry point.

pub mod attachments;
pub mod aws;
pub mod report;
pub mod scanner;
