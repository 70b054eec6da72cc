//! Resource families and the attachment index
//!
//! The scan normalizes every AWS resource into a `ResourceDescriptor` and
//! records matches into an `AttachmentIndex`, which groups associations by
//! resource name while preserving discovery order for the report.

use std::collections::HashMap;

/// Resource families that can reference a security group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// EC2 instance
    Ec2Instance,
    /// Classic (ELB v1) load balancer
    ClassicLoadBalancer,
    /// Application or network (ELB v2) load balancer
    LoadBalancer,
    /// Lambda function with a VPC configuration
    LambdaFunction,
    /// RDS database instance
    RdsInstance,
    /// ElastiCache cluster
    ElasticacheCluster,
    /// EKS cluster
    EksCluster,
    /// EFS mount target
    EfsMountTarget,
}

impl ResourceKind {
    /// Label shown in the report's Resource Type column.
    ///
    /// Consumers match on these exact strings, including the
    /// "ElasticCache" spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Ec2Instance => "EC2 Instance",
            ResourceKind::ClassicLoadBalancer => "Classic Load Balancer",
            ResourceKind::LoadBalancer => "Load Balancer",
            ResourceKind::LambdaFunction => "Lambda Function",
            ResourceKind::RdsInstance => "RDS Instance",
            ResourceKind::ElasticacheCluster => "ElasticCache Cluster",
            ResourceKind::EksCluster => "EKS Cluster",
            ResourceKind::EfsMountTarget => "EFS Mount Target",
        }
    }
}

/// A security group discovered in the target region
#[derive(Debug, Clone)]
pub struct SecurityGroup {
    /// Group identifier (`sg-...`)
    pub id: String,
}

/// One resource normalized from an AWS inventory listing
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    /// Resource family
    pub kind: ResourceKind,
    /// Key under which associations are grouped in the report
    pub name: String,
    /// Identifier shown in the report's Resource ID column
    pub id: String,
    /// Security group ids the resource references
    pub security_groups: Vec<String>,
}

impl ResourceDescriptor {
    /// Whether this resource references the given security group.
    pub fn references(&self, group_id: &str) -> bool {
        self.security_groups.iter().any(|sg| sg == group_id)
    }
}

/// Associations grouped by resource name, in first-recorded order.
///
/// Recording the same name again appends to the existing entry instead
/// of creating a new one, so a resource that matches several groups
/// contributes several rows under a single name slot.
#[derive(Debug, Default)]
pub struct AttachmentIndex {
    entries: Vec<(String, Vec<(ResourceKind, String)>)>,
    positions: HashMap<String, usize>,
}

impl AttachmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one association under the descriptor's name.
    pub fn record(&mut self, descriptor: &ResourceDescriptor) {
        let slot = match self.positions.get(&descriptor.name) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.positions.insert(descriptor.name.clone(), i);
                self.entries.push((descriptor.name.clone(), Vec::new()));
                i
            }
        };
        self.entries[slot]
            .1
            .push((descriptor.kind, descriptor.id.clone()));
    }

    /// Flattened `(name, kind, id)` rows in recording order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, ResourceKind, &str)> {
        self.entries.iter().flat_map(|(name, associations)| {
            associations
                .iter()
                .map(move |(kind, id)| (name.as_str(), *kind, id.as_str()))
        })
    }

    /// Total number of report rows.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, a)| a.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: ResourceKind, name: &str, id: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            kind,
            name: name.to_string(),
            id: id.to_string(),
            security_groups: vec![],
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ResourceKind::Ec2Instance.as_str(), "EC2 Instance");
        assert_eq!(
            ResourceKind::ClassicLoadBalancer.as_str(),
            "Classic Load Balancer"
        );
        assert_eq!(ResourceKind::LoadBalancer.as_str(), "Load Balancer");
        assert_eq!(ResourceKind::LambdaFunction.as_str(), "Lambda Function");
        assert_eq!(ResourceKind::RdsInstance.as_str(), "RDS Instance");
        assert_eq!(
            ResourceKind::ElasticacheCluster.as_str(),
            "ElasticCache Cluster"
        );
        assert_eq!(ResourceKind::EksCluster.as_str(), "EKS Cluster");
        assert_eq!(ResourceKind::EfsMountTarget.as_str(), "EFS Mount Target");
    }

    #[test]
    fn test_references_matches_exact_group_id() {
        let mut d = descriptor(ResourceKind::Ec2Instance, "i-1", "i-1");
        d.security_groups = vec!["sg-aaa".to_string(), "sg-bbb".to_string()];

        assert!(d.references("sg-aaa"));
        assert!(d.references("sg-bbb"));
        assert!(!d.references("sg-ccc"));
        assert!(!d.references("sg-a"));
    }

    #[test]
    fn test_rows_preserve_recording_order() {
        let mut index = AttachmentIndex::new();
        index.record(&descriptor(ResourceKind::Ec2Instance, "i-1", "i-1"));
        index.record(&descriptor(ResourceKind::ClassicLoadBalancer, "clb-1", "clb-1"));
        index.record(&descriptor(ResourceKind::RdsInstance, "db-1", "db-1"));

        let rows: Vec<_> = index.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ("i-1", ResourceKind::Ec2Instance, "i-1"));
        assert_eq!(rows[1], ("clb-1", ResourceKind::ClassicLoadBalancer, "clb-1"));
        assert_eq!(rows[2], ("db-1", ResourceKind::RdsInstance, "db-1"));
    }

    #[test]
    fn test_same_name_accumulates_in_one_slot() {
        let mut index = AttachmentIndex::new();
        index.record(&descriptor(ResourceKind::RdsInstance, "sessions", "sessions"));
        index.record(&descriptor(ResourceKind::ClassicLoadBalancer, "web", "web"));
        // A second kind under an existing name lands in its original slot,
        // not at the end
        index.record(&descriptor(ResourceKind::ElasticacheCluster, "sessions", "sessions"));

        let rows: Vec<_> = index.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ("sessions", ResourceKind::RdsInstance, "sessions"));
        assert_eq!(rows[1], ("sessions", ResourceKind::ElasticacheCluster, "sessions"));
        assert_eq!(rows[2], ("web", ResourceKind::ClassicLoadBalancer, "web"));
    }

    #[test]
    fn test_empty_index() {
        let index = AttachmentIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.rows().count(), 0);
    }
}
