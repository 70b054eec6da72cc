//! EFS inventory: file systems and their mount targets
//!
//! `DescribeMountTargets` is scoped to a single file system, so the
//! file-system inventory is listed first and each file system's targets
//! are fetched in turn. A mount target does not carry its security
//! groups inline; they come from a per-target describe call.

use crate::attachments::{ResourceDescriptor, ResourceKind};
use crate::aws::error::api_error;
use anyhow::Result;
use aws_sdk_efs::types::{FileSystemDescription, MountTargetDescription};
use aws_sdk_efs::Client;
use tracing::debug;

/// List every mount target across the region's file systems.
pub async fn list_mount_targets(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let file_systems = list_file_systems(client).await?;

    let mut descriptors = Vec::new();
    for file_system in &file_systems {
        let response = client
            .describe_mount_targets()
            .file_system_id(file_system.file_system_id())
            .send()
            .await
            .map_err(|e| api_error("describe EFS mount targets", e))?;

        for target in response.mount_targets() {
            let security_groups = mount_target_security_groups(client, target).await?;
            descriptors.push(mount_target_descriptor(target, security_groups));
        }
    }

    debug!(count = descriptors.len(), "Found EFS mount targets");
    Ok(descriptors)
}

async fn list_file_systems(client: &Client) -> Result<Vec<FileSystemDescription>> {
    let response = client
        .describe_file_systems()
        .send()
        .await
        .map_err(|e| api_error("describe EFS file systems", e))?;

    let file_systems = response.file_systems().to_vec();
    debug!(count = file_systems.len(), "Found EFS file systems");
    Ok(file_systems)
}

async fn mount_target_security_groups(
    client: &Client,
    target: &MountTargetDescription,
) -> Result<Vec<String>> {
    let response = client
        .describe_mount_target_security_groups()
        .mount_target_id(target.mount_target_id())
        .send()
        .await
        .map_err(|e| api_error("describe EFS mount target security groups", e))?;

    Ok(response.security_groups().to_vec())
}

/// Normalize one mount target. The report name is the mount-target id;
/// the Resource ID column shows the parent file system.
fn mount_target_descriptor(
    target: &MountTargetDescription,
    security_groups: Vec<String>,
) -> ResourceDescriptor {
    ResourceDescriptor {
        kind: ResourceKind::EfsMountTarget,
        name: target.mount_target_id().to_string(),
        id: target.file_system_id().to_string(),
        security_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_efs::types::LifeCycleState;

    fn target(mount_target_id: &str, file_system_id: &str) -> MountTargetDescription {
        MountTargetDescription::builder()
            .mount_target_id(mount_target_id)
            .file_system_id(file_system_id)
            .subnet_id("subnet-1")
            .life_cycle_state(LifeCycleState::Available)
            .build()
            .unwrap()
    }

    #[test]
    fn test_descriptor_names_target_and_points_at_file_system() {
        let d = mount_target_descriptor(
            &target("fsmt-0aa1", "fs-0bb2"),
            vec!["sg-1".to_string()],
        );

        assert_eq!(d.kind, ResourceKind::EfsMountTarget);
        assert_eq!(d.name, "fsmt-0aa1");
        assert_eq!(d.id, "fs-0bb2");
        assert_eq!(d.security_groups, vec!["sg-1"]);
    }

    #[test]
    fn test_descriptor_with_no_groups_never_matches() {
        let d = mount_target_descriptor(&target("fsmt-0aa1", "fs-0bb2"), vec![]);
        assert!(!d.references("sg-1"));
    }
}
