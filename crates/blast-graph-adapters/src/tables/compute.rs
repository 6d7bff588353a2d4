// crates/blast-graph-adapters/src/tables/compute.rs
// ============================================================================
// Module: Compute Rule Tables
// Description: Link rules for virtual machines, disks, and images.
// Purpose: Declare compute link sites, including cross-grouping references.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Compute resources reference disks, images, encryption sets, and vault keys
//! that frequently live in other resource groups. Path-derived scope keeps
//! those edges pointing at the right grouping.
//!
//! Disk and snapshot creation sources share one field; collection guards
//! decide which target type a path names.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::grammar::VaultObjectKind;
use blast_graph_core::runtime::Extraction;
use blast_graph_core::runtime::Guard;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::AVAILABILITY_SET;
use crate::item_types::BLOB_CONTAINER;
use crate::item_types::DEDICATED_HOST_GROUP;
use crate::item_types::DISK;
use crate::item_types::DISK_ACCESS;
use crate::item_types::DISK_ENCRYPTION_SET;
use crate::item_types::GALLERY_IMAGE;
use crate::item_types::GALLERY_IMAGE_VERSION;
use crate::item_types::IMAGE;
use crate::item_types::KEYVAULT_KEY;
use crate::item_types::KEYVAULT_SECRET;
use crate::item_types::KEYVAULT_VAULT;
use crate::item_types::NETWORK_INTERFACE;
use crate::item_types::PROXIMITY_PLACEMENT_GROUP;
use crate::item_types::SNAPSHOT;
use crate::item_types::STORAGE_ACCOUNT;
use crate::item_types::VIRTUAL_MACHINE;
use crate::tables::consumes;
use crate::tables::secured_by;
use crate::tables::used_by;
use crate::tables::user_assigned_identities;

// ============================================================================
// SECTION: Segment Lists
// ============================================================================

/// Collection chain of a managed image.
const MANAGED_IMAGE_SEGMENTS: &[&str] = &["images"];
/// Composite key collections for gallery image definitions.
const GALLERY_IMAGE_SEGMENTS: &[&str] = &["galleries", "images"];
/// Composite key collections for gallery image versions.
const GALLERY_IMAGE_VERSION_SEGMENTS: &[&str] = &["galleries", "images", "versions"];

// ============================================================================
// SECTION: Adapters
// ============================================================================

/// Returns the compute adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![
        virtual_machine(),
        disk(),
        snapshot(),
        image(),
        disk_encryption_set(),
        gallery_image_version(),
    ]
}

/// Virtual machine: disks, image, NICs, placement, identities, boot diagnostics.
#[must_use]
pub fn virtual_machine() -> ResourceAdapter {
    let mut rules = vec![
        consumes("$.properties.storageProfile.osDisk.managedDisk.id", DISK),
        consumes("$.properties.storageProfile.dataDisks[*].managedDisk.id", DISK),
        secured_by(
            "$.properties.storageProfile.osDisk.managedDisk.diskEncryptionSet.id",
            DISK_ENCRYPTION_SET,
        ),
        secured_by(
            "$.properties.storageProfile.dataDisks[*].managedDisk.diskEncryptionSet.id",
            DISK_ENCRYPTION_SET,
        ),
    ];
    rules.extend(image_source("$.properties.storageProfile.imageReference.id"));
    rules.extend([
        consumes("$.properties.networkProfile.networkInterfaces[*].id", NETWORK_INTERFACE),
        consumes("$.properties.availabilitySet.id", AVAILABILITY_SET),
        consumes("$.properties.proximityPlacementGroup.id", PROXIMITY_PLACEMENT_GROUP),
        consumes("$.properties.hostGroup.id", DEDICATED_HOST_GROUP),
        user_assigned_identities(),
        LinkRule::exact(
            "$.properties.diagnosticsProfile.bootDiagnostics.storageUri",
            Extraction::BlobAccount,
            STORAGE_ACCOUNT,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::dns_from_url("$.properties.diagnosticsProfile.bootDiagnostics.storageUri"),
        secured_by("$.properties.osProfile.secrets[*].sourceVault.id", KEYVAULT_VAULT),
        LinkRule::exact(
            "$.properties.osProfile.secrets[*].vaultCertificates[*].certificateUrl",
            Extraction::VaultName,
            KEYVAULT_VAULT,
            Relationship::SecurityDependency,
        ),
    ]);
    ResourceAdapter::new(VIRTUAL_MACHINE, Identity::Name, rules)
}

/// Managed disk: managing VMs, creation source, encryption.
#[must_use]
pub fn disk() -> ResourceAdapter {
    let mut rules = vec![
        used_by("$.managedBy", VIRTUAL_MACHINE),
        used_by("$.managedByExtended[*]", VIRTUAL_MACHINE),
        used_by("$.properties.shareInfo[*].vmUri", VIRTUAL_MACHINE),
    ];
    rules.extend(creation_source());
    rules.extend(disk_encryption());
    rules.push(consumes("$.properties.diskAccessId", DISK_ACCESS));
    ResourceAdapter::new(DISK, Identity::Name, rules)
}

/// Disk snapshot: creation source and encryption.
#[must_use]
pub fn snapshot() -> ResourceAdapter {
    let mut rules = creation_source();
    rules.extend(disk_encryption());
    rules.push(consumes("$.properties.diskAccessId", DISK_ACCESS));
    ResourceAdapter::new(SNAPSHOT, Identity::Name, rules)
}

/// Managed image: source VM and the disks, snapshots, or blobs it captured.
#[must_use]
pub fn image() -> ResourceAdapter {
    let mut rules = vec![consumes("$.properties.sourceVirtualMachine.id", VIRTUAL_MACHINE)];
    for disk_path in [
        "$.properties.storageProfile.osDisk",
        "$.properties.storageProfile.dataDisks[*]",
    ] {
        rules.extend([
            consumes(&format!("{disk_path}.managedDisk.id"), DISK),
            consumes(&format!("{disk_path}.snapshot.id"), SNAPSHOT),
            LinkRule::exact(
                format!("{disk_path}.blobUri"),
                Extraction::BlobAccount,
                STORAGE_ACCOUNT,
                Relationship::ConsumerOfProvider,
            ),
            LinkRule::exact(
                format!("{disk_path}.blobUri"),
                Extraction::BlobContainer,
                BLOB_CONTAINER,
                Relationship::ConsumerOfProvider,
            ),
            secured_by(&format!("{disk_path}.diskEncryptionSet.id"), DISK_ENCRYPTION_SET),
        ]);
    }
    ResourceAdapter::new(IMAGE, Identity::Name, rules)
}

/// Disk encryption set: the vault and key versions it wraps disks with.
#[must_use]
pub fn disk_encryption_set() -> ResourceAdapter {
    let mut rules = vec![secured_by("$.properties.activeKey.sourceVault.id", KEYVAULT_VAULT)];
    for key_url in ["$.properties.activeKey.keyUrl", "$.properties.previousKeys[*].keyUrl"] {
        rules.extend([
            LinkRule::exact(
                key_url,
                Extraction::VaultName,
                KEYVAULT_VAULT,
                Relationship::SecurityDependency,
            ),
            LinkRule::exact(
                key_url,
                Extraction::VaultObject,
                KEYVAULT_KEY,
                Relationship::SecurityDependency,
            )
            .when(Guard::VaultObject(VaultObjectKind::Key)),
        ]);
    }
    rules.push(user_assigned_identities());
    ResourceAdapter::new(DISK_ENCRYPTION_SET, Identity::Name, rules)
}

/// Gallery image version keyed `gallery|image|version`: its definition and
/// the resources it was captured from.
#[must_use]
pub fn gallery_image_version() -> ResourceAdapter {
    let mut rules = vec![LinkRule::exact(
        "$.id",
        Extraction::PathSegments(GALLERY_IMAGE_SEGMENTS),
        GALLERY_IMAGE,
        Relationship::ChildOfParent,
    )];
    let source = "$.properties.storageProfile.source.id";
    rules.extend(image_source(source));
    rules.push(consumes(source, VIRTUAL_MACHINE).when_collection("virtualMachines"));
    for snapshot_source in [
        "$.properties.storageProfile.osDiskImage.source.id",
        "$.properties.storageProfile.dataDiskImages[*].source.id",
    ] {
        rules.extend([
            consumes(snapshot_source, DISK).when_collection("disks"),
            consumes(snapshot_source, SNAPSHOT).when_collection("snapshots"),
        ]);
    }
    rules.extend([
        secured_by(
            "$.properties.publishingProfile.targetRegions[*].encryption.osDiskImage.diskEncryptionSetId",
            DISK_ENCRYPTION_SET,
        ),
        secured_by(
            "$.properties.publishingProfile.targetRegions[*].encryption.dataDiskImages[*].diskEncryptionSetId",
            DISK_ENCRYPTION_SET,
        ),
    ]);
    ResourceAdapter::new(
        GALLERY_IMAGE_VERSION,
        Identity::PathSegments(GALLERY_IMAGE_VERSION_SEGMENTS),
        rules,
    )
}

// ============================================================================
// SECTION: Shared Rule Groups
// ============================================================================

/// Links a managed image, gallery image definition, or gallery image
/// version named by `path`. Each rule requires the full collection chain.
fn image_source(path: &str) -> [LinkRule; 3] {
    [
        consumes(path, IMAGE).when_resource_type(MANAGED_IMAGE_SEGMENTS),
        LinkRule::exact(
            path,
            Extraction::PathSegments(GALLERY_IMAGE_SEGMENTS),
            GALLERY_IMAGE,
            Relationship::ConsumerOfProvider,
        )
        .when_resource_type(GALLERY_IMAGE_SEGMENTS),
        LinkRule::exact(
            path,
            Extraction::PathSegments(GALLERY_IMAGE_VERSION_SEGMENTS),
            GALLERY_IMAGE_VERSION,
            Relationship::ConsumerOfProvider,
        )
        .when_resource_type(GALLERY_IMAGE_VERSION_SEGMENTS),
    ]
}

/// Creation sources shared by disks and snapshots.
fn creation_source() -> Vec<LinkRule> {
    let source = "$.properties.creationData.sourceResourceId";
    let mut rules = vec![
        consumes(source, DISK).when_collection("disks"),
        consumes(source, SNAPSHOT).when_collection("snapshots"),
        consumes("$.properties.creationData.storageAccountId", STORAGE_ACCOUNT),
        LinkRule::exact(
            "$.properties.creationData.sourceUri",
            Extraction::BlobAccount,
            STORAGE_ACCOUNT,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::exact(
            "$.properties.creationData.sourceUri",
            Extraction::BlobContainer,
            BLOB_CONTAINER,
            Relationship::ConsumerOfProvider,
        ),
    ];
    rules.extend(image_source("$.properties.creationData.imageReference.id"));
    rules.extend(image_source("$.properties.creationData.galleryImageReference.id"));
    rules
}

/// Encryption references shared by disks and snapshots.
fn disk_encryption() -> Vec<LinkRule> {
    let settings = "$.properties.encryptionSettingsCollection.encryptionSettings[*]";
    vec![
        secured_by("$.properties.encryption.diskEncryptionSetId", DISK_ENCRYPTION_SET),
        secured_by(&format!("{settings}.diskEncryptionKey.sourceVault.id"), KEYVAULT_VAULT),
        LinkRule::exact(
            format!("{settings}.diskEncryptionKey.secretUrl"),
            Extraction::VaultObject,
            KEYVAULT_SECRET,
            Relationship::SecurityDependency,
        )
        .when(Guard::VaultObject(VaultObjectKind::Secret)),
        secured_by(&format!("{settings}.keyEncryptionKey.sourceVault.id"), KEYVAULT_VAULT),
        LinkRule::exact(
            format!("{settings}.keyEncryptionKey.keyUrl"),
            Extraction::VaultObject,
            KEYVAULT_KEY,
            Relationship::SecurityDependency,
        )
        .when(Guard::VaultObject(VaultObjectKind::Key)),
    ]
}
