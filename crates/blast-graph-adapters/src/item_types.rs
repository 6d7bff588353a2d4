// crates/blast-graph-adapters/src/item_types.rs
// ============================================================================
// Module: Item Types
// Description: Item type names for every resource kind the tables reference.
// Purpose: Keep edge targets and adapter registrations on one vocabulary.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Item types follow `azure-{service}-{resource}`. Only some of these kinds
//! have a built-in adapter; the rest appear solely as edge targets.

use blast_graph_core::ItemType;

// ============================================================================
// SECTION: Compute
// ============================================================================

/// Virtual machine.
pub const VIRTUAL_MACHINE: ItemType = ItemType::from_static("azure-compute-virtual-machine");
/// Managed disk.
pub const DISK: ItemType = ItemType::from_static("azure-compute-disk");
/// Disk snapshot.
pub const SNAPSHOT: ItemType = ItemType::from_static("azure-compute-snapshot");
/// Managed image.
pub const IMAGE: ItemType = ItemType::from_static("azure-compute-image");
/// Disk encryption set.
pub const DISK_ENCRYPTION_SET: ItemType =
    ItemType::from_static("azure-compute-disk-encryption-set");
/// Disk access resource for private disk import/export.
pub const DISK_ACCESS: ItemType = ItemType::from_static("azure-compute-disk-access");
/// Availability set.
pub const AVAILABILITY_SET: ItemType = ItemType::from_static("azure-compute-availability-set");
/// Proximity placement group.
pub const PROXIMITY_PLACEMENT_GROUP: ItemType =
    ItemType::from_static("azure-compute-proximity-placement-group");
/// Dedicated host group.
pub const DEDICATED_HOST_GROUP: ItemType =
    ItemType::from_static("azure-compute-dedicated-host-group");
/// Compute gallery image definition; keyed `gallery|image`.
pub const GALLERY_IMAGE: ItemType = ItemType::from_static("azure-compute-gallery-image");
/// Compute gallery image version; keyed `gallery|image|version`.
pub const GALLERY_IMAGE_VERSION: ItemType =
    ItemType::from_static("azure-compute-gallery-image-version");

// ============================================================================
// SECTION: Key Vault
// ============================================================================

/// Key vault.
pub const KEYVAULT_VAULT: ItemType = ItemType::from_static("azure-keyvault-vault");
/// Key vault secret; keyed `vault|secret`.
pub const KEYVAULT_SECRET: ItemType = ItemType::from_static("azure-keyvault-secret");
/// Key vault key; keyed `vault|key`.
pub const KEYVAULT_KEY: ItemType = ItemType::from_static("azure-keyvault-key");

// ============================================================================
// SECTION: Network
// ============================================================================

/// Virtual network.
pub const VIRTUAL_NETWORK: ItemType = ItemType::from_static("azure-network-virtual-network");
/// Subnet; keyed `virtualNetwork|subnet`.
pub const SUBNET: ItemType = ItemType::from_static("azure-network-subnet");
/// Network interface.
pub const NETWORK_INTERFACE: ItemType = ItemType::from_static("azure-network-network-interface");
/// Public IP address.
pub const PUBLIC_IP_ADDRESS: ItemType = ItemType::from_static("azure-network-public-ip-address");
/// Public IP prefix.
pub const PUBLIC_IP_PREFIX: ItemType = ItemType::from_static("azure-network-public-ip-prefix");
/// Network security group.
pub const NETWORK_SECURITY_GROUP: ItemType =
    ItemType::from_static("azure-network-network-security-group");
/// Application security group.
pub const APPLICATION_SECURITY_GROUP: ItemType =
    ItemType::from_static("azure-network-application-security-group");
/// Route table.
pub const ROUTE_TABLE: ItemType = ItemType::from_static("azure-network-route-table");
/// NAT gateway.
pub const NAT_GATEWAY: ItemType = ItemType::from_static("azure-network-nat-gateway");
/// Load balancer.
pub const LOAD_BALANCER: ItemType = ItemType::from_static("azure-network-load-balancer");
/// Private endpoint.
pub const PRIVATE_ENDPOINT: ItemType = ItemType::from_static("azure-network-private-endpoint");
/// DDoS protection plan.
pub const DDOS_PROTECTION_PLAN: ItemType =
    ItemType::from_static("azure-network-ddos-protection-plan");

// ============================================================================
// SECTION: SQL
// ============================================================================

/// SQL logical server.
pub const SQL_SERVER: ItemType = ItemType::from_static("azure-sql-server");
/// SQL database; keyed `server|database`.
pub const SQL_DATABASE: ItemType = ItemType::from_static("azure-sql-database");
/// SQL elastic pool; keyed `server|pool`.
pub const SQL_ELASTIC_POOL: ItemType = ItemType::from_static("azure-sql-elastic-pool");

// ============================================================================
// SECTION: Storage
// ============================================================================

/// Storage account.
pub const STORAGE_ACCOUNT: ItemType = ItemType::from_static("azure-storage-account");
/// Blob container; keyed `account|container`.
pub const BLOB_CONTAINER: ItemType = ItemType::from_static("azure-storage-blob-container");
/// File share; keyed `account|share`.
pub const FILE_SHARE: ItemType = ItemType::from_static("azure-storage-file-share");
/// Queue; keyed `account|queue`.
pub const QUEUE: ItemType = ItemType::from_static("azure-storage-queue");
/// Table; keyed `account|table`.
pub const TABLE: ItemType = ItemType::from_static("azure-storage-table");

// ============================================================================
// SECTION: Identity
// ============================================================================

/// User-assigned managed identity.
pub const USER_ASSIGNED_IDENTITY: ItemType =
    ItemType::from_static("azure-managedidentity-user-assigned-identity");
/// Federated identity credential; keyed `identity|credential`.
pub const FEDERATED_IDENTITY_CREDENTIAL: ItemType =
    ItemType::from_static("azure-managedidentity-federated-identity-credential");
