// crates/blast-graph-adapters/src/tables/network.rs
// ============================================================================
// Module: Network Rule Tables
// Description: Link rules for virtual networks, interfaces, and public IPs.
// Purpose: Declare network link sites, including bare endpoint literals.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Network resources mix hierarchical references with bare endpoints: DNS
//! server lists hold IP literals or host names, and public IPs carry both an
//! address and a fully qualified domain name. Endpoint edges are global.
//!
//! Subnets are keyed `virtualNetwork|subnet`. Interface and frontend IP
//! configurations are not items; their owners are recovered from the
//! configuration path instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::runtime::Extraction;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::APPLICATION_SECURITY_GROUP;
use crate::item_types::DDOS_PROTECTION_PLAN;
use crate::item_types::LOAD_BALANCER;
use crate::item_types::NAT_GATEWAY;
use crate::item_types::NETWORK_INTERFACE;
use crate::item_types::NETWORK_SECURITY_GROUP;
use crate::item_types::PRIVATE_ENDPOINT;
use crate::item_types::PUBLIC_IP_ADDRESS;
use crate::item_types::PUBLIC_IP_PREFIX;
use crate::item_types::ROUTE_TABLE;
use crate::item_types::SUBNET;
use crate::item_types::VIRTUAL_MACHINE;
use crate::item_types::VIRTUAL_NETWORK;
use crate::tables::SUBNET_SEGMENTS;
use crate::tables::consumes;
use crate::tables::used_by;

// ============================================================================
// SECTION: Adapters
// ============================================================================

/// Returns the network adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![virtual_network(), network_interface(), public_ip_address()]
}

/// Virtual network: subnets, peerings, DNS servers, subnet attachments.
#[must_use]
pub fn virtual_network() -> ResourceAdapter {
    let subnets = "$.properties.subnets[*]";
    let mut rules = vec![
        LinkRule::exact(
            format!("{subnets}.id"),
            Extraction::PathSegments(SUBNET_SEGMENTS),
            SUBNET,
            Relationship::ParentOfChildren,
        ),
        LinkRule::exact(
            "$.properties.virtualNetworkPeerings[*].properties.remoteVirtualNetwork.id",
            Extraction::ResourceName,
            VIRTUAL_NETWORK,
            Relationship::CoupledSibling,
        ),
        consumes("$.properties.ddosProtectionPlan.id", DDOS_PROTECTION_PLAN),
        consumes(&format!("{subnets}.properties.networkSecurityGroup.id"), NETWORK_SECURITY_GROUP),
        consumes(&format!("{subnets}.properties.routeTable.id"), ROUTE_TABLE),
        consumes(&format!("{subnets}.properties.natGateway.id"), NAT_GATEWAY),
    ];
    rules.extend(dns_servers("$.properties.dhcpOptions.dnsServers[*]"));
    ResourceAdapter::new(VIRTUAL_NETWORK, Identity::Name, rules)
}

/// Network interface: subnets, public IPs, load balancers, security groups.
#[must_use]
pub fn network_interface() -> ResourceAdapter {
    let configs = "$.properties.ipConfigurations[*].properties";
    let mut rules = vec![
        LinkRule::exact(
            format!("{configs}.subnet.id"),
            Extraction::PathSegments(SUBNET_SEGMENTS),
            SUBNET,
            Relationship::ConsumerOfProvider,
        ),
        consumes(&format!("{configs}.publicIPAddress.id"), PUBLIC_IP_ADDRESS),
        LinkRule::ip_address(format!("{configs}.privateIPAddress")),
        LinkRule::exact(
            format!("{configs}.loadBalancerBackendAddressPools[*].id"),
            Extraction::PathSegments(&["loadBalancers"]),
            LOAD_BALANCER,
            Relationship::ConsumerOfProvider,
        ),
        consumes(&format!("{configs}.applicationSecurityGroups[*].id"), APPLICATION_SECURITY_GROUP),
        consumes("$.properties.networkSecurityGroup.id", NETWORK_SECURITY_GROUP),
        used_by("$.properties.virtualMachine.id", VIRTUAL_MACHINE),
        used_by("$.properties.privateEndpoint.id", PRIVATE_ENDPOINT),
    ];
    rules.extend(dns_servers("$.properties.dnsSettings.dnsServers[*]"));
    rules.push(LinkRule::dns_name("$.properties.dnsSettings.internalFqdn"));
    ResourceAdapter::new(NETWORK_INTERFACE, Identity::Name, rules)
}

/// Public IP address: its address, FQDN, attachment, and prefix.
#[must_use]
pub fn public_ip_address() -> ResourceAdapter {
    let attachment = "$.properties.ipConfiguration.id";
    let rules = vec![
        LinkRule::ip_address("$.properties.ipAddress"),
        LinkRule::dns_name("$.properties.dnsSettings.fqdn"),
        LinkRule::exact(
            attachment,
            Extraction::PathSegments(&["networkInterfaces"]),
            NETWORK_INTERFACE,
            Relationship::UsedBy,
        ),
        LinkRule::exact(
            attachment,
            Extraction::PathSegments(&["loadBalancers"]),
            LOAD_BALANCER,
            Relationship::UsedBy,
        ),
        used_by("$.properties.natGateway.id", NAT_GATEWAY),
        consumes("$.properties.publicIPPrefix.id", PUBLIC_IP_PREFIX),
        consumes("$.properties.ddosSettings.ddosProtectionPlan.id", DDOS_PROTECTION_PLAN),
    ];
    ResourceAdapter::new(PUBLIC_IP_ADDRESS, Identity::Name, rules)
}

// ============================================================================
// SECTION: Shared Rule Groups
// ============================================================================

/// DNS server entries are IP literals or host names.
fn dns_servers(path: &str) -> [LinkRule; 2] {
    [LinkRule::ip_address(path), LinkRule::dns_name(path)]
}
