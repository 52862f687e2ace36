//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// One read/query/create/update/delete group per collection. Updates are full
/// replacements (PUT). All async methods must be `Send` to work with Tokio's
/// work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync + std::fmt::Debug {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Probe connectivity and token validity with a cheap authenticated list call
    async fn validate_connection(&self) -> Result<(), NetBoxError>;

    // IPAM: RIRs
    /// Fetch a RIR by ID
    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError>;
    /// List RIRs matching the filters
    async fn query_rirs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rir>, NetBoxError>;
    /// Create a RIR
    async fn create_rir(&self, request: &WritableRir) -> Result<Rir, NetBoxError>;
    /// Replace a RIR (PUT)
    async fn update_rir(&self, id: u64, request: &WritableRir) -> Result<Rir, NetBoxError>;
    /// Delete a RIR
    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError>;

    // IPAM: VRFs
    /// Fetch a VRF by ID
    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError>;
    /// List VRFs matching the filters
    async fn query_vrfs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Vrf>, NetBoxError>;
    /// Create a VRF
    async fn create_vrf(&self, request: &WritableVrf) -> Result<Vrf, NetBoxError>;
    /// Replace a VRF (PUT)
    async fn update_vrf(&self, id: u64, request: &WritableVrf) -> Result<Vrf, NetBoxError>;
    /// Delete a VRF
    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError>;

    // IPAM: Aggregates
    /// Fetch an aggregate by ID
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError>;
    /// List aggregates matching the filters
    async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError>;
    /// Create an aggregate
    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    /// Replace an aggregate (PUT)
    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    /// Delete an aggregate
    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError>;

    // IPAM: Prefixes
    /// Fetch a prefix by ID
    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError>;
    /// List prefixes matching the filters
    async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError>;
    /// Create a prefix
    async fn create_prefix(&self, request: &WritablePrefix) -> Result<Prefix, NetBoxError>;
    /// Replace a prefix (PUT)
    async fn update_prefix(&self, id: u64, request: &WritablePrefix) -> Result<Prefix, NetBoxError>;
    /// Delete a prefix
    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError>;

    // IPAM: IP addresses
    /// Fetch an IP address by ID
    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError>;
    /// List IP addresses matching the filters
    async fn query_ip_addresses(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<IPAddress>, NetBoxError>;
    /// Create an IP address
    async fn create_ip_address(&self, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError>;
    /// Replace an IP address (PUT)
    async fn update_ip_address(&self, id: u64, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError>;
    /// Delete an IP address
    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError>;

    // Tenancy: Tenants
    /// Fetch a tenant by ID
    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError>;
    /// List tenants matching the filters
    async fn query_tenants(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tenant>, NetBoxError>;
    /// Create a tenant
    async fn create_tenant(&self, request: &WritableTenant) -> Result<Tenant, NetBoxError>;
    /// Replace a tenant (PUT)
    async fn update_tenant(&self, id: u64, request: &WritableTenant) -> Result<Tenant, NetBoxError>;
    /// Delete a tenant
    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError>;

    // Tenancy: Tenant groups
    /// Fetch a tenant group by ID
    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError>;
    /// List tenant groups matching the filters
    async fn query_tenant_groups(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<TenantGroup>, NetBoxError>;
    /// Create a tenant group
    async fn create_tenant_group(&self, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError>;
    /// Replace a tenant group (PUT)
    async fn update_tenant_group(&self, id: u64, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError>;
    /// Delete a tenant group
    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError>;
}
