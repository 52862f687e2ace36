//! NetBox API client
//!
//! Implements the NetBox REST API client for the IPAM and tenancy collections.
//! Based on NetBox API structure: /api/ipam/<collection>/ and /api/tenancy/<collection>/

use crate::common::query::{collection_path, query_resources};
use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const RIRS: &str = "ipam/rirs";
const VRFS: &str = "ipam/vrfs";
const AGGREGATES: &str = "ipam/aggregates";
const PREFIXES: &str = "ipam/prefixes";
const IP_ADDRESSES: &str = "ipam/ip-addresses";
const TENANTS: &str = "tenancy/tenants";
const TENANT_GROUPS: &str = "tenancy/tenant-groups";

fn object_path(endpoint: &str, id: u64) -> String {
    format!("/api/{}/{}/", endpoint, id)
}

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL without the `/api` suffix (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate connectivity and the API token.
    ///
    /// Lists a single RIR: the collection always exists, the call requires
    /// authentication, and the page is tiny.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError)` - Token is invalid or NetBox is unreachable
    pub async fn validate_connection(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let path = collection_path(&self.http, RIRS, &[("limit", "1")]);
        let page: PaginatedResponse<Rir> = self.http.get(&path).await?;
        debug!("Connection validated, {} RIRs visible", page.count);
        Ok(())
    }

    // RIRs

    /// Get a RIR by ID
    pub async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        debug!("Fetching RIR {} from NetBox", id);
        self.http.get(&object_path(RIRS, id)).await
    }

    /// Query RIRs by filter
    pub async fn query_rirs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rir>, NetBoxError> {
        debug!("Querying RIRs with filters: {:?}", filters);
        query_resources(&self.http, RIRS, filters, fetch_all).await
    }

    /// Create a RIR
    pub async fn create_rir(&self, request: &WritableRir) -> Result<Rir, NetBoxError> {
        debug!("Creating RIR {} (slug {})", request.name, request.slug);
        self.http.post(&format!("/api/{}/", RIRS), request).await
    }

    /// Replace a RIR by ID
    pub async fn update_rir(&self, id: u64, request: &WritableRir) -> Result<Rir, NetBoxError> {
        debug!("Updating RIR {}", id);
        self.http.put(&object_path(RIRS, id), request).await
    }

    /// Delete a RIR by ID
    pub async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting RIR {}", id);
        self.http.delete(&object_path(RIRS, id)).await
    }

    // VRFs

    /// Get a VRF by ID
    pub async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        debug!("Fetching VRF {} from NetBox", id);
        self.http.get(&object_path(VRFS, id)).await
    }

    /// Query VRFs by filter
    pub async fn query_vrfs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Vrf>, NetBoxError> {
        debug!("Querying VRFs with filters: {:?}", filters);
        query_resources(&self.http, VRFS, filters, fetch_all).await
    }

    /// Create a VRF
    pub async fn create_vrf(&self, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        debug!("Creating VRF {} (rd {})", request.name, request.rd);
        self.http.post(&format!("/api/{}/", VRFS), request).await
    }

    /// Replace a VRF by ID
    pub async fn update_vrf(&self, id: u64, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        debug!("Updating VRF {}", id);
        self.http.put(&object_path(VRFS, id), request).await
    }

    /// Delete a VRF by ID
    pub async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting VRF {}", id);
        self.http.delete(&object_path(VRFS, id)).await
    }

    // Aggregates

    /// Get an aggregate by ID
    pub async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        debug!("Fetching aggregate {} from NetBox", id);
        self.http.get(&object_path(AGGREGATES, id)).await
    }

    /// Query aggregates by filter
    pub async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError> {
        debug!("Querying aggregates with filters: {:?}", filters);
        query_resources(&self.http, AGGREGATES, filters, fetch_all).await
    }

    /// Create an aggregate
    ///
    /// # Arguments
    /// * `request` - Aggregate prefix, owning RIR ID and description
    pub async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        debug!("Creating aggregate {} under RIR {}", request.prefix, request.rir);
        self.http.post(&format!("/api/{}/", AGGREGATES), request).await
    }

    /// Replace an aggregate by ID
    pub async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        debug!("Updating aggregate {}", id);
        self.http.put(&object_path(AGGREGATES, id), request).await
    }

    /// Delete an aggregate by ID
    pub async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting aggregate {}", id);
        self.http.delete(&object_path(AGGREGATES, id)).await
    }

    // Prefixes

    /// Get a prefix by ID
    ///
    /// # Arguments
    /// * `id` - Prefix ID
    ///
    /// # Returns
    /// * `Ok(Prefix)` - The prefix object
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        debug!("Fetching prefix {} from NetBox", id);
        self.http.get(&object_path(PREFIXES, id)).await
    }

    /// Query prefixes by filter
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("q", "10.0."), ("limit", "2")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError> {
        debug!("Querying prefixes with filters: {:?}", filters);
        query_resources(&self.http, PREFIXES, filters, fetch_all).await
    }

    /// Create a prefix
    pub async fn create_prefix(&self, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        debug!("Creating prefix {}", request.prefix);
        self.http.post(&format!("/api/{}/", PREFIXES), request).await
    }

    /// Replace a prefix by ID
    pub async fn update_prefix(&self, id: u64, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        debug!("Updating prefix {}", id);
        self.http.put(&object_path(PREFIXES, id), request).await
    }

    /// Delete a prefix by ID
    pub async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting prefix {}", id);
        self.http.delete(&object_path(PREFIXES, id)).await
    }

    // IP addresses

    /// Get an IP address by ID
    ///
    /// # Arguments
    /// * `id` - IP Address ID
    ///
    /// # Returns
    /// * `Ok(IPAddress)` - The IP address object
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        debug!("Fetching IP address {} from NetBox", id);
        self.http.get(&object_path(IP_ADDRESSES, id)).await
    }

    /// Query IP addresses by filter
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("address", "192.168.1.1/24")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_ip_addresses(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<IPAddress>, NetBoxError> {
        debug!("Querying IP addresses with filters: {:?}", filters);
        query_resources(&self.http, IP_ADDRESSES, filters, fetch_all).await
    }

    /// Create an IP address
    pub async fn create_ip_address(&self, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        debug!("Creating IP address {}", request.address);
        self.http.post(&format!("/api/{}/", IP_ADDRESSES), request).await
    }

    /// Replace an IP address by ID
    pub async fn update_ip_address(&self, id: u64, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        debug!("Updating IP address {}", id);
        self.http.put(&object_path(IP_ADDRESSES, id), request).await
    }

    /// Delete an IP address by ID
    pub async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting IP address {}", id);
        self.http.delete(&object_path(IP_ADDRESSES, id)).await
    }

    // Tenants

    /// Get a tenant by ID
    pub async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        debug!("Fetching tenant {} from NetBox", id);
        self.http.get(&object_path(TENANTS, id)).await
    }

    /// Query tenants by filter
    pub async fn query_tenants(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tenant>, NetBoxError> {
        debug!("Querying tenants with filters: {:?}", filters);
        query_resources(&self.http, TENANTS, filters, fetch_all).await
    }

    /// Create a tenant
    pub async fn create_tenant(&self, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        debug!("Creating tenant {} (slug {})", request.name, request.slug);
        self.http.post(&format!("/api/{}/", TENANTS), request).await
    }

    /// Replace a tenant by ID
    pub async fn update_tenant(&self, id: u64, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        debug!("Updating tenant {}", id);
        self.http.put(&object_path(TENANTS, id), request).await
    }

    /// Delete a tenant by ID
    pub async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting tenant {}", id);
        self.http.delete(&object_path(TENANTS, id)).await
    }

    // Tenant groups

    /// Get a tenant group by ID
    pub async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError> {
        debug!("Fetching tenant group {} from NetBox", id);
        self.http.get(&object_path(TENANT_GROUPS, id)).await
    }

    /// Query tenant groups by filter
    pub async fn query_tenant_groups(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<TenantGroup>, NetBoxError> {
        debug!("Querying tenant groups with filters: {:?}", filters);
        query_resources(&self.http, TENANT_GROUPS, filters, fetch_all).await
    }

    /// Create a tenant group
    pub async fn create_tenant_group(&self, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        debug!("Creating tenant group {} (slug {})", request.name, request.slug);
        self.http.post(&format!("/api/{}/", TENANT_GROUPS), request).await
    }

    /// Replace a tenant group by ID
    pub async fn update_tenant_group(&self, id: u64, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        debug!("Updating tenant group {}", id);
        self.http.put(&object_path(TENANT_GROUPS, id), request).await
    }

    /// Delete a tenant group by ID
    pub async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting tenant group {}", id);
        self.http.delete(&object_path(TENANT_GROUPS, id)).await
    }
}

// Implement NetBoxClientTrait for NetBoxClient
// This delegates all trait methods to the existing implementations
#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_connection(&self) -> Result<(), NetBoxError> {
        self.validate_connection().await
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        self.get_rir(id).await
    }

    async fn query_rirs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rir>, NetBoxError> {
        self.query_rirs(filters, fetch_all).await
    }

    async fn create_rir(&self, request: &WritableRir) -> Result<Rir, NetBoxError> {
        self.create_rir(request).await
    }

    async fn update_rir(&self, id: u64, request: &WritableRir) -> Result<Rir, NetBoxError> {
        self.update_rir(id, request).await
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_rir(id).await
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        self.get_vrf(id).await
    }

    async fn query_vrfs(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Vrf>, NetBoxError> {
        self.query_vrfs(filters, fetch_all).await
    }

    async fn create_vrf(&self, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.create_vrf(request).await
    }

    async fn update_vrf(&self, id: u64, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.update_vrf(id, request).await
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_vrf(id).await
    }

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        self.get_aggregate(id).await
    }

    async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError> {
        self.query_aggregates(filters, fetch_all).await
    }

    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.create_aggregate(request).await
    }

    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.update_aggregate(id, request).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_aggregate(id).await
    }

    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        self.get_prefix(id).await
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError> {
        self.query_prefixes(filters, fetch_all).await
    }

    async fn create_prefix(&self, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        self.create_prefix(request).await
    }

    async fn update_prefix(&self, id: u64, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        self.update_prefix(id, request).await
    }

    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_prefix(id).await
    }

    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        self.get_ip_address(id).await
    }

    async fn query_ip_addresses(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<IPAddress>, NetBoxError> {
        self.query_ip_addresses(filters, fetch_all).await
    }

    async fn create_ip_address(&self, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        self.create_ip_address(request).await
    }

    async fn update_ip_address(&self, id: u64, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        self.update_ip_address(id, request).await
    }

    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_ip_address(id).await
    }

    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        self.get_tenant(id).await
    }

    async fn query_tenants(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tenant>, NetBoxError> {
        self.query_tenants(filters, fetch_all).await
    }

    async fn create_tenant(&self, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        self.create_tenant(request).await
    }

    async fn update_tenant(&self, id: u64, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        self.update_tenant(id, request).await
    }

    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_tenant(id).await
    }

    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError> {
        self.get_tenant_group(id).await
    }

    async fn query_tenant_groups(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<TenantGroup>, NetBoxError> {
        self.query_tenant_groups(filters, fetch_all).await
    }

    async fn create_tenant_group(&self, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        self.create_tenant_group(request).await
    }

    async fn update_tenant_group(&self, id: u64, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        self.update_tenant_group(id, request).await
    }

    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_tenant_group(id).await
    }
}
