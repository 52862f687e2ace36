//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `ipam.rs` - IPAM operations (RIRs, VRFs, aggregates, prefixes, IP addresses)
//! - `tenancy.rs` - Tenancy operations (tenants, tenant groups)
//! - `helpers.rs` - Helper functions for creating nested types and filtering

mod helpers;
mod ipam;
mod tenancy;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use helpers::lock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type Store<T> = Arc<Mutex<BTreeMap<u64, T>>>;

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory, assigns IDs from a shared counter the
/// way NetBox does, enforces related-object references on writes, and can be
/// switched into an "unavailable" mode where every call fails.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) rirs: Store<Rir>,
    pub(crate) vrfs: Store<Vrf>,
    pub(crate) aggregates: Store<Aggregate>,
    pub(crate) prefixes: Store<Prefix>,
    pub(crate) ip_addresses: Store<IPAddress>,
    pub(crate) vlans: Store<NestedVlan>,
    pub(crate) tenants: Store<Tenant>,
    pub(crate) tenant_groups: Store<TenantGroup>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
    unavailable: Arc<AtomicBool>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            rirs: Arc::default(),
            vrfs: Arc::default(),
            aggregates: Arc::default(),
            prefixes: Arc::default(),
            ip_addresses: Arc::default(),
            vlans: Arc::default(),
            tenants: Arc::default(),
            tenant_groups: Arc::default(),
            next_id: Arc::new(Mutex::new(1)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail as if NetBox were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Add a prefix to the mock store (for test setup)
    pub fn add_prefix(&self, prefix: Prefix) {
        lock(&self.prefixes).insert(prefix.id, prefix);
    }

    /// Add an IP address to the mock store (for test setup)
    pub fn add_ip_address(&self, ip: IPAddress) {
        lock(&self.ip_addresses).insert(ip.id, ip);
    }

    /// Add a VLAN that prefixes may reference (for test setup)
    pub fn add_vlan(&self, id: u64, vid: u16, name: &str) {
        let vlan = NestedVlan {
            id,
            url: format!("{}/api/ipam/vlans/{}/", self.base_url, id),
            display: name.to_string(),
            vid,
            name: name.to_string(),
        };
        lock(&self.vlans).insert(id, vlan);
    }

    /// Number of objects currently stored across all collections
    pub fn object_count(&self) -> usize {
        lock(&self.rirs).len()
            + lock(&self.vrfs).len()
            + lock(&self.aggregates).len()
            + lock(&self.prefixes).len()
            + lock(&self.ip_addresses).len()
            + lock(&self.tenants).len()
            + lock(&self.tenant_groups).len()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = lock(&self.next_id);
        let current = *id;
        *id += 1;
        current
    }

    pub(crate) fn object_url(&self, endpoint: &str, id: u64) -> String {
        format!("{}/api/{}/{}/", self.base_url, endpoint, id)
    }

    pub(crate) fn check_available(&self) -> Result<(), NetBoxError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(NetBoxError::Api {
                status: 503,
                message: "mock NetBox is unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_connection(&self) -> Result<(), NetBoxError> {
        self.check_available()
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        ipam::get_rir(self, id)
    }

    async fn query_rirs(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Rir>, NetBoxError> {
        ipam::query_rirs(self, filters)
    }

    async fn create_rir(&self, request: &WritableRir) -> Result<Rir, NetBoxError> {
        ipam::write_rir(self, None, request)
    }

    async fn update_rir(&self, id: u64, request: &WritableRir) -> Result<Rir, NetBoxError> {
        ipam::write_rir(self, Some(id), request)
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.rirs, "RIR", id)
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        ipam::get_vrf(self, id)
    }

    async fn query_vrfs(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Vrf>, NetBoxError> {
        ipam::query_vrfs(self, filters)
    }

    async fn create_vrf(&self, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ipam::write_vrf(self, None, request)
    }

    async fn update_vrf(&self, id: u64, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ipam::write_vrf(self, Some(id), request)
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.vrfs, "VRF", id)
    }

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        ipam::get_aggregate(self, id)
    }

    async fn query_aggregates(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError> {
        ipam::query_aggregates(self, filters)
    }

    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::write_aggregate(self, None, request)
    }

    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::write_aggregate(self, Some(id), request)
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.aggregates, "Aggregate", id)
    }

    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        ipam::get_prefix(self, id)
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError> {
        ipam::query_prefixes(self, filters)
    }

    async fn create_prefix(&self, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        ipam::write_prefix(self, None, request)
    }

    async fn update_prefix(&self, id: u64, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        ipam::write_prefix(self, Some(id), request)
    }

    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.prefixes, "Prefix", id)
    }

    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        ipam::get_ip_address(self, id)
    }

    async fn query_ip_addresses(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<IPAddress>, NetBoxError> {
        ipam::query_ip_addresses(self, filters)
    }

    async fn create_ip_address(&self, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        ipam::write_ip_address(self, None, request)
    }

    async fn update_ip_address(&self, id: u64, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        ipam::write_ip_address(self, Some(id), request)
    }

    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_ip_address(self, id)
    }

    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        tenancy::get_tenant(self, id)
    }

    async fn query_tenants(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Tenant>, NetBoxError> {
        tenancy::query_tenants(self, filters)
    }

    async fn create_tenant(&self, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        tenancy::write_tenant(self, None, request)
    }

    async fn update_tenant(&self, id: u64, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
        tenancy::write_tenant(self, Some(id), request)
    }

    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.tenants, "Tenant", id)
    }

    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError> {
        tenancy::get_tenant_group(self, id)
    }

    async fn query_tenant_groups(&self, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<TenantGroup>, NetBoxError> {
        tenancy::query_tenant_groups(self, filters)
    }

    async fn create_tenant_group(&self, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        tenancy::write_tenant_group(self, None, request)
    }

    async fn update_tenant_group(&self, id: u64, request: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        tenancy::write_tenant_group(self, Some(id), request)
    }

    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete(self, &self.tenant_groups, "TenantGroup", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rir_request(name: &str, slug: &str) -> WritableRir {
        WritableRir {
            name: name.to_string(),
            slug: slug.to_string(),
            is_private: false,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let first = mock.create_rir(&rir_request("ARIN", "arin")).await.unwrap();
        let second = mock.create_rir(&rir_request("RIPE", "ripe")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.url, "http://test-netbox/api/ipam/rirs/1/");
    }

    #[tokio::test]
    async fn test_update_missing_object_is_not_found() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let err = mock.update_rir(99, &rir_request("ARIN", "arin")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        mock.set_unavailable(true);
        assert!(mock.validate_connection().await.is_err());
        assert!(mock.create_rir(&rir_request("ARIN", "arin")).await.is_err());
        assert_eq!(mock.object_count(), 0);

        mock.set_unavailable(false);
        assert!(mock.validate_connection().await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        mock.create_rir(&rir_request("ARIN", "arin")).await.unwrap();
        let err = mock.create_rir(&rir_request("ARIN 2", "arin")).await.unwrap_err();
        assert!(matches!(err, NetBoxError::InvalidRequest(_)));
    }
}
