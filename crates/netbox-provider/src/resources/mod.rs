//! Managed resources
//!
//! Each resource maps one NetBox collection onto create/read/update/delete:
//! extract fields from state, build the writable request, call NetBox and
//! copy the response back into state.
//!
//! - `rir.rs` - `netbox_ipam_rir`
//! - `vrf.rs` - `netbox_ipam_vrf`
//! - `aggregate.rs` - `netbox_ipam_aggregate`
//! - `prefix.rs` - `netbox_ipam_prefix`
//! - `ip_address.rs` - `netbox_ipam_ip_address`
//! - `tenant.rs` - `netbox_org_tenant`
//! - `tenant_group.rs` - `netbox_org_tenant_group`

mod aggregate;
mod ip_address;
mod prefix;
mod rir;
mod tenant;
mod tenant_group;
mod vrf;

pub use aggregate::AggregateResource;
pub use ip_address::IpAddressResource;
pub use prefix::PrefixResource;
pub use rir::RirResource;
pub use tenant::TenantResource;
pub use tenant_group::TenantGroupResource;
pub use vrf::VrfResource;

use crate::error::ProviderError;
use crate::schema::Schema;
use crate::state::{ResourceData, parse_identifier};
use netbox_client::{NetBoxClientTrait, NetBoxError};
use tracing::{debug, error};

/// A managed resource type
///
/// `create` records the new identifier in state and leaves state untouched on
/// failure. `read` overwrites state with what NetBox returns, or fails without
/// touching it. `update` and `delete` never write state.
#[async_trait::async_trait]
pub trait Resource: Send + Sync {
    /// Registered type name, e.g. `netbox_ipam_vrf`
    fn type_name(&self) -> &'static str;

    /// Attribute schema of the resource
    fn schema(&self) -> Schema;

    /// Persisted identifier for a NetBox ID, e.g. `ipam/vrf/42`
    fn identifier(&self, id: u64) -> String;

    /// Create the object and record its identifier
    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Refresh state from NetBox
    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Replace the object with the desired state (PUT)
    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError>;

    /// Delete the object; failures propagate
    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError>;

    /// Adopt an existing NetBox object by identifier (`ipam/vrf/42` or `42`)
    async fn import(&self, client: &dyn NetBoxClientTrait, identifier: &str) -> Result<ResourceData, ProviderError> {
        let id = parse_identifier(identifier)?;
        debug!("Importing {} {}", self.type_name(), id);

        let mut data = ResourceData::new();
        data.set_id(self.identifier(id));
        self.read(client, &mut data).await?;
        Ok(data)
    }
}

/// NetBox ID stored in the resource identifier
pub(crate) fn stored_id(data: &ResourceData) -> Result<u64, ProviderError> {
    parse_identifier(data.id())
}

/// Record the identifier and ID attribute of a freshly created object
pub(crate) fn record_created(data: &mut ResourceData, resource: &dyn Resource, id_attribute: &str, id: u64) {
    data.set_id(resource.identifier(id));
    data.set(id_attribute, id);
    debug!("Created {} {}", resource.type_name(), data.id());
}

pub(crate) fn read_failed(operation: &'static str) -> impl FnOnce(NetBoxError) -> ProviderError {
    move |source| {
        error!("{} failed: {}", operation, source);
        ProviderError::RemoteRead { operation, source }
    }
}

pub(crate) fn write_failed(operation: &'static str) -> impl FnOnce(NetBoxError) -> ProviderError {
    move |source| {
        error!("{} failed: {}", operation, source);
        ProviderError::RemoteWrite { operation, source }
    }
}
