//! `netbox_ipam_prefix` - IPv4/IPv6 prefixes

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritablePrefix};

/// NetBox's default prefix status
const DEFAULT_STATUS: &str = "active";

/// `netbox_ipam_prefix` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixResource;

fn request(data: &ResourceData) -> Result<WritablePrefix, ProviderError> {
    Ok(WritablePrefix {
        prefix: data.require_str("prefix")?.to_string(),
        status: data.get_non_empty("status").unwrap_or(DEFAULT_STATUS).to_string(),
        is_pool: data.get_bool("is_pool").unwrap_or(false),
        description: data.get_string("description"),
        vrf: data.get_reference("vrf_id"),
        vlan: data.get_reference("vlan_id"),
        tenant: data.get_reference("tenant_id"),
    })
}

#[async_trait::async_trait]
impl Resource for PrefixResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_prefix"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("prefix_id", Attribute::int().computed())
            .attribute("prefix", Attribute::string().required())
            .attribute("vrf_id", Attribute::int().optional())
            .attribute("vlan_id", Attribute::int().optional())
            .attribute("tenant_id", Attribute::int().optional())
            .attribute(
                "is_pool",
                Attribute::bool()
                    .with_default(false)
                    .with_description("All IP addresses within this prefix are considered usable"),
            )
            .attribute("description", Attribute::string().optional())
            .attribute(
                "status",
                Attribute::string()
                    .with_default(DEFAULT_STATUS)
                    .with_description("container, active, reserved or deprecated"),
            )
    }

    fn identifier(&self, id: u64) -> String {
        format!("ipam/prefix/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let prefix = client.create_prefix(&request).await.map_err(write_failed("create prefix"))?;
        record_created(data, self, "prefix_id", prefix.id);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let prefix = client.get_prefix(id).await.map_err(read_failed("read prefix"))?;

        data.set("prefix_id", prefix.id);
        data.set("prefix", prefix.prefix);
        data.set("status", prefix.status.value);
        data.set("is_pool", prefix.is_pool);
        data.set("description", prefix.description);
        data.set_reference("vrf_id", prefix.vrf.map(|v| v.id));
        data.set_reference("vlan_id", prefix.vlan.map(|v| v.id));
        data.set_reference("tenant_id", prefix.tenant.map(|t| t.id));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_prefix(id, &request(data)?)
            .await
            .map_err(write_failed("update prefix"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_prefix(id).await.map_err(write_failed("delete prefix"))
    }
}
