//! `netbox_org_tenant_group` - tenant groups

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritableTenantGroup};

/// `netbox_org_tenant_group` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantGroupResource;

fn request(data: &ResourceData) -> Result<WritableTenantGroup, ProviderError> {
    Ok(WritableTenantGroup {
        name: data.require_str("name")?.to_string(),
        slug: data.require_str("slug")?.to_string(),
    })
}

#[async_trait::async_trait]
impl Resource for TenantGroupResource {
    fn type_name(&self) -> &'static str {
        "netbox_org_tenant_group"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("tenant_group_id", Attribute::int().computed())
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
    }

    fn identifier(&self, id: u64) -> String {
        format!("org/tenant-group/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let group = client
            .create_tenant_group(&request)
            .await
            .map_err(write_failed("create tenant group"))?;
        record_created(data, self, "tenant_group_id", group.id);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let group = client.get_tenant_group(id).await.map_err(read_failed("read tenant group"))?;

        data.set("tenant_group_id", group.id);
        data.set("name", group.name);
        data.set("slug", group.slug);
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_tenant_group(id, &request(data)?)
            .await
            .map_err(write_failed("update tenant group"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .delete_tenant_group(id)
            .await
            .map_err(write_failed("delete tenant group"))
    }
}
