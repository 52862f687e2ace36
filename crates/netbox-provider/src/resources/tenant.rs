//! `netbox_org_tenant` - tenants

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritableTenant};

/// `netbox_org_tenant` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantResource;

fn request(data: &ResourceData) -> Result<WritableTenant, ProviderError> {
    Ok(WritableTenant {
        name: data.require_str("name")?.to_string(),
        slug: data.require_str("slug")?.to_string(),
        description: data.get_string("description"),
        comments: data.get_string("comments"),
        group: data.get_reference("tenant_group_id"),
    })
}

#[async_trait::async_trait]
impl Resource for TenantResource {
    fn type_name(&self) -> &'static str {
        "netbox_org_tenant"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("tenant_id", Attribute::int().computed())
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
            .attribute("description", Attribute::string().optional())
            .attribute("comments", Attribute::string().optional())
            .attribute("tenant_group_id", Attribute::int().optional())
    }

    fn identifier(&self, id: u64) -> String {
        format!("org/tenant/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let tenant = client.create_tenant(&request).await.map_err(write_failed("create tenant"))?;
        record_created(data, self, "tenant_id", tenant.id);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let tenant = client.get_tenant(id).await.map_err(read_failed("read tenant"))?;

        data.set("tenant_id", tenant.id);
        data.set("name", tenant.name);
        data.set("slug", tenant.slug);
        data.set("description", tenant.description);
        data.set("comments", tenant.comments);
        data.set_reference("tenant_group_id", tenant.group.map(|g| g.id));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_tenant(id, &request(data)?)
            .await
            .map_err(write_failed("update tenant"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_tenant(id).await.map_err(write_failed("delete tenant"))
    }
}
