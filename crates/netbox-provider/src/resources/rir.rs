//! `netbox_ipam_rir` - Regional Internet Registries

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritableRir};

/// `netbox_ipam_rir` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct RirResource;

fn request(data: &ResourceData) -> Result<WritableRir, ProviderError> {
    Ok(WritableRir {
        name: data.require_str("name")?.to_string(),
        slug: data.require_str("slug")?.to_string(),
        is_private: data.get_bool("is_private").unwrap_or(false),
        description: data.get_string("description"),
    })
}

#[async_trait::async_trait]
impl Resource for RirResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_rir"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("rir_id", Attribute::int().computed())
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
            .attribute(
                "is_private",
                Attribute::bool()
                    .with_default(false)
                    .with_description("IP space managed by this RIR is considered private"),
            )
            .attribute("description", Attribute::string().optional())
    }

    fn identifier(&self, id: u64) -> String {
        format!("ipam/rir/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let rir = client.create_rir(&request).await.map_err(write_failed("create RIR"))?;
        record_created(data, self, "rir_id", rir.id);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let rir = client.get_rir(id).await.map_err(read_failed("read RIR"))?;

        data.set("rir_id", rir.id);
        data.set("name", rir.name);
        data.set("slug", rir.slug);
        data.set("is_private", rir.is_private);
        data.set("description", rir.description);
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_rir(id, &request(data)?)
            .await
            .map_err(write_failed("update RIR"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_rir(id).await.map_err(write_failed("delete RIR"))
    }
}
