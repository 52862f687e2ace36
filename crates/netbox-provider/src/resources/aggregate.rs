//! `netbox_ipam_aggregate` - top-level address blocks
//!
//! Unlike the other resources the identifier is the bare NetBox ID (`"5"`)
//! and there is no computed ID attribute.

use super::{Resource, read_failed, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritableAggregate};
use tracing::debug;

/// `netbox_ipam_aggregate` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateResource;

fn request(data: &ResourceData) -> Result<WritableAggregate, ProviderError> {
    Ok(WritableAggregate {
        prefix: data.require_str("prefix")?.to_string(),
        rir: data.require_reference("rir_id")?,
        description: data.get_string("description"),
    })
}

#[async_trait::async_trait]
impl Resource for AggregateResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_aggregate"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("prefix", Attribute::string().required())
            .attribute("rir_id", Attribute::int().required())
            .attribute("description", Attribute::string().optional())
    }

    fn identifier(&self, id: u64) -> String {
        id.to_string()
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let aggregate = client
            .create_aggregate(&request)
            .await
            .map_err(write_failed("create aggregate"))?;

        data.set_id(self.identifier(aggregate.id));
        debug!("Created aggregate {} ({})", aggregate.id, aggregate.prefix);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let aggregate = client.get_aggregate(id).await.map_err(read_failed("read aggregate"))?;

        data.set("prefix", aggregate.prefix);
        data.set("rir_id", aggregate.rir.id);
        data.set("description", aggregate.description);
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_aggregate(id, &request(data)?)
            .await
            .map_err(write_failed("update aggregate"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_aggregate(id).await.map_err(write_failed("delete aggregate"))
    }
}
