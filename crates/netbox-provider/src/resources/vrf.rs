//! `netbox_ipam_vrf` - VRF domains
//!
//! The route distinguisher is required. The tenant reference is only sent
//! when a non-zero `tenant_id` is present.

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, WritableVrf};

/// `netbox_ipam_vrf` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct VrfResource;

fn request(data: &ResourceData) -> Result<WritableVrf, ProviderError> {
    Ok(WritableVrf {
        name: data.require_str("name")?.to_string(),
        rd: data.require_str("route_distinguisher")?.to_string(),
        enforce_unique: data.get_bool("enforce_unique").unwrap_or(false),
        description: data.get_string("description"),
        tenant: data.get_reference("tenant_id"),
    })
}

#[async_trait::async_trait]
impl Resource for VrfResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_vrf"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("vrf_id", Attribute::int().computed())
            .attribute("name", Attribute::string().required())
            .attribute(
                "route_distinguisher",
                Attribute::string()
                    .required()
                    .with_description("Route distinguisher, e.g. 65000:1"),
            )
            .attribute(
                "enforce_unique",
                Attribute::bool()
                    .with_default(false)
                    .with_description("Prevent duplicate prefixes/IP addresses within this VRF"),
            )
            .attribute("description", Attribute::string().optional())
            .attribute("tenant_id", Attribute::int().optional())
    }

    fn identifier(&self, id: u64) -> String {
        format!("ipam/vrf/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let vrf = client.create_vrf(&request).await.map_err(write_failed("create VRF"))?;
        record_created(data, self, "vrf_id", vrf.id);
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let vrf = client.get_vrf(id).await.map_err(read_failed("read VRF"))?;

        data.set("vrf_id", vrf.id);
        data.set("name", vrf.name);
        data.set("route_distinguisher", vrf.rd.unwrap_or_default());
        data.set("enforce_unique", vrf.enforce_unique);
        data.set("description", vrf.description);
        data.set_reference("tenant_id", vrf.tenant.map(|t| t.id));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_vrf(id, &request(data)?)
            .await
            .map_err(write_failed("update VRF"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_vrf(id).await.map_err(write_failed("delete VRF"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_unset_tenant() {
        let data = ResourceData::new()
            .with("name", "prod-vrf")
            .with("route_distinguisher", "65000:1")
            .with("enforce_unique", true)
            .with("tenant_id", 0);

        let body = serde_json::to_value(request(&data).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "prod-vrf",
                "rd": "65000:1",
                "enforce_unique": true,
                "description": ""
            })
        );
    }

    #[test]
    fn test_request_requires_route_distinguisher() {
        let data = ResourceData::new().with("name", "prod-vrf");
        assert!(matches!(
            request(&data),
            Err(ProviderError::MissingAttribute { name }) if name == "route_distinguisher"
        ));
    }
}
