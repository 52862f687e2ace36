//! `netbox_ip_address` - look up one IP address by ID or search terms
//!
//! Choice fields (status, family, role) are reported by label, related
//! objects (VRF, tenant) by name.

use super::{DataSource, SearchFilters, single_match};
use crate::error::ProviderError;
use crate::resources::read_failed;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{IPAddress, NetBoxClientTrait};

/// `netbox_ip_address` data source
#[derive(Debug, Clone, Copy, Default)]
pub struct IpAddressDataSource;

/// Tenant names are searched by slug: "Acme Corp" -> "acme-corp"
fn slugify(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}

fn parse(data: &mut ResourceData, ip: IPAddress) {
    data.set_id(ip.id.to_string());
    data.set("created", ip.created.unwrap_or_default());
    data.set("last_updated", ip.last_updated.unwrap_or_default());
    data.set("description", ip.description);
    data.set("status", ip.status.label);
    data.set("family", ip.family.label);
    data.set("address", ip.address);
    if let Some(vrf) = ip.vrf {
        data.set("vrf", vrf.name);
    }
    if let Some(role) = ip.role {
        data.set("role", role.label);
    }
    if let Some(tenant) = ip.tenant {
        data.set("tenant", tenant.name);
    }
}

#[async_trait::async_trait]
impl DataSource for IpAddressDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_ip_address"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("ip_address_id", Attribute::int().optional())
            .attribute("query", Attribute::string().optional())
            .attribute(
                "family",
                Attribute::string()
                    .optional()
                    .computed()
                    .with_description("4 or 6 when searching; the family label once read"),
            )
            .attribute(
                "parent",
                Attribute::string()
                    .optional()
                    .with_description("Only match addresses inside this prefix"),
            )
            .attribute("tenant", Attribute::string().optional().computed())
            .attribute("role", Attribute::string().optional().computed())
            .attribute("address", Attribute::string().computed())
            .attribute("created", Attribute::string().computed())
            .attribute("description", Attribute::string().computed())
            .attribute("status", Attribute::string().computed())
            .attribute("vrf", Attribute::string().computed())
            .attribute("last_updated", Attribute::string().computed())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let ip = match data.get_reference("ip_address_id") {
            Some(id) => client.get_ip_address(id).await.map_err(read_failed("read IP address"))?,
            None => {
                let mut filters = SearchFilters::default();
                filters.push_attribute(data, "query", "q");
                filters.push_attribute(data, "family", "family");
                filters.push_attribute(data, "parent", "parent");
                if let Some(tenant) = data.get_non_empty("tenant") {
                    filters.push("tenant", slugify(tenant));
                }
                filters.push_attribute(data, "role", "role");

                let results = client
                    .query_ip_addresses(&filters.query(), false)
                    .await
                    .map_err(read_failed("search IP addresses"))?;
                single_match("IPAddress", results)?
            }
        };

        parse(data, ip);
        Ok(())
    }
}
