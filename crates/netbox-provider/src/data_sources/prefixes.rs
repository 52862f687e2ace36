//! `netbox_prefixes` - look up one prefix by ID, VLAN or search terms

use super::{DataSource, SearchFilters, single_match};
use crate::error::ProviderError;
use crate::resources::read_failed;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{NetBoxClientTrait, Prefix};

/// `netbox_prefixes` data source
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixesDataSource;

fn parse(data: &mut ResourceData, prefix: Prefix) {
    data.set_id(prefix.id.to_string());
    data.set("created", prefix.created.unwrap_or_default());
    data.set("last_updated", prefix.last_updated.unwrap_or_default());
    data.set("description", prefix.description);
    data.set("family", prefix.family.label);
    data.set("is_pool", prefix.is_pool);
    data.set("prefix", prefix.prefix);
    data.set("status", prefix.status.label);
    if let Some(vlan) = prefix.vlan {
        data.set("vlan_vid", vlan.vid);
    }
}

#[async_trait::async_trait]
impl DataSource for PrefixesDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_prefixes"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute(
                "prefixes_id",
                Attribute::int().optional().conflicts_with(&["vlan_vid"]),
            )
            .attribute(
                "vlan_vid",
                Attribute::int().optional().computed().conflicts_with(&["prefixes_id"]),
            )
            .attribute("prefix", Attribute::string().optional().computed())
            .attribute("family", Attribute::string().optional().computed())
            .attribute("query", Attribute::string().optional())
            .attribute("tenant", Attribute::string().optional())
            .attribute("site", Attribute::string().optional())
            .attribute("role", Attribute::string().optional())
            .attribute("created", Attribute::string().computed())
            .attribute("description", Attribute::string().computed())
            .attribute("is_pool", Attribute::bool().computed())
            .attribute("last_updated", Attribute::string().computed())
            .attribute("status", Attribute::string().computed())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let prefix = match data.get_reference("prefixes_id") {
            Some(id) => client.get_prefix(id).await.map_err(read_failed("read prefix"))?,
            None => {
                let mut filters = SearchFilters::default();
                // VLAN 0 is the unset value, not a filter
                if let Some(vid) = data.get_reference("vlan_vid") {
                    filters.push("vlan_vid", vid.to_string());
                }
                filters.push_attribute(data, "prefix", "prefix");
                filters.push_attribute(data, "query", "q");
                filters.push_attribute(data, "tenant", "tenant");
                filters.push_attribute(data, "site", "site");
                filters.push_attribute(data, "role", "role");
                filters.push_attribute(data, "family", "family");

                let results = client
                    .query_prefixes(&filters.query(), false)
                    .await
                    .map_err(read_failed("search prefixes"))?;
                single_match("Prefix", results)?
            }
        };

        parse(data, prefix);
        Ok(())
    }
}
