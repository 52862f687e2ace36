//! `netbox_ipam_ip_address` - individual IP addresses
//!
//! NAT is modelled from the outside address: setting
//! `nat_inside_ip_address_id` on this address makes NetBox list it as the
//! peer's `nat_outside`. `nat_outside_ip_address_id` is therefore computed
//! and holds the first outside address NetBox reports.

use super::{Resource, read_failed, record_created, stored_id, write_failed};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::{IPAddress, NetBoxClientTrait, WritableIPAddress};

const DEFAULT_STATUS: &str = "active";

/// `netbox_ipam_ip_address` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct IpAddressResource;

fn request(data: &ResourceData) -> Result<WritableIPAddress, ProviderError> {
    Ok(WritableIPAddress {
        address: data.require_str("address")?.to_string(),
        status: data.get_non_empty("status").unwrap_or(DEFAULT_STATUS).to_string(),
        description: data.get_string("description"),
        role: data.get_non_empty("role").map(str::to_string),
        vrf: data.get_reference("vrf_id"),
        tenant: data.get_reference("tenant_id"),
        nat_inside: data.get_reference("nat_inside_ip_address_id"),
    })
}

fn nat_outside(ip: &IPAddress) -> Option<u64> {
    ip.nat_outside.first().map(|outside| outside.id)
}

#[async_trait::async_trait]
impl Resource for IpAddressResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_ip_address"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .attribute("ip_address_id", Attribute::int().computed())
            .attribute(
                "address",
                Attribute::string()
                    .required()
                    .with_description("IPv4 or IPv6 address with mask, e.g. 10.0.0.1/24"),
            )
            .attribute("vrf_id", Attribute::int().optional())
            .attribute("tenant_id", Attribute::int().optional())
            .attribute("nat_inside_ip_address_id", Attribute::int().optional())
            .attribute("nat_outside_ip_address_id", Attribute::int().computed())
            .attribute(
                "status",
                Attribute::string()
                    .with_default(DEFAULT_STATUS)
                    .with_description("active, reserved, deprecated, dhcp or slaac"),
            )
            .attribute(
                "role",
                Attribute::string()
                    .optional()
                    .with_description("loopback, secondary, anycast, vip, vrrp, hsrp, glbp or carp"),
            )
            .attribute("description", Attribute::string().optional())
    }

    fn identifier(&self, id: u64) -> String {
        format!("ipam/ip-address/{}", id)
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = request(data)?;
        let ip = client
            .create_ip_address(&request)
            .await
            .map_err(write_failed("create IP address"))?;

        record_created(data, self, "ip_address_id", ip.id);
        data.set_reference("nat_outside_ip_address_id", nat_outside(&ip));
        Ok(())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        let ip = client.get_ip_address(id).await.map_err(read_failed("read IP address"))?;

        data.set("ip_address_id", ip.id);
        data.set_reference("nat_outside_ip_address_id", nat_outside(&ip));
        data.set("address", ip.address);
        data.set("status", ip.status.value);
        data.set("role", ip.role.map(|r| r.value).unwrap_or_default());
        data.set("description", ip.description);
        data.set_reference("vrf_id", ip.vrf.map(|v| v.id));
        data.set_reference("tenant_id", ip.tenant.map(|t| t.id));
        data.set_reference("nat_inside_ip_address_id", ip.nat_inside.map(|n| n.id));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client
            .update_ip_address(id, &request(data)?)
            .await
            .map_err(write_failed("update IP address"))?;
        Ok(())
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, data: &ResourceData) -> Result<(), ProviderError> {
        let id = stored_id(data)?;
        client.delete_ip_address(id).await.map_err(write_failed("delete IP address"))
    }
}
