//! NetBox API models
//!
//! Read models match the NetBox REST API serializers for the IPAM and
//! tenancy collections. The `Writable*` structs are the request bodies sent
//! on create (POST) and update (PUT); nested references are written as bare
//! numeric IDs, exactly as NetBox expects them.
//!
//! See: netbox/netbox/ipam/api/serializers_/ and netbox/netbox/tenancy/api/

use serde::{Deserialize, Serialize};

/// Choice field as rendered by NetBox (`{"value": ..., "label": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice<T> {
    /// Raw value sent to and accepted by the API
    pub value: T,
    /// Human-readable label
    pub label: String,
}

impl<T> Choice<T> {
    /// Choice with the given value and label
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Regional Internet Registry matching NetBox RIRSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rir {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
    /// Address space is private (RFC 1918 and similar)
    #[serde(default)]
    pub is_private: bool,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// VRF matching NetBox VRFSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Vrf {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// Route distinguisher (RFC 4364)
    #[serde(default)]
    pub rd: Option<String>,
    /// Owning tenant
    #[serde(default)]
    pub tenant: Option<NestedTenant>,
    /// Prevent duplicate prefixes/IP addresses within this VRF
    #[serde(default)]
    pub enforce_unique: bool,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Free-text comments
    #[serde(default)]
    pub comments: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Aggregate matching NetBox AggregateSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Aggregate {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Address family (4 or 6)
    pub family: Choice<u8>,
    /// CIDR prefix, e.g. "10.0.0.0/8"
    pub prefix: String,
    /// Registry the aggregate was delegated by
    pub rir: NestedRir,
    /// Owning tenant
    #[serde(default)]
    pub tenant: Option<NestedTenant>,
    /// Date the aggregate was added
    #[serde(default)]
    pub date_added: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Prefix model matching NetBox PrefixSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Prefix {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Address family (4 or 6)
    pub family: Choice<u8>,
    /// CIDR prefix, e.g. "192.168.1.0/24"
    pub prefix: String,
    /// VRF the object lives in; `None` for the global table
    #[serde(default)]
    pub vrf: Option<NestedVrf>,
    /// Owning tenant
    #[serde(default)]
    pub tenant: Option<NestedTenant>,
    /// VLAN the prefix is assigned to
    #[serde(default)]
    pub vlan: Option<NestedVlan>,
    /// Operational status
    pub status: Choice<String>,
    /// Functional role
    #[serde(default)]
    pub role: Option<NestedRole>,
    /// All IP addresses within the prefix are usable
    #[serde(default)]
    pub is_pool: bool,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// IP Address model matching NetBox IPAddressSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IPAddress {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Address family (4 or 6)
    pub family: Choice<u8>,
    /// IP address with mask, e.g. "192.168.1.1/24"
    pub address: String,
    /// VRF the object lives in; `None` for the global table
    #[serde(default)]
    pub vrf: Option<NestedVrf>,
    /// Owning tenant
    #[serde(default)]
    pub tenant: Option<NestedTenant>,
    /// Operational status
    pub status: Choice<String>,
    /// Functional role (IPAddressRoleChoices)
    #[serde(default)]
    pub role: Option<Choice<String>>,
    /// Inside address this address is the NAT outside of
    #[serde(default)]
    pub nat_inside: Option<NestedIPAddress>,
    /// Outside addresses that NAT to this address
    #[serde(default)]
    pub nat_outside: Vec<NestedIPAddress>,
    /// Hostname or FQDN
    #[serde(default)]
    pub dns_name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Tenant model (from Tenancy API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Tenant {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
    /// Tenant group the tenant belongs to
    #[serde(default)]
    pub group: Option<NestedTenantGroup>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Free-text comments
    #[serde(default)]
    pub comments: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Tenant Group model (from Tenancy API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantGroup {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
    /// Parent tenant group
    #[serde(default)]
    pub parent: Option<NestedTenantGroup>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    #[serde(default)]
    pub last_updated: Option<String>,
}

// Request bodies (create/update)

/// Request body for creating or replacing a RIR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableRir {
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
    /// Address space is private (RFC 1918 and similar)
    pub is_private: bool,
    /// Free-text description; sent as `""` when unset
    pub description: String,
}

/// Request body for creating or replacing a VRF
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableVrf {
    /// Name
    pub name: String,
    /// Route distinguisher; sent as `""` when unset
    pub rd: String,
    /// Prevent duplicate prefixes/IP addresses within this VRF
    pub enforce_unique: bool,
    /// Free-text description; sent as `""` when unset
    pub description: String,
    /// Tenant ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<u64>,
}

/// Request body for creating or replacing an aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableAggregate {
    /// CIDR prefix
    pub prefix: String,
    /// RIR ID
    pub rir: u64,
    /// Free-text description; sent as `""` when unset
    pub description: String,
}

/// Request body for creating or replacing a prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritablePrefix {
    /// CIDR prefix
    pub prefix: String,
    /// Status value, e.g. `active`
    pub status: String,
    /// All IP addresses within the prefix are usable
    pub is_pool: bool,
    /// Free-text description; sent as `""` when unset
    pub description: String,
    /// VRF ID; omitted for the global table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<u64>,
    /// VLAN ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u64>,
    /// Tenant ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<u64>,
}

/// Request body for creating or replacing an IP address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableIPAddress {
    /// IP address with mask
    pub address: String,
    /// Status value, e.g. `active`
    pub status: String,
    /// Free-text description; sent as `""` when unset
    pub description: String,
    /// Role value (`vip`, `anycast`, ...); omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// VRF ID; omitted for the global table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<u64>,
    /// Tenant ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<u64>,
    /// Inside IP address ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_inside: Option<u64>,
}

/// Request body for creating or replacing a tenant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableTenant {
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
    /// Free-text description; sent as `""` when unset
    pub description: String,
    /// Free-text comments; sent as `""` when unset
    pub comments: String,
    /// Tenant group ID; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<u64>,
}

/// Request body for creating or replacing a tenant group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableTenantGroup {
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
}

// Nested serializers (simplified versions for references)

/// Brief RIR reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedRir {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
}

/// Brief VRF reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedVrf {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// Route distinguisher (RFC 4364)
    #[serde(default)]
    pub rd: Option<String>,
}

/// Brief tenant reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedTenant {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
}

/// Brief tenant group reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedTenantGroup {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
}

/// Brief VLAN reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedVlan {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// 802.1Q VLAN ID
    pub vid: u16,
    /// Name
    pub name: String,
}

/// Brief prefix/VLAN role reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedRole {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// Name
    pub name: String,
    /// URL-friendly unique shorthand
    pub slug: String,
}

/// Brief IP address reference embedded in other objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    /// Numeric object ID
    pub id: u64,
    /// API URL of the object
    #[serde(default)]
    pub url: String,
    /// Display string rendered by NetBox
    #[serde(default)]
    pub display: String,
    /// IP address with mask
    pub address: String,
}
