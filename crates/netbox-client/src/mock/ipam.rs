//! IPAM operations for MockNetBoxClient
//!
//! Handles RIRs, VRFs, aggregates, prefixes and IP addresses. Filters the mock
//! does not model (e.g. `site`, `parent`) are ignored.

use super::helpers::*;
use super::{MockNetBoxClient, Store};
use crate::error::NetBoxError;
use crate::models::*;

pub(crate) fn delete<T>(client: &MockNetBoxClient, store: &Store<T>, kind: &str, id: u64) -> Result<(), NetBoxError> {
    client.check_available()?;
    lock(store)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

pub(super) fn get<T: Clone>(client: &MockNetBoxClient, store: &Store<T>, kind: &str, id: u64) -> Result<T, NetBoxError> {
    client.check_available()?;
    lock(store)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

/// Resolve the ID for a write: a fresh one on create, the existing one on update
pub(super) fn resolve_id<T>(
    client: &MockNetBoxClient,
    store: &Store<T>,
    kind: &str,
    id: Option<u64>,
    created: impl Fn(&T) -> Option<String>,
) -> Result<(u64, Option<String>), NetBoxError> {
    match id {
        Some(id) => {
            let objects = lock(store);
            let existing = objects
                .get(&id)
                .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))?;
            Ok((id, created(existing)))
        }
        None => Ok((client.next_id(), timestamp())),
    }
}

fn resolve_tenant(client: &MockNetBoxClient, id: Option<u64>) -> Result<Option<NestedTenant>, NetBoxError> {
    id.map(|id| {
        lock(&client.tenants)
            .get(&id)
            .map(nested_tenant)
            .ok_or_else(|| related_not_found("tenant", id))
    })
    .transpose()
}

fn resolve_vrf(client: &MockNetBoxClient, id: Option<u64>) -> Result<Option<NestedVrf>, NetBoxError> {
    id.map(|id| {
        lock(&client.vrfs)
            .get(&id)
            .map(nested_vrf)
            .ok_or_else(|| related_not_found("vrf", id))
    })
    .transpose()
}

fn tenant_matches(tenant: Option<&NestedTenant>, slug: Option<&str>) -> bool {
    match slug {
        Some(slug) => tenant.is_some_and(|t| t.slug == slug),
        None => true,
    }
}

// RIRs

pub(crate) fn get_rir(client: &MockNetBoxClient, id: u64) -> Result<Rir, NetBoxError> {
    get(client, &client.rirs, "RIR", id)
}

pub(crate) fn query_rirs(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<Rir>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.rirs)
        .values()
        .filter(|r| filter(filters, "name").is_none_or(|n| r.name == n))
        .filter(|r| filter(filters, "slug").is_none_or(|s| r.slug == s))
        .filter(|r| filter(filters, "q").is_none_or(|q| matches_query(q, &[&r.name, &r.slug, &r.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_rir(client: &MockNetBoxClient, id: Option<u64>, request: &WritableRir) -> Result<Rir, NetBoxError> {
    client.check_available()?;
    if lock(&client.rirs)
        .values()
        .any(|r| r.slug == request.slug && Some(r.id) != id)
    {
        return Err(NetBoxError::InvalidRequest(format!(
            "{{\"slug\": [\"rir with this slug already exists: {}\"]}}",
            request.slug
        )));
    }

    let (id, created) = resolve_id(client, &client.rirs, "RIR", id, |r| r.created.clone())?;
    let rir = Rir {
        id,
        url: client.object_url("ipam/rirs", id),
        display: request.name.clone(),
        name: request.name.clone(),
        slug: request.slug.clone(),
        is_private: request.is_private,
        description: request.description.clone(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.rirs).insert(id, rir.clone());
    Ok(rir)
}

// VRFs

pub(crate) fn get_vrf(client: &MockNetBoxClient, id: u64) -> Result<Vrf, NetBoxError> {
    get(client, &client.vrfs, "VRF", id)
}

pub(crate) fn query_vrfs(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<Vrf>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.vrfs)
        .values()
        .filter(|v| filter(filters, "name").is_none_or(|n| v.name == n))
        .filter(|v| filter(filters, "rd").is_none_or(|rd| v.rd.as_deref() == Some(rd)))
        .filter(|v| tenant_matches(v.tenant.as_ref(), filter(filters, "tenant")))
        .filter(|v| filter(filters, "q").is_none_or(|q| matches_query(q, &[&v.name, v.rd.as_deref().unwrap_or_default(), &v.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_vrf(client: &MockNetBoxClient, id: Option<u64>, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
    client.check_available()?;
    let tenant = resolve_tenant(client, request.tenant)?;
    let (id, created) = resolve_id(client, &client.vrfs, "VRF", id, |v| v.created.clone())?;
    let vrf = Vrf {
        id,
        url: client.object_url("ipam/vrfs", id),
        display: format!("{} ({})", request.name, request.rd),
        name: request.name.clone(),
        rd: Some(request.rd.clone()),
        tenant,
        enforce_unique: request.enforce_unique,
        description: request.description.clone(),
        comments: String::new(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.vrfs).insert(id, vrf.clone());
    Ok(vrf)
}

// Aggregates

pub(crate) fn get_aggregate(client: &MockNetBoxClient, id: u64) -> Result<Aggregate, NetBoxError> {
    get(client, &client.aggregates, "Aggregate", id)
}

pub(crate) fn query_aggregates(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<Aggregate>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.aggregates)
        .values()
        .filter(|a| filter(filters, "prefix").is_none_or(|p| a.prefix == p))
        .filter(|a| filter(filters, "rir").is_none_or(|slug| a.rir.slug == slug))
        .filter(|a| filter(filters, "q").is_none_or(|q| matches_query(q, &[&a.prefix, &a.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_aggregate(client: &MockNetBoxClient, id: Option<u64>, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
    client.check_available()?;
    let rir = lock(&client.rirs)
        .get(&request.rir)
        .map(nested_rir)
        .ok_or_else(|| related_not_found("rir", request.rir))?;
    let (id, created) = resolve_id(client, &client.aggregates, "Aggregate", id, |a| a.created.clone())?;
    let aggregate = Aggregate {
        id,
        url: client.object_url("ipam/aggregates", id),
        display: request.prefix.clone(),
        family: family_of(&request.prefix),
        prefix: request.prefix.clone(),
        rir,
        tenant: None,
        date_added: None,
        description: request.description.clone(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.aggregates).insert(id, aggregate.clone());
    Ok(aggregate)
}

// Prefixes

pub(crate) fn get_prefix(client: &MockNetBoxClient, id: u64) -> Result<Prefix, NetBoxError> {
    get(client, &client.prefixes, "Prefix", id)
}

pub(crate) fn query_prefixes(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<Prefix>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.prefixes)
        .values()
        .filter(|p| filter(filters, "prefix").is_none_or(|prefix| p.prefix == prefix))
        .filter(|p| filter(filters, "vlan_vid").is_none_or(|vid| p.vlan.as_ref().is_some_and(|v| v.vid.to_string() == vid)))
        .filter(|p| filter(filters, "family").is_none_or(|f| p.family.value.to_string() == f))
        .filter(|p| filter(filters, "role").is_none_or(|slug| p.role.as_ref().is_some_and(|r| r.slug == slug)))
        .filter(|p| tenant_matches(p.tenant.as_ref(), filter(filters, "tenant")))
        .filter(|p| filter(filters, "q").is_none_or(|q| matches_query(q, &[&p.prefix, &p.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_prefix(client: &MockNetBoxClient, id: Option<u64>, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
    client.check_available()?;
    let vrf = resolve_vrf(client, request.vrf)?;
    let tenant = resolve_tenant(client, request.tenant)?;
    let vlan = request
        .vlan
        .map(|id| {
            lock(&client.vlans)
                .get(&id)
                .cloned()
                .ok_or_else(|| related_not_found("vlan", id))
        })
        .transpose()?;

    let (id, created) = resolve_id(client, &client.prefixes, "Prefix", id, |p| p.created.clone())?;
    let prefix = Prefix {
        id,
        url: client.object_url("ipam/prefixes", id),
        display: request.prefix.clone(),
        family: family_of(&request.prefix),
        prefix: request.prefix.clone(),
        vrf,
        tenant,
        vlan,
        status: choice(&request.status),
        role: None,
        is_pool: request.is_pool,
        description: request.description.clone(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.prefixes).insert(id, prefix.clone());
    Ok(prefix)
}

// IP addresses

pub(crate) fn get_ip_address(client: &MockNetBoxClient, id: u64) -> Result<IPAddress, NetBoxError> {
    get(client, &client.ip_addresses, "IP address", id)
}

pub(crate) fn query_ip_addresses(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<IPAddress>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.ip_addresses)
        .values()
        .filter(|ip| filter(filters, "address").is_none_or(|a| ip.address == a))
        .filter(|ip| filter(filters, "family").is_none_or(|f| ip.family.value.to_string() == f))
        .filter(|ip| filter(filters, "role").is_none_or(|role| ip.role.as_ref().is_some_and(|r| r.value == role)))
        .filter(|ip| filter(filters, "vrf_id").is_none_or(|vrf| ip.vrf.as_ref().is_some_and(|v| v.id.to_string() == vrf)))
        .filter(|ip| tenant_matches(ip.tenant.as_ref(), filter(filters, "tenant")))
        .filter(|ip| filter(filters, "q").is_none_or(|q| matches_query(q, &[&ip.address, &ip.dns_name, &ip.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_ip_address(client: &MockNetBoxClient, id: Option<u64>, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
    client.check_available()?;
    let vrf = resolve_vrf(client, request.vrf)?;
    let tenant = resolve_tenant(client, request.tenant)?;
    let (id, created) = resolve_id(client, &client.ip_addresses, "IP address", id, |ip| ip.created.clone())?;

    let mut addresses = lock(&client.ip_addresses);
    let nat_inside = match request.nat_inside {
        Some(inside) if inside == id => {
            return Err(NetBoxError::InvalidRequest(
                "{\"nat_inside\": [\"An IP address cannot be its own NAT inside address\"]}".to_string(),
            ));
        }
        Some(inside) => Some(
            addresses
                .get(&inside)
                .map(nested_ip_address)
                .ok_or_else(|| related_not_found("nat_inside", inside))?,
        ),
        None => None,
    };
    let nat_outside = addresses
        .get(&id)
        .map(|existing| existing.nat_outside.clone())
        .unwrap_or_default();

    let ip = IPAddress {
        id,
        url: client.object_url("ipam/ip-addresses", id),
        display: request.address.clone(),
        family: family_of(&request.address),
        address: request.address.clone(),
        vrf,
        tenant,
        status: choice(&request.status),
        role: request.role.as_deref().map(choice),
        nat_inside,
        nat_outside,
        dns_name: String::new(),
        description: request.description.clone(),
        created,
        last_updated: timestamp(),
    };

    // NetBox derives nat_outside from the peers' nat_inside
    let nested = nested_ip_address(&ip);
    for peer in addresses.values_mut() {
        peer.nat_outside.retain(|outside| outside.id != id);
        if Some(peer.id) == request.nat_inside {
            peer.nat_outside.push(nested.clone());
        }
    }

    addresses.insert(id, ip.clone());
    Ok(ip)
}

pub(crate) fn delete_ip_address(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    delete(client, &client.ip_addresses, "IP address", id)?;
    for peer in lock(&client.ip_addresses).values_mut() {
        peer.nat_outside.retain(|outside| outside.id != id);
        if peer.nat_inside.as_ref().is_some_and(|inside| inside.id == id) {
            peer.nat_inside = None;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip_request(address: &str, nat_inside: Option<u64>) -> WritableIPAddress {
        WritableIPAddress {
            address: address.to_string(),
            status: "active".to_string(),
            nat_inside,
            ..Default::default()
        }
    }

    #[test]
    fn test_aggregate_requires_existing_rir() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let request = WritableAggregate {
            prefix: "10.0.0.0/8".to_string(),
            rir: 42,
            description: String::new(),
        };
        let err = write_aggregate(&mock, None, &request).unwrap_err();
        assert!(matches!(err, NetBoxError::InvalidRequest(_)));
    }

    #[test]
    fn test_nat_outside_derived_from_peer() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let inside = write_ip_address(&mock, None, &ip_request("10.0.0.5/32", None)).unwrap();
        let outside = write_ip_address(&mock, None, &ip_request("203.0.113.5/32", Some(inside.id))).unwrap();

        let inside = get_ip_address(&mock, inside.id).unwrap();
        assert_eq!(inside.nat_outside.len(), 1);
        assert_eq!(inside.nat_outside[0].id, outside.id);

        delete_ip_address(&mock, outside.id).unwrap();
        let inside = get_ip_address(&mock, inside.id).unwrap();
        assert!(inside.nat_outside.is_empty());
    }

    #[test]
    fn test_prefix_query_by_vlan_vid() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        mock.add_vlan(500, 120, "servers");
        let request = WritablePrefix {
            prefix: "10.20.0.0/24".to_string(),
            status: "active".to_string(),
            vlan: Some(500),
            ..Default::default()
        };
        write_prefix(&mock, None, &request).unwrap();

        assert_eq!(query_prefixes(&mock, &[("vlan_vid", "120")]).unwrap().len(), 1);
        assert!(query_prefixes(&mock, &[("vlan_vid", "121")]).unwrap().is_empty());
    }
}
