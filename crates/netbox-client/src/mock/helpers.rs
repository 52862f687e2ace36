//! Helper functions for building NetBox model values in the mock

use crate::error::NetBoxError;
use crate::models::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mock store, recovering the data if a previous test thread panicked
pub(crate) fn lock<T>(store: &Mutex<T>) -> MutexGuard<'_, T> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Current timestamp in the format NetBox returns
pub(crate) fn timestamp() -> Option<String> {
    Some(chrono::Utc::now().to_rfc3339())
}

/// Address family choice derived from a prefix or address string
pub(crate) fn family_of(address: &str) -> Choice<u8> {
    if address.contains(':') {
        Choice::new(6, "IPv6")
    } else {
        Choice::new(4, "IPv4")
    }
}

/// Choice value with a NetBox-style label ("active" -> "Active", "anycast" -> "Anycast")
pub(crate) fn choice(value: &str) -> Choice<String> {
    let mut chars = value.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    Choice::new(value.to_string(), label.replace('-', " "))
}

/// NetBox rejects writes that reference a missing related object with a 400
pub(crate) fn related_not_found(field: &str, id: u64) -> NetBoxError {
    NetBoxError::InvalidRequest(format!(
        "{{\"{}\": [\"Related object not found using the provided numeric ID: {}\"]}}",
        field, id
    ))
}

/// Case-insensitive substring match used for the `q` filter
pub(crate) fn matches_query(query: &str, haystacks: &[&str]) -> bool {
    let needle = query.to_lowercase();
    haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}

/// Look up a filter value by key
pub(crate) fn filter<'a>(filters: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Apply the `limit` filter (NetBox pages are capped by it)
pub(crate) fn apply_limit<T>(mut results: Vec<T>, filters: &[(&str, &str)]) -> Vec<T> {
    if let Some(limit) = filter(filters, "limit").and_then(|l| l.parse::<usize>().ok()) {
        results.truncate(limit);
    }
    results
}

pub(crate) fn nested_tenant(tenant: &Tenant) -> NestedTenant {
    NestedTenant {
        id: tenant.id,
        url: tenant.url.clone(),
        display: tenant.display.clone(),
        name: tenant.name.clone(),
        slug: tenant.slug.clone(),
    }
}

pub(crate) fn nested_tenant_group(group: &TenantGroup) -> NestedTenantGroup {
    NestedTenantGroup {
        id: group.id,
        url: group.url.clone(),
        display: group.display.clone(),
        name: group.name.clone(),
        slug: group.slug.clone(),
    }
}

pub(crate) fn nested_rir(rir: &Rir) -> NestedRir {
    NestedRir {
        id: rir.id,
        url: rir.url.clone(),
        display: rir.display.clone(),
        name: rir.name.clone(),
        slug: rir.slug.clone(),
    }
}

pub(crate) fn nested_vrf(vrf: &Vrf) -> NestedVrf {
    NestedVrf {
        id: vrf.id,
        url: vrf.url.clone(),
        display: vrf.display.clone(),
        name: vrf.name.clone(),
        rd: vrf.rd.clone(),
    }
}

pub(crate) fn nested_ip_address(ip: &IPAddress) -> NestedIPAddress {
    NestedIPAddress {
        id: ip.id,
        url: ip.url.clone(),
        display: ip.display.clone(),
        address: ip.address.clone(),
    }
}
