//! Tenancy operations for MockNetBoxClient
//!
//! Handles tenants and tenant groups

use super::MockNetBoxClient;
use super::helpers::*;
use super::ipam::{get, resolve_id};
use crate::error::NetBoxError;
use crate::models::*;

fn duplicate_slug(kind: &str, slug: &str) -> NetBoxError {
    NetBoxError::InvalidRequest(format!(
        "{{\"slug\": [\"{} with this slug already exists: {}\"]}}",
        kind, slug
    ))
}

pub(crate) fn get_tenant(client: &MockNetBoxClient, id: u64) -> Result<Tenant, NetBoxError> {
    get(client, &client.tenants, "Tenant", id)
}

pub(crate) fn query_tenants(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<Tenant>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.tenants)
        .values()
        .filter(|t| filter(filters, "name").is_none_or(|n| t.name == n))
        .filter(|t| filter(filters, "slug").is_none_or(|s| t.slug == s))
        .filter(|t| filter(filters, "group").is_none_or(|g| t.group.as_ref().is_some_and(|group| group.slug == g)))
        .filter(|t| filter(filters, "q").is_none_or(|q| matches_query(q, &[&t.name, &t.slug, &t.description])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_tenant(client: &MockNetBoxClient, id: Option<u64>, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
    client.check_available()?;
    if lock(&client.tenants)
        .values()
        .any(|t| t.slug == request.slug && Some(t.id) != id)
    {
        return Err(duplicate_slug("tenant", &request.slug));
    }

    let group = request
        .group
        .map(|id| {
            lock(&client.tenant_groups)
                .get(&id)
                .map(nested_tenant_group)
                .ok_or_else(|| related_not_found("group", id))
        })
        .transpose()?;

    let (id, created) = resolve_id(client, &client.tenants, "Tenant", id, |t| t.created.clone())?;
    let tenant = Tenant {
        id,
        url: client.object_url("tenancy/tenants", id),
        display: request.name.clone(),
        name: request.name.clone(),
        slug: request.slug.clone(),
        group,
        description: request.description.clone(),
        comments: request.comments.clone(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.tenants).insert(id, tenant.clone());
    Ok(tenant)
}

pub(crate) fn get_tenant_group(client: &MockNetBoxClient, id: u64) -> Result<TenantGroup, NetBoxError> {
    get(client, &client.tenant_groups, "TenantGroup", id)
}

pub(crate) fn query_tenant_groups(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<Vec<TenantGroup>, NetBoxError> {
    client.check_available()?;
    let results = lock(&client.tenant_groups)
        .values()
        .filter(|g| filter(filters, "name").is_none_or(|n| g.name == n))
        .filter(|g| filter(filters, "slug").is_none_or(|s| g.slug == s))
        .filter(|g| filter(filters, "q").is_none_or(|q| matches_query(q, &[&g.name, &g.slug])))
        .cloned()
        .collect();
    Ok(apply_limit(results, filters))
}

pub(crate) fn write_tenant_group(
    client: &MockNetBoxClient,
    id: Option<u64>,
    request: &WritableTenantGroup,
) -> Result<TenantGroup, NetBoxError> {
    client.check_available()?;
    if lock(&client.tenant_groups)
        .values()
        .any(|g| g.slug == request.slug && Some(g.id) != id)
    {
        return Err(duplicate_slug("tenant group", &request.slug));
    }

    let (id, created) = resolve_id(client, &client.tenant_groups, "TenantGroup", id, |g| g.created.clone())?;
    let group = TenantGroup {
        id,
        url: client.object_url("tenancy/tenant-groups", id),
        display: request.name.clone(),
        name: request.name.clone(),
        slug: request.slug.clone(),
        parent: None,
        description: String::new(),
        created,
        last_updated: timestamp(),
    };

    lock(&client.tenant_groups).insert(id, group.clone());
    Ok(group)
}
