//! Resource lifecycle tests against the in-memory NetBox mock

use netbox_client::{MockNetBoxClient, NetBoxClientTrait};
use netbox_provider::provider::{self, Provider};
use netbox_provider::{ProviderError, ResourceData};
use serde_json::{Map, Value, json};
use std::sync::Arc;

fn attrs(value: Value) -> Map<String, Value> {
    serde_json::from_value(value).unwrap()
}

fn setup() -> (MockNetBoxClient, Provider) {
    let mock = MockNetBoxClient::new("http://test-netbox");
    let provider = Provider::new(Arc::new(mock.clone()));
    (mock, provider)
}

/// Every attribute in `desired` must read back unchanged
fn assert_round_trip(desired: &Value, state: &ResourceData) {
    for (name, value) in desired.as_object().unwrap() {
        assert_eq!(state.get(name), Some(value), "attribute {} did not round-trip", name);
    }
}

async fn create_and_read(provider: &Provider, type_name: &str, desired: Value) -> ResourceData {
    let created = provider.create(type_name, attrs(desired.clone())).await.unwrap();
    let read = provider.read(type_name, &created).await.unwrap();
    assert_round_trip(&desired, &read);
    read
}

mod round_trip {
    use super::*;

    #[tokio::test]
    async fn test_rir() {
        let (_, provider) = setup();
        let state = create_and_read(
            &provider,
            "netbox_ipam_rir",
            json!({"name": "ARIN", "slug": "arin", "is_private": true, "description": "North America"}),
        )
        .await;
        assert_eq!(state.id(), "ipam/rir/1");
        assert_eq!(state.get("rir_id"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn test_vrf_with_tenant() {
        let (_, provider) = setup();
        let tenant = provider
            .create("netbox_org_tenant", attrs(json!({"name": "Acme", "slug": "acme"})))
            .await
            .unwrap();
        let tenant_id = tenant.get("tenant_id").cloned().unwrap();

        let state = create_and_read(
            &provider,
            "netbox_ipam_vrf",
            json!({
                "name": "prod-vrf",
                "route_distinguisher": "65000:1",
                "enforce_unique": true,
                "description": "production",
                "tenant_id": tenant_id,
            }),
        )
        .await;
        assert_eq!(state.id(), "ipam/vrf/2");
    }

    #[tokio::test]
    async fn test_aggregate_uses_bare_identifier() {
        let (_, provider) = setup();
        provider
            .create("netbox_ipam_rir", attrs(json!({"name": "RFC1918", "slug": "rfc1918"})))
            .await
            .unwrap();

        let state = create_and_read(
            &provider,
            "netbox_ipam_aggregate",
            json!({"prefix": "10.0.0.0/8", "rir_id": 1, "description": "private space"}),
        )
        .await;
        assert_eq!(state.id(), "2");
    }

    #[tokio::test]
    async fn test_prefix_with_vrf_and_vlan() {
        let (mock, provider) = setup();
        mock.add_vlan(900, 120, "servers");
        let vrf = provider
            .create("netbox_ipam_vrf", attrs(json!({"name": "prod", "route_distinguisher": "65000:1"})))
            .await
            .unwrap();

        let state = create_and_read(
            &provider,
            "netbox_ipam_prefix",
            json!({
                "prefix": "10.20.0.0/24",
                "vrf_id": vrf.get("vrf_id").cloned().unwrap(),
                "vlan_id": 900,
                "is_pool": true,
                "status": "reserved",
                "description": "servers",
            }),
        )
        .await;
        assert_eq!(state.id(), "ipam/prefix/2");
        assert_eq!(state.get("tenant_id"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn test_ip_address_with_nat() {
        let (_, provider) = setup();
        let inside = provider
            .create("netbox_ipam_ip_address", attrs(json!({"address": "10.0.0.5/32"})))
            .await
            .unwrap();

        let outside = create_and_read(
            &provider,
            "netbox_ipam_ip_address",
            json!({
                "address": "203.0.113.5/32",
                "nat_inside_ip_address_id": 1,
                "role": "vip",
                "status": "reserved",
                "description": "public VIP",
            }),
        )
        .await;
        assert_eq!(outside.id(), "ipam/ip-address/2");

        let inside = provider.read("netbox_ipam_ip_address", &inside).await.unwrap();
        assert_eq!(inside.get("nat_outside_ip_address_id"), Some(&json!(2)));
        assert_eq!(inside.get("nat_inside_ip_address_id"), Some(&json!(0)));
        assert_eq!(inside.get("role"), Some(&json!("")));
        assert_eq!(inside.get("status"), Some(&json!("active")));
    }

    #[tokio::test]
    async fn test_tenant_with_group() {
        let (_, provider) = setup();
        let group = create_and_read(
            &provider,
            "netbox_org_tenant_group",
            json!({"name": "Customers", "slug": "customers"}),
        )
        .await;
        assert_eq!(group.id(), "org/tenant-group/1");

        let tenant = create_and_read(
            &provider,
            "netbox_org_tenant",
            json!({
                "name": "Acme",
                "slug": "acme",
                "description": "anvils",
                "comments": "since 1949",
                "tenant_group_id": 1,
            }),
        )
        .await;
        assert_eq!(tenant.id(), "org/tenant/2");
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn test_defaults_applied_on_create() {
        let (mock, provider) = setup();
        let state = provider
            .create("netbox_ipam_prefix", attrs(json!({"prefix": "10.1.0.0/16"})))
            .await
            .unwrap();
        assert_eq!(state.get("status"), Some(&json!("active")));
        assert_eq!(state.get("is_pool"), Some(&json!(false)));

        let prefix = mock.get_prefix(1).await.unwrap();
        assert_eq!(prefix.status.value, "active");
        assert_eq!(prefix.description, "");
    }

    #[tokio::test]
    async fn test_update_replaces_object() {
        let (mock, provider) = setup();
        let prior = provider
            .create("netbox_ipam_rir", attrs(json!({"name": "ARIN", "slug": "arin", "description": "old"})))
            .await
            .unwrap();

        let updated = provider
            .update("netbox_ipam_rir", &prior, attrs(json!({"name": "ARIN", "slug": "arin-na"})))
            .await
            .unwrap();
        assert_eq!(updated.id(), prior.id());
        assert_eq!(updated.get("rir_id"), Some(&json!(1)));

        let rir = mock.get_rir(1).await.unwrap();
        assert_eq!(rir.slug, "arin-na");
        // Full replacement: the omitted description is cleared
        assert_eq!(rir.description, "");
    }

    #[tokio::test]
    async fn test_update_missing_object_is_remote_write_error() {
        let (_, provider) = setup();
        let mut prior = ResourceData::new().with("tenant_group_id", 44);
        prior.set_id("org/tenant-group/44");

        let err = provider
            .update("netbox_org_tenant_group", &prior, attrs(json!({"name": "x", "slug": "x"})))
            .await
            .unwrap_err();
        assert!(err.is_remote_write());
    }

    #[tokio::test]
    async fn test_delete_then_read_fails() {
        let (mock, provider) = setup();
        let state = provider
            .create("netbox_ipam_vrf", attrs(json!({"name": "lab", "route_distinguisher": "65000:9"})))
            .await
            .unwrap();

        provider.delete("netbox_ipam_vrf", &state).await.unwrap();
        assert_eq!(mock.object_count(), 0);

        let err = provider.read("netbox_ipam_vrf", &state).await.unwrap_err();
        assert!(err.is_remote_read());
    }

    #[tokio::test]
    async fn test_import_populates_state() {
        let (_, provider) = setup();
        provider
            .create("netbox_org_tenant", attrs(json!({"name": "Acme", "slug": "acme", "comments": "imported"})))
            .await
            .unwrap();

        for identifier in ["org/tenant/1", "1"] {
            let state = provider.import("netbox_org_tenant", identifier).await.unwrap();
            assert_eq!(state.id(), "org/tenant/1");
            assert_eq!(state.get("tenant_id"), Some(&json!(1)));
            assert_eq!(state.get("comments"), Some(&json!("imported")));
        }
    }

    #[tokio::test]
    async fn test_import_rejects_malformed_identifier() {
        let (_, provider) = setup();
        let err = provider.import("netbox_ipam_vrf", "ipam/vrf/prod").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidIdentifier { .. }));
    }
}

mod failures {
    use super::*;

    const ALL_TYPES: [(&str, &str); 7] = [
        ("netbox_ipam_rir", "ipam/rir/999"),
        ("netbox_ipam_vrf", "ipam/vrf/999"),
        ("netbox_ipam_aggregate", "999"),
        ("netbox_ipam_prefix", "ipam/prefix/999"),
        ("netbox_ipam_ip_address", "ipam/ip-address/999"),
        ("netbox_org_tenant", "org/tenant/999"),
        ("netbox_org_tenant_group", "org/tenant-group/999"),
    ];

    #[tokio::test]
    async fn test_read_nonexistent_mutates_nothing() {
        let (_, provider) = setup();
        for (type_name, identifier) in ALL_TYPES {
            let mut prior = ResourceData::new().with("description", "unchanged");
            prior.set_id(identifier);
            let before = prior.clone();

            let resource = provider::resource(type_name).unwrap();
            let err = resource.read(provider.client(), &mut prior).await.unwrap_err();
            assert!(err.is_remote_read(), "{}: {}", type_name, err);
            assert_eq!(prior, before, "{} mutated state on failed read", type_name);
        }
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_remote_write_error() {
        let (_, provider) = setup();
        for (type_name, identifier) in ALL_TYPES {
            let mut prior = ResourceData::new();
            prior.set_id(identifier);

            let err = provider.delete(type_name, &prior).await.unwrap_err();
            assert!(err.is_remote_write(), "{}: {}", type_name, err);
        }
    }

    #[tokio::test]
    async fn test_failed_create_leaves_state_unchanged() {
        let (mock, provider) = setup();
        mock.set_unavailable(true);

        let mut data = ResourceData::new()
            .with("name", "prod-vrf")
            .with("route_distinguisher", "65000:1");
        let before = data.clone();

        let resource = provider::resource("netbox_ipam_vrf").unwrap();
        let err = resource.create(provider.client(), &mut data).await.unwrap_err();
        assert!(err.is_remote_write());
        assert_eq!(data, before);
        assert_eq!(data.id(), "");
    }

    #[tokio::test]
    async fn test_aggregate_with_unknown_rir_rejected() {
        let (mock, provider) = setup();
        let err = provider
            .create("netbox_ipam_aggregate", attrs(json!({"prefix": "10.0.0.0/8", "rir_id": 77})))
            .await
            .unwrap_err();
        assert!(err.is_remote_write());
        assert_eq!(mock.object_count(), 0);
    }

    #[tokio::test]
    async fn test_schema_violation_never_reaches_netbox() {
        let (mock, provider) = setup();
        let err = provider
            .create("netbox_ipam_rir", attrs(json!({"slug": "arin", "is_private": "yes"})))
            .await
            .unwrap_err();

        match err {
            ProviderError::Schema { type_name, errors } => {
                assert_eq!(type_name, "netbox_ipam_rir");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
        assert_eq!(mock.object_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_resource_type() {
        let (_, provider) = setup();
        let err = provider.create("netbox_dcim_site", Map::new()).await.unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResourceType(_)));
    }
}
