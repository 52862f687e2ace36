//! End-to-end tests through the real HTTP client against wiremock

use netbox_provider::provider::{self, Provider};
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn attrs(value: Value) -> Map<String, Value> {
    serde_json::from_value(value).unwrap()
}

async fn configured(server: &MockServer) -> Provider {
    Mock::given(method("GET"))
        .and(path("/api/ipam/rirs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "next": null, "previous": null, "results": []
        })))
        .mount(server)
        .await;

    provider::configure(attrs(json!({"app_id": "token", "endpoint": server.uri()})))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_vrf_create_sends_only_supplied_fields() {
    let server = MockServer::start().await;
    let provider = configured(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/ipam/vrfs/"))
        .and(body_json(json!({
            "name": "prod-vrf",
            "rd": "65000:1",
            "enforce_unique": true,
            "description": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "prod-vrf",
            "rd": "65000:1",
            "enforce_unique": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = provider
        .create(
            "netbox_ipam_vrf",
            attrs(json!({"name": "prod-vrf", "route_distinguisher": "65000:1", "enforce_unique": true})),
        )
        .await
        .unwrap();

    assert_eq!(state.id(), "ipam/vrf/42");
    assert_eq!(state.get("vrf_id"), Some(&json!(42)));
}

#[tokio::test]
async fn test_update_is_put_and_delete_error_propagates() {
    let server = MockServer::start().await;
    let provider = configured(&server).await;

    Mock::given(method("PUT"))
        .and(path("/api/tenancy/tenant-groups/2/"))
        .and(body_json(json!({"name": "Customers", "slug": "customers"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "name": "Customers", "slug": "customers"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/tenancy/tenant-groups/2/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": "Unable to delete object. 1 dependent objects were found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut prior = netbox_provider::ResourceData::new().with("tenant_group_id", 2);
    prior.set_id("org/tenant-group/2");

    provider
        .update(
            "netbox_org_tenant_group",
            &prior,
            attrs(json!({"name": "Customers", "slug": "customers"})),
        )
        .await
        .unwrap();

    let err = provider.delete("netbox_org_tenant_group", &prior).await.unwrap_err();
    assert!(err.is_remote_write());
    assert!(err.to_string().contains("dependent objects"));
}
