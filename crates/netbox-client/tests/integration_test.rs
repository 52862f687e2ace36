//! Integration tests for NetBox client
//!
//! The `live` tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run them.
//! The `http` tests run against wiremock.

use netbox_client::{NetBoxClient, NetBoxError, WritableIPAddress, WritablePrefix, WritableVrf};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod live {
    use super::*;

    fn client() -> NetBoxClient {
        let url = std::env::var("NETBOX_URL").unwrap_or_else(|_| "http://localhost:8001".to_string());
        let token = std::env::var("NETBOX_TOKEN").expect("NETBOX_TOKEN environment variable must be set");
        NetBoxClient::new(url, token).expect("Failed to create client")
    }

    #[tokio::test]
    #[ignore] // Requires running NetBox instance
    async fn test_validate_connection() {
        client().validate_connection().await.expect("NetBox should be reachable");
    }

    #[tokio::test]
    #[ignore]
    async fn test_query_prefixes() {
        let prefixes = client().query_prefixes(&[], false).await.expect("Failed to query prefixes");
        println!("Found {} prefixes", prefixes.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_create_and_delete_ip() {
        let client = client();
        let request = WritableIPAddress {
            address: "192.168.100.1/24".to_string(),
            status: "active".to_string(),
            description: "Test IP address".to_string(),
            ..Default::default()
        };

        let ip = client.create_ip_address(&request).await.expect("Failed to create IP address");
        println!("Created IP address: {}", ip.address);

        client.delete_ip_address(ip.id).await.expect("Failed to delete IP address");
        let err = client.get_ip_address(ip.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

mod http {
    use super::*;

    fn vrf_payload(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "url": format!("http://netbox/api/ipam/vrfs/{}/", id),
            "display": "prod",
            "name": "prod",
            "rd": "65000:1",
            "tenant": null,
            "enforce_unique": true,
            "description": "",
            "comments": ""
        })
    }

    fn client(server: &MockServer) -> NetBoxClient {
        NetBoxClient::new(server.uri(), "test-token".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_vrf_posts_writable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/ipam/vrfs/"))
            .and(header("Authorization", "Token test-token"))
            .and(body_json(json!({
                "name": "prod",
                "rd": "65000:1",
                "enforce_unique": true,
                "description": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(vrf_payload(4)))
            .expect(1)
            .mount(&server)
            .await;

        let vrf = client(&server)
            .create_vrf(&WritableVrf {
                name: "prod".to_string(),
                rd: "65000:1".to_string(),
                enforce_unique: true,
                description: String::new(),
                tenant: None,
            })
            .await
            .unwrap();

        assert_eq!(vrf.id, 4);
        assert_eq!(vrf.rd.as_deref(), Some("65000:1"));
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/ipam/vrfs/4/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vrf_payload(4)))
            .expect(1)
            .mount(&server)
            .await;

        let request = WritableVrf {
            name: "prod".to_string(),
            rd: "65000:1".to_string(),
            ..Default::default()
        };
        client(&server).update_vrf(4, &request).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_object_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ipam/prefixes/999/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let err = client(&server).get_prefix(999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_bad_token_maps_to_authentication() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ipam/rirs/"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})))
            .mount(&server)
            .await;

        let err = client(&server).validate_connection().await.unwrap_err();
        assert!(matches!(err, NetBoxError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_invalid_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/ipam/prefixes/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"prefix": ["Enter a valid IPv4 or IPv6 prefix"]})))
            .mount(&server)
            .await;

        let request = WritablePrefix {
            prefix: "not-a-prefix".to_string(),
            status: "active".to_string(),
            ..Default::default()
        };
        let err = client(&server).create_prefix(&request).await.unwrap_err();
        assert!(matches!(err, NetBoxError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_with_dependents_maps_to_conflict() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/tenancy/tenant-groups/2/"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "1 dependent objects were found"})))
            .mount(&server)
            .await;

        let err = client(&server).delete_tenant_group(2).await.unwrap_err();
        assert!(matches!(err, NetBoxError::Conflict(ref msg) if msg.contains("dependent objects")));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ipam/rirs/"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client(&server).validate_connection().await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_query_passes_filters_and_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ipam/ip-addresses/"))
            .and(query_param("tenant", "acme-corp"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "id": 11,
                    "family": {"value": 4, "label": "IPv4"},
                    "address": "10.0.0.11/32",
                    "status": {"value": "active", "label": "Active"}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client(&server)
            .query_ip_addresses(&[("tenant", "acme-corp"), ("limit", "2")], false)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address, "10.0.0.11/32");
    }

    #[tokio::test]
    async fn test_fetch_all_follows_next_links() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/tenancy/tenant-groups/"))
            .and(query_param("offset", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [{"id": 2, "name": "Internal", "slug": "internal"}]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/tenancy/tenant-groups/"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": format!("{}/api/tenancy/tenant-groups/?limit=1&offset=1", server.uri()),
                "previous": null,
                "results": [{"id": 1, "name": "Customers", "slug": "customers"}]
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let groups = client(&server).query_tenant_groups(&[("limit", "1")], true).await.unwrap();
        assert_eq!(groups.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/tenancy/tenants/3/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).delete_tenant(3).await.unwrap();
    }
}
