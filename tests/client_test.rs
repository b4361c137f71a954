use portal_schema_sync::hubspot::{
    AuthScheme, HubSpotClient, HubSpotError, ObjectType, PropertyGroupCreate, SchemaApi,
};
use portal_schema_sync::{sync_properties, Portal};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HubSpotClient {
    HubSpotClient::with_http_client(&server.uri(), "key-1", AuthScheme::ApiKey, reqwest::Client::new())
}

fn bound_portal(portal_id: u64, name: &str, server: &MockServer) -> Portal {
    let mut portal = Portal::new(portal_id, name, "key-1");
    portal
        .bind_api(Arc::new(client(server)))
        .expect("Should bind");
    portal
}

#[tokio::test]
async fn test_list_properties_parses_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/properties/deal"))
        .and(query_param("hapikey", "key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "name": "amount_bucket",
                    "label": "Amount bucket",
                    "type": "enumeration",
                    "fieldType": "select",
                    "groupName": "dealinformation",
                    "options": [{ "label": "Small", "value": "s", "displayOrder": 0, "hidden": false }],
                    "calculated": false,
                    "hubspotDefined": false
                },
                {
                    "name": "hs_deal_score",
                    "label": "Deal score",
                    "type": "number",
                    "fieldType": "number",
                    "calculated": true,
                    "hubspotDefined": true
                }
            ]
        })))
        .mount(&server)
        .await;

    let properties = client(&server)
        .list_properties(&ObjectType::Deal)
        .await
        .expect("Should list properties");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].options[0].value, "s");
    assert!(properties[1].calculated);
}

#[tokio::test]
async fn test_create_group_posts_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/properties/company/groups"))
        .and(body_partial_json(json!({
            "name": "partner_info",
            "label": "Partner info",
            "displayOrder": 4,
            "archived": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "name": "partner_info" })))
        .expect(1)
        .mount(&server)
        .await;

    let group = PropertyGroupCreate {
        name: "partner_info".to_string(),
        label: "Partner info".to_string(),
        display_order: 4,
        archived: false,
    };

    client(&server)
        .create_property_group(&ObjectType::Company, &group)
        .await
        .expect("Should create group");
}

#[tokio::test]
async fn test_conflict_and_rate_limit_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/properties/contact/groups"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "status": "error",
            "message": "Property group already exists",
            "category": "OBJECT_ALREADY_EXISTS"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/properties/ticket/groups"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "10"))
        .mount(&server)
        .await;

    let group = PropertyGroupCreate {
        name: "g".to_string(),
        label: "G".to_string(),
        display_order: 0,
        archived: false,
    };
    let client = client(&server);

    let conflict = client
        .create_property_group(&ObjectType::Contact, &group)
        .await
        .unwrap_err();
    assert!(matches!(&conflict, HubSpotError::Conflict(m) if m.contains("already exists")));

    let limited = client
        .create_property_group(&ObjectType::Ticket, &group)
        .await
        .unwrap_err();
    assert!(matches!(
        limited,
        HubSpotError::RateLimited {
            retry_after_secs: Some(10)
        }
    ));
}

#[tokio::test]
async fn test_sync_over_http_reports_rejected_creation() {
    let source = MockServer::start().await;
    let target = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/properties/contact/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&source)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/properties/contact/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&target)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/properties/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": "shoe_size",
                "label": "Shoe size",
                "type": "number",
                "fieldType": "number",
                "groupName": "missing_group"
            }]
        })))
        .mount(&source)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/properties/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&target)
        .await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/properties/contact"))
        .and(body_partial_json(json!({ "name": "shoe_size", "groupName": "missing_group" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "Property group missing_group does not exist",
            "category": "VALIDATION_ERROR"
        })))
        .expect(1)
        .mount(&target)
        .await;

    let report = sync_properties(
        &ObjectType::Contact,
        &bound_portal(1, "source", &source),
        &bound_portal(2, "target", &target),
    )
    .await
    .expect("Should sync");

    assert_eq!(
        report.messages(),
        &["source->target (contact): failed creating property shoe_size: API error (400): Property group missing_group does not exist (VALIDATION_ERROR)".to_string()]
    );
}
