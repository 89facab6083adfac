//! Gateway operations driven against a mock Freshdesk API.

use freshdesk_mcp::client::{FreshdeskClient, RequestDescriptor};
use freshdesk_mcp::config::Config;
use freshdesk_mcp::error::FreshdeskError;
use freshdesk_mcp::tools::{
    ArticleChanges, ContactChanges, CreateTicketInput, FieldChanges, ListContactsInput,
    ListTicketsInput, NewField, TicketChanges,
};
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{
    any, basic_auth, body_json, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key-abc123";

fn client_for(server: &MockServer) -> FreshdeskClient {
    FreshdeskClient::new(&Config::new(server.uri(), API_KEY)).unwrap()
}

fn ticket_input(json: Value) -> CreateTicketInput {
    serde_json::from_value(json).unwrap()
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_requests_carry_basic_auth_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/7"))
        .and(basic_auth(API_KEY, "X"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client_for(&server).get_ticket(7).await.unwrap();
    assert_eq!(ticket.id, 7);
}

#[tokio::test]
async fn test_caller_cannot_replace_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/anything"))
        .and(basic_auth(API_KEY, "X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestDescriptor::get("/anything")
        .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
    let body: Value = client_for(&server).send_json(request).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/anything"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let body: Value = client_for(&server)
        .send_json(RequestDescriptor::put("/anything").with_json(json!({"a": 1})))
        .await
        .unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_error_body_message_and_field_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/contacts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "errors": {"email": ["is invalid"]}
        })))
        .mount(&server)
        .await;

    let input = serde_json::from_value(json!({"name": "Ada", "email": "nope"})).unwrap();
    let err = client_for(&server).create_contact(&input).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    let message = err.to_string();
    assert!(message.contains("Validation failed"), "{}", message);
    assert!(message.contains("email: is invalid"), "{}", message);
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_contact(1).await.unwrap_err();
    assert!(matches!(err, FreshdeskError::Api { .. }));
    assert!(err.to_string().contains("502 Bad Gateway"));
}

#[tokio::test]
async fn test_error_body_never_echoes_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": format!("bad key {}", API_KEY)})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_ticket(1).await.unwrap_err();
    assert!(!err.to_string().contains(API_KEY));
    assert!(err.to_string().contains("[REDACTED]"));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_list_tickets_clamps_paging_and_reads_link_header() {
    let server = MockServer::start().await;
    let link = format!(
        r#"<{}/api/v2/tickets?page=2&per_page=100>; rel="next""#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(query_param("status", "2"))
        .and(query_param_is_missing("email"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!([{"id": 1}, {"id": 2}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filters = ListTicketsInput {
        page: Some(0),
        per_page: Some(500),
        status: Some(2),
        ..Default::default()
    };
    let page = client_for(&server).list_tickets(&filters).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 100);
    assert_eq!(page.pagination.next_page, Some(2));
    assert_eq!(page.pagination.prev_page, None);
}

#[tokio::test]
async fn test_list_contacts_without_link_header_has_no_neighbours() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "30"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
        .mount(&server)
        .await;

    let filters = ListContactsInput {
        page: Some(3),
        email: Some("ada@example.com".to_string()),
        ..Default::default()
    };
    let page = client_for(&server).list_contacts(&filters).await.unwrap();

    assert_eq!(page.items[0].id, 9);
    assert!(!page.pagination.has_next());
    assert_eq!(page.pagination.prev_page, None);
}

#[tokio::test]
async fn test_list_contacts_reads_next_and_prev() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    r#"<https://x/api/v2/contacts?page=3>; rel="next", <https://x/api/v2/contacts?page=1>; rel="prev""#,
                )
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let filters = ListContactsInput {
        page: Some(2),
        ..Default::default()
    };
    let page = client_for(&server).list_contacts(&filters).await.unwrap();
    assert_eq!(page.pagination.next_page, Some(3));
    assert_eq!(page.pagination.prev_page, Some(1));
}

// ============================================================================
// Local checks
// ============================================================================

#[tokio::test]
async fn test_empty_updates_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .update_ticket(1, &TicketChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .update_contact(1, &ContactChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .update_article(1, &ArticleChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .update_ticket_field(1, &FieldChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .update_contact_field(1, &FieldChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_create_ticket_requester_checks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(body_json(json!({
            "subject": "Printer",
            "description": "Jammed",
            "email": "ada@example.com",
            "status": 2,
            "priority": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 55, "status": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let no_requester = ticket_input(json!({"subject": "Printer", "description": "Jammed"}));
    assert!(client
        .create_ticket(&no_requester)
        .await
        .unwrap_err()
        .is_validation());

    let phone_only = ticket_input(json!({
        "subject": "Printer", "description": "Jammed", "phone": "555-0100"
    }));
    assert!(client
        .create_ticket(&phone_only)
        .await
        .unwrap_err()
        .is_validation());

    let email_only = ticket_input(json!({
        "subject": "Printer", "description": "Jammed", "email": "ada@example.com"
    }));
    let ticket = client.create_ticket(&email_only).await.unwrap();
    assert_eq!(ticket.id, 55);
}

// ============================================================================
// Tickets
// ============================================================================

#[tokio::test]
async fn test_delete_ticket_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_ticket(12).await.unwrap();
}

#[tokio::test]
async fn test_update_ticket_sends_only_changes() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/12"))
        .and(body_json(json!({"status": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12, "status": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let changes = TicketChanges {
        status: Some(4),
        ..Default::default()
    };
    let ticket = client_for(&server).update_ticket(12, &changes).await.unwrap();
    assert_eq!(ticket.status, Some(4));
}

#[tokio::test]
async fn test_search_tickets_quotes_query_and_clamps_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/search/tickets"))
        .and(query_param("query", "\"priority:3 AND status:2\""))
        .and(query_param("page", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": [{"id": 3}], "total": 301})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_tickets("priority:3 AND status:2", Some(50))
        .await
        .unwrap();
    assert_eq!(results.total, Some(301));
    assert_eq!(results.results[0].id, 3);
}

#[tokio::test]
async fn test_note_is_private_by_default_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/tickets/5/notes"))
        .and(body_json(json!({"body": "internal", "private": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 70, "private": true})))
        .expect(1)
        .mount(&server)
        .await;

    let input: freshdesk_mcp::tools::CreateNoteInput =
        serde_json::from_value(json!({"ticket_id": 5, "body": "internal"})).unwrap();
    let note = client_for(&server)
        .create_ticket_note(input.ticket_id, &input.note)
        .await
        .unwrap();
    assert!(note.is_private());
}

// ============================================================================
// Fields
// ============================================================================

#[tokio::test]
async fn test_create_ticket_field_wraps_body_in_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/admin/ticket_fields"))
        .and(body_json(json!({
            "ticket_field": {
                "label": "Region",
                "type": "custom_dropdown",
                "choices": ["North", "South"]
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 40, "label": "Region", "type": "custom_dropdown"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let field: NewField = serde_json::from_value(json!({
        "label": "Region",
        "type": "custom_dropdown",
        "choices": ["North", "South"]
    }))
    .unwrap();
    let created = client_for(&server).create_ticket_field(&field).await.unwrap();
    assert_eq!(created.id, 40);
}

#[tokio::test]
async fn test_dropdown_without_choices_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let field: NewField =
        serde_json::from_value(json!({"label": "Region", "type": "custom_dropdown"})).unwrap();
    let err = client_for(&server)
        .create_contact_field(&field)
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_update_contact_field_wraps_body_in_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/contact_fields/8"))
        .and(body_json(json!({"contact_field": {"label": "Tier"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8, "label": "Tier"})))
        .expect(1)
        .mount(&server)
        .await;

    let changes = FieldChanges {
        label: Some("Tier".to_string()),
        ..Default::default()
    };
    let field = client_for(&server)
        .update_contact_field(8, &changes)
        .await
        .unwrap();
    assert_eq!(field.label.as_deref(), Some("Tier"));
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contact_autocomplete_returns_reduced_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/autocomplete"))
        .and(query_param("term", "ada lo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let matches = client_for(&server).search_contacts("ada lo").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(matches[0].phone, None);
}

// ============================================================================
// Solutions
// ============================================================================

#[tokio::test]
async fn test_get_categories_is_empty_on_remote_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/solutions/categories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(client_for(&server).get_categories().await.is_empty());
}

#[tokio::test]
async fn test_get_categories_is_empty_on_non_list_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/solutions/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    assert!(client_for(&server).get_categories().await.is_empty());
}

#[tokio::test]
async fn test_get_categories_is_empty_when_host_is_unreachable() {
    let client = FreshdeskClient::new(&Config::new("http://127.0.0.1:1", API_KEY)).unwrap();
    assert!(client.get_categories().await.is_empty());
}

async fn mount_json(server: &MockServer, at: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_all_articles_skips_failing_folder() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/solutions/categories",
        200,
        json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/solutions/categories/1/folders",
        200,
        json!([{"id": 10, "name": "Good"}, {"id": 11, "name": "Broken"}]),
    )
    .await;
    mount_json(&server, "/api/v2/solutions/categories/2/folders", 200, json!([])).await;
    mount_json(
        &server,
        "/api/v2/solutions/folders/10/articles",
        200,
        json!([{"id": 100, "title": "One"}, {"id": 101, "title": "Two"}]),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/solutions/folders/11/articles",
        500,
        json!({"message": "boom"}),
    )
    .await;

    let client = client_for(&server);

    let ids: Vec<u64> = client
        .get_all_articles()
        .await
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![100, 101]);

    let tree = client.solution_tree().await;
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].folders.len(), 2);
    assert!(tree[0].folders[0].error.is_none());
    assert!(tree[0].folders[1].articles.is_empty());
    assert!(tree[0].folders[1]
        .error
        .as_deref()
        .unwrap()
        .contains("boom"));
    assert!(tree[1].folders.is_empty());
    assert!(tree[1].error.is_none());
}

#[tokio::test]
async fn test_all_articles_notes_category_whose_folders_fail() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/solutions/categories",
        200,
        json!([{"id": 1}, {"id": 2}]),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/solutions/categories/1/folders",
        404,
        json!({"description": "Not found"}),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/solutions/categories/2/folders",
        200,
        json!([{"id": 20}]),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/solutions/folders/20/articles",
        200,
        json!([{"id": 200}]),
    )
    .await;

    let tree = client_for(&server).solution_tree().await;
    assert_eq!(tree.len(), 2);
    assert!(tree[0].folders.is_empty());
    assert!(tree[0].error.as_deref().unwrap().contains("Not found"));
    assert_eq!(tree[1].folders[0].articles[0].id, 200);
}

#[tokio::test]
async fn test_search_articles_sends_term() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/search/solutions"))
        .and(query_param("term", "reset password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 5}])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_articles("reset password")
        .await
        .unwrap();
    assert_eq!(results.results.len(), 1);
    assert_eq!(results.total, None);
}
