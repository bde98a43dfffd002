//! Wire-level checks of signed requests against a mock Wealth Access server

use serde_json::json;
use wa_client::signing::sign;
use wa_client::{Config, CredentialOverrides, Error, PathParams, QueryParams, WealthAccessClient};
use wa_core::types::{DocumentQuery, HoldingsQuery, TransactionQuery};
use wa_core::{Credentials, Method};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Client pointed at the mock server with a fixed credential set
fn client_for(server: &MockServer) -> WealthAccessClient {
  let config = Config::default_with_credentials("K", "S", "guid-1").with_base_url(server.uri());
  WealthAccessClient::new(config).expect("Failed to create client")
}

async fn only_request(server: &MockServer) -> Request {
  let mut requests = server.received_requests().await.expect("request recording enabled");
  assert_eq!(requests.len(), 1, "expected exactly one request");
  requests.remove(0)
}

fn header_str<'a>(request: &'a Request, name: &str) -> &'a str {
  request
    .headers
    .get(name)
    .unwrap_or_else(|| panic!("missing header {}", name))
    .to_str()
    .expect("ascii header")
}

/// Recompute the signature from what actually went over the wire
fn assert_signed(request: &Request, creds: &Credentials, method: Method) {
  let timestamp = header_str(request, "x-WATimestamp");
  let query = request.url.query().unwrap_or("");
  let expected = sign(method, request.url.path(), query, creds, timestamp).expect("signature");

  assert_eq!(header_str(request, "Authorization"), format!("WAS {}:{}", creds.user_guid(), expected));
  assert_eq!(header_str(request, "x-WAApiKey"), creds.api_key());
  assert!(timestamp.ends_with(" GMT"), "timestamp {} is not GMT", timestamp);
}

#[tokio::test]
async fn test_get_accounts_is_signed() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v2/advisor/accounts"))
    .and(header("x-WAApiKey", "K"))
    .and(header_exists("x-WATimestamp"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"accountId": 1}])))
    .expect(1)
    .mount(&server)
    .await;

  let response = client_for(&server).advisor().accounts(HoldingsQuery::ignore_orion(true)).await.unwrap();
  assert_eq!(response.status(), 200);

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), Some("ignoreOrion=true"));
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Get);
}

#[tokio::test]
async fn test_query_is_filtered_and_sorted() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v2/advisor/investors/42/banktransactions"))
    .respond_with(ResponseTemplate::new(200))
    .mount(&server)
    .await;

  let query = TransactionQuery {
    start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
    end_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 29),
    transaction_id: Some(77),
    hide_transfers: Some(true),
    ignore_orion: Some(false),
  };
  client_for(&server).advisor().investor_bank_transactions(42, query).await.unwrap();

  let request = only_request(&server).await;
  // transactionId is not accepted by this endpoint and never reaches the wire
  assert_eq!(
    request.url.query(),
    Some("endDate=2024-02-29&hideTransfers=true&ignoreOrion=false&startDate=2024-01-01")
  );
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Get);
}

#[tokio::test]
async fn test_extra_params_dropped_on_generic_call() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/firm/investors")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

  let query = QueryParams::new().with("firm", "firm-guid").with("WA_SECRET_KEY", "leak").with("page", 2);
  client_for(&server).call("FirmInvestors", &PathParams::new(), query).await.unwrap();

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), Some("firm=firm-guid"));
}

#[tokio::test]
async fn test_post_sends_params_in_query_string() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/v2/advisor/investors/7/documents"))
    .respond_with(ResponseTemplate::new(201))
    .expect(1)
    .mount(&server)
    .await;

  let response = client_for(&server).advisor().post_investor_document(7, "upload").await.unwrap();
  assert_eq!(response.status(), 201);

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), Some("investorId=7&request=upload"));
  assert!(request.body.is_empty());
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Post);
}

#[tokio::test]
async fn test_document_detail_fills_both_placeholders() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/advisor/investors/5/documents/900"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;

  let query = DocumentQuery { is_preview: Some(true), search_term: Some("tax".into()), ..Default::default() };
  client_for(&server).advisor().investor_document_detail(5, 900, query).await.unwrap();

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), Some("IsPreview=true"));
}

#[tokio::test]
async fn test_search_term_with_reserved_bytes_arrives_intact() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v2/advisor/investors/7/documents"))
    .and(query_param("searchTerm", "R&D plan+2024"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;

  let query = DocumentQuery { search_term: Some("R&D plan+2024".into()), ..Default::default() };
  client_for(&server).advisor().investor_documents(7, query).await.unwrap();

  let request = only_request(&server).await;
  let pairs: Vec<(String, String)> =
    request.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
  assert_eq!(pairs, vec![("searchTerm".to_string(), "R&D plan+2024".to_string())]);
  assert_eq!(request.url.query(), Some("searchTerm=R%26D+plan%2B2024"));
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Get);
}

#[tokio::test]
async fn test_path_value_stays_in_one_segment() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/advisor/investors/a%20b%3Fc/profile"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  client
    .call("AdvisorInvestorProfile", &PathParams::new().with("investor_id", "a b?c"), QueryParams::new())
    .await
    .unwrap();

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), None);
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Get);
}

#[tokio::test]
async fn test_investor_account_transactions() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/investor/accounts/transactions"))
    .respond_with(ResponseTemplate::new(200))
    .mount(&server)
    .await;

  let query = TransactionQuery {
    start_date: chrono::NaiveDate::from_ymd_opt(2023, 12, 1),
    ignore_orion: Some(true),
    ..Default::default()
  };
  client_for(&server).investor().account_transactions("client-9", "ACC-1", query).await.unwrap();

  let request = only_request(&server).await;
  assert_eq!(
    request.url.query(),
    Some("accountNumber=ACC-1&clientIdentifier=client-9&startDate=2023-12-01")
  );
}

#[tokio::test]
async fn test_error_status_returned_unmodified() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/investor/profile"))
    .respond_with(
      ResponseTemplate::new(401)
        .insert_header("x-request-id", "abc123")
        .set_body_string("{\"message\":\"Invalid signature\"}"),
    )
    .mount(&server)
    .await;

  let response = client_for(&server).investor().profile("client-9").await.unwrap();
  assert_eq!(response.status(), 401);
  assert_eq!(response.headers().get("x-request-id").unwrap(), "abc123");
  assert_eq!(response.text().await.unwrap(), "{\"message\":\"Invalid signature\"}");
}

#[tokio::test]
async fn test_overrides_apply_to_one_call() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/advisor/investors")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

  let client = client_for(&server);
  let overrides = CredentialOverrides::new().user_guid("guid-2").secret_key("S2");
  client.call_with("Investors", &PathParams::new(), QueryParams::new(), &overrides).await.unwrap();

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), None);
  assert_signed(&request, &Credentials::new("K", "S2", "guid-2"), Method::Get);
}

#[tokio::test]
async fn test_missing_credentials_send_nothing() {
  let server = MockServer::start().await;
  Mock::given(path("/api/v2/advisor/accounts")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let config = Config::default_with_credentials("K", "S", "guid-1")
    .with_base_url(server.uri())
    .with_credentials(CredentialOverrides::new().api_key("K").user_guid("guid-1"));
  let client = WealthAccessClient::new(config).unwrap();

  let err = client.advisor().accounts(HoldingsQuery::default()).await.unwrap_err();
  assert!(matches!(err, Error::MissingCredentials(ref fields) if fields == &vec!["WA_SECRET_KEY"]));
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_operation_sends_nothing() {
  let server = MockServer::start().await;

  let err = client_for(&server).call("Portfolio", &PathParams::new(), QueryParams::new()).await.unwrap_err();
  assert!(matches!(err, Error::UnknownOperation(ref key) if key == "Portfolio"));
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_typed() {
  // Nothing listens on port 9 locally
  let config = Config::default_with_credentials("K", "S", "guid-1").with_base_url("http://127.0.0.1:9");
  let client = WealthAccessClient::new(config).unwrap();

  let err = client.advisor().investors().await.unwrap_err();
  assert!(matches!(err, Error::Transport(_)));
  assert!(!err.is_pre_flight());
}

#[tokio::test]
async fn test_firm_clients_signed_with_firm_param() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v2/firm/investors"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .expect(1)
    .mount(&server)
    .await;

  client_for(&server).firm().clients("firm-guid-3").await.unwrap();

  let request = only_request(&server).await;
  assert_eq!(request.url.query(), Some("firm=firm-guid-3"));
  assert_signed(&request, &Credentials::new("K", "S", "guid-1"), Method::Get);
}
