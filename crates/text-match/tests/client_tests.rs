//! HTTP client tests against a mock comparison service.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use text_match::client::ComparisonClient;
use text_match::config::Config;
use text_match::error::ClientError;
use text_match::models::{ComparisonRequest, SelectedFile};

const COMPARE_PATH: &str = "/compare-pdfs-by-partition/";

fn client_for(server: &MockServer) -> ComparisonClient {
    ComparisonClient::new(Config::for_testing(&server.uri())).unwrap()
}

fn pdf(name: &str) -> SelectedFile {
    SelectedFile::new(name, format!("%PDF-1.4 {name}").into_bytes())
}

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn test_compare_sends_two_named_parts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPARE_PATH))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(header("accept", "application/json"))
        .and(body_string_contains("name=\"file1\"; filename=\"a.pdf\""))
        .and(body_string_contains("name=\"file2\"; filename=\"b.pdf\""))
        .and(body_string_contains("application/pdf"))
        .and(body_string_contains("%PDF-1.4 a.pdf"))
        .and(body_string_contains("%PDF-1.4 b.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plagiarized_paragraphs": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let result = client_for(&server).compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_compare_parses_full_service_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Comparação concluída",
            "similarity_cutoff": "80%",
            "minimum_partition_length": "32 caracteres",
            "summary": {
                "total_partitions_file1": 12,
                "total_partitions_file2": 9,
                "matching_pairs_count": 2
            },
            "plagiarized_paragraphs": [
                {
                    "doc1": {"partition_index": 3, "content": "first fragment"},
                    "doc2": {"partition_index": 7, "content": "second fragment"},
                    "similarity_score": 93,
                    "similarity_metric": "token_set_ratio"
                },
                {
                    "doc1": {"partition_index": 5, "content": "x"},
                    "doc2": {"partition_index": "Desconhecido", "content": "y"},
                    "similarity_score": 81,
                    "citation1": true
                }
            ]
        })))
        .mount(&server)
        .await;

    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let result = client_for(&server).compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap();

    assert_eq!(result.match_count(), 2);
    assert_eq!(result.cutoff_text().as_deref(), Some("80%"));
    assert_eq!(result.summary.as_ref().and_then(|s| s.total_partitions_file2), Some(9));

    let second = &result.paragraphs()[1];
    assert_eq!(second.score_text(), "81");
    assert!(second.has_citation1());
    assert!(!second.has_citation2());
    assert_eq!(second.doc2.partition_text().as_deref(), Some("Desconhecido"));
}

// =============================================================================
// Failure Mapping
// =============================================================================

#[tokio::test]
async fn test_server_error_maps_to_server_variant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let err = client_for(&server).compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap_err();

    assert!(matches!(err, ClientError::Server { status: 500, .. }));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_bad_request_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Ambos os arquivos devem ser do formato PDF (.pdf)"
        })))
        .mount(&server)
        .await;

    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let err = client_for(&server).compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("PDF"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json here"))
        .mount(&server)
        .await;

    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let err = client_for(&server).compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Nothing listens on port 1
    let client = ComparisonClient::new(Config::for_testing("http://127.0.0.1:1")).unwrap();
    let (a, b) = (pdf("a.pdf"), pdf("b.pdf"));
    let err = client.compare_pdfs(ComparisonRequest::new(&a, &b)).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
}

// =============================================================================
// Status Endpoint
// =============================================================================

#[tokio::test]
async fn test_status_returns_service_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "PDF Plagiarism/Similarity API está rodando."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = client_for(&server).status().await.unwrap();
    assert!(status.message.contains("rodando"));
}

#[tokio::test]
async fn test_status_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).status().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}
