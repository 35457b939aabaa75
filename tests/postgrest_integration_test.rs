use brand_namer::core::service::ServiceSettings;
use brand_namer::{BrandError, BrandService, GenerationRequest, PostgrestCatalog, WordCount};
use httpmock::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

fn service(server: &MockServer) -> BrandService {
    let catalog = Arc::new(
        PostgrestCatalog::new(&server.base_url(), "anon-key", Duration::from_secs(5)).unwrap(),
    );
    BrandService::new(catalog.clone(), catalog, ServiceSettings { audit_limit: 2 })
}

/// 完整流程：讀取關鍵字、生成名稱、寫入稽核紀錄
#[tokio::test]
async fn test_generate_reads_keywords_and_writes_audit() {
    let server = MockServer::start();

    let keywords_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/brand_keywords")
            .query_param("industry_id", "eq.kuliner")
            .query_param("order", "created_at.asc")
            .header("apikey", "anon-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "k1", "industry_id": "kuliner", "keyword": "Sedap", "created_at": "2024-05-01T10:00:00Z"},
                {"id": "k2", "industry_id": "kuliner", "keyword": "Rasa", "created_at": "2024-05-01T10:01:00Z"},
                {"id": "k3", "industry_id": "kuliner", "keyword": "Lezat", "created_at": null}
            ]));
    });

    let audit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/brand_generated_names")
            .header("Prefer", "return=minimal")
            .body_contains("\"industry_id\":\"kuliner\"")
            .body_contains("\"word_length\":2");
        then.status(201);
    });

    let request = GenerationRequest::new("kuliner", WordCount::Two).with_separator(" ");
    let response = service(&server)
        .generate(&request, &mut StdRng::seed_from_u64(10))
        .await
        .unwrap();

    keywords_mock.assert();
    audit_mock.assert();
    assert_eq!(response.total, 6);
}

#[tokio::test]
async fn test_generate_with_no_keywords_skips_audit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/brand_keywords");
        then.status(200).json_body(serde_json::json!([]));
    });
    let audit_mock = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/brand_generated_names");
        then.status(201);
    });

    let request = GenerationRequest::new("kosong", WordCount::Three);
    let err = service(&server)
        .generate(&request, &mut StdRng::seed_from_u64(10))
        .await
        .unwrap_err();

    assert!(matches!(err, BrandError::NoKeywords { .. }));
    audit_mock.assert_hits(0);
}

#[tokio::test]
async fn test_audit_failure_still_returns_names() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/brand_keywords");
        then.status(200).json_body(serde_json::json!([
            {"id": "k1", "industry_id": "fashion", "keyword": "Gaya"},
            {"id": "k2", "industry_id": "fashion", "keyword": "Mode"}
        ]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/brand_generated_names");
        then.status(500).body("insert failed");
    });

    let request = GenerationRequest::new("fashion", WordCount::Two);
    let response = service(&server)
        .generate(&request, &mut StdRng::seed_from_u64(10))
        .await
        .unwrap();

    assert_eq!(response.total, 2);
}

#[tokio::test]
async fn test_create_industry_returns_representation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/brand_industries")
            .header("Prefer", "return=representation")
            .body_contains("\"name\":\"Kuliner\"");
        then.status(201).json_body(serde_json::json!([
            {"id": "ind-1", "name": "Kuliner", "description": null, "created_at": "2024-05-01T10:00:00+00:00"}
        ]));
    });

    let industry = service(&server)
        .create_industry("  Kuliner ", Some("  "))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(industry.id, "ind-1");
    assert!(industry.created_at.is_some());
}

#[tokio::test]
async fn test_delete_industry_removes_keywords_first() {
    let server = MockServer::start();
    let keywords_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/brand_keywords")
            .query_param("industry_id", "eq.ind-1");
        then.status(204);
    });
    let industry_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/brand_industries")
            .query_param("id", "eq.ind-1");
        then.status(204);
    });

    service(&server).delete_industry("ind-1").await.unwrap();

    keywords_mock.assert();
    industry_mock.assert();
}

#[tokio::test]
async fn test_keyword_insert_rejected_by_backend() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/brand_keywords");
        then.status(409)
            .body(r#"{"message":"insert or update on table violates foreign key constraint"}"#);
    });

    let report = service(&server)
        .import_keywords("missing", "Tech\nSoft\nCode")
        .await
        .unwrap();

    assert_eq!(report.added, 0);
    assert_eq!(report.failed, 3);
}
