//! Integration tests for the profile, metric, data-privacy and raw endpoints.

use httpmock::prelude::*;
use serde_json::{json, Map, Value};

use klaviyo_sdk::prelude::*;

const API_KEY: &str = "pk_test";

fn client_for(server: &MockServer) -> KlaviyoClient {
    KlaviyoClient::builder()
        .api_key(API_KEY)
        .base_url(&server.base_url())
        .build()
        .unwrap()
}

mod profiles {
    use super::*;

    #[tokio::test]
    async fn test_get_profile() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/person/P1")
                    .query_param("api_key", API_KEY);
                then.status(200)
                    .json_body(json!({"object": "person", "id": "P1", "$email": "a@x.com"}));
            })
            .await;

        let person = client_for(&server).profiles().get_profile("P1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(person["$email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_update_profile_sends_form_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v1/person/P1")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body_contains("%24first_name=Ada")
                    .body_contains("api_key=pk_test");
                then.status(200).json_body(json!({"id": "P1", "$first_name": "Ada"}));
            })
            .await;

        let mut properties = Map::new();
        properties.insert("$first_name".to_string(), Value::from("Ada"));
        let person = client_for(&server)
            .profiles()
            .update_profile("P1", &properties)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(person["$first_name"], "Ada");
    }

    #[tokio::test]
    async fn test_profile_timeline() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/person/P1/metrics/timeline")
                    .query_param("count", "10")
                    .query_param("sort", "asc");
                then.status(200).json_body(json!({"data": [], "next": null}));
            })
            .await;

        let params = TimelineParams::new().with_count(10).with_sort(SortOrder::Asc);
        let timeline = client_for(&server)
            .profiles()
            .get_profile_metrics_timeline("P1", &params)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(timeline["data"], json!([]));
    }

    #[tokio::test]
    async fn test_search_by_email() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/people/search")
                    .query_param("email", "ada@example.com")
                    .query_param("api_key", API_KEY);
                then.status(200).json_body(json!({"id": "P42"}));
            })
            .await;

        let id = client_for(&server)
            .profiles()
            .get_profile_id_by_email("ada@example.com")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(id, "P42");
    }
}

mod metrics {
    use super::*;

    #[tokio::test]
    async fn test_get_metrics_skips_unset_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/metrics")
                    .query_param("count", "50");
                then.status(200).json_body(json!({"data": [{"id": "M1"}], "page": 0}));
            })
            .await;

        let metrics = client_for(&server)
            .metrics()
            .get_metrics(None, Some(50))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(metrics["data"][0]["id"], "M1");
    }

    #[tokio::test]
    async fn test_metric_export_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/metric/M1/export")
                    .query_param("start_date", "2024-01-01")
                    .query_param("end_date", "2024-01-31")
                    .query_param("unit", "day")
                    .query_param("measurement", "count");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let params = ExportParams::new()
            .with_date_range("2024-01-01", "2024-01-31")
            .with_unit(ExportUnit::Day)
            .with_measurement("count");
        client_for(&server)
            .metrics()
            .get_metric_export("M1", &params)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_metric_timeline_by_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/metric/M1/timeline")
                    .query_param("since", "1700000000");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let params = TimelineParams::new().with_since("1700000000");
        client_for(&server)
            .metrics()
            .get_metric_timeline_by_id("M1", &params)
            .await
            .unwrap();

        mock.assert_async().await;
    }
}

mod data_privacy {
    use super::*;

    #[tokio::test]
    async fn test_deletion_request_sends_single_identifier() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/data-privacy/deletion-request")
                    .json_body(json!({"api_key": API_KEY, "phone_number": "+15555550100"}));
                then.status(200).json_body(json!({}));
            })
            .await;

        client_for(&server)
            .data_privacy()
            .request_profile_deletion(&DeletionTarget::PhoneNumber("+15555550100".into()))
            .await
            .unwrap();

        mock.assert_async().await;
    }
}

mod raw {
    use super::*;

    #[tokio::test]
    async fn test_v2_request_strips_null_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/campaigns")
                    .json_body(json!({"api_key": API_KEY, "name": "Spring"}));
                then.status(200).json_body(json!({"id": "C1"}));
            })
            .await;

        let mut payload = Payload::new();
        payload.insert("name", "Spring").insert("subject", Value::Null);
        let resp = client_for(&server)
            .v2_request(HttpMethod::Post, "/campaigns", payload)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp["id"], "C1");
    }
}

#[tokio::test]
async fn test_missing_identifiers_never_reach_the_server() {
    let server = MockServer::start_async().await;
    let catch_all = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;
    let client = client_for(&server);

    let err = client.profiles().get_profile("").await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client
        .profiles()
        .update_profile(" ", &Map::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client
        .profiles()
        .get_profile_metrics_timeline("", &TimelineParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client.profiles().get_profile_id_by_email("").await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client
        .metrics()
        .get_metric_timeline_by_id("", &TimelineParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client
        .metrics()
        .get_metric_export("", &ExportParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    let err = client
        .data_privacy()
        .request_profile_deletion(&DeletionTarget::Email(String::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));

    catch_all.assert_hits_async(0).await;
}
