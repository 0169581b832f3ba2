//! Metrics sub-client.

use crate::client::KlaviyoClient;
use crate::domain::metrics::{ExportParams, TimelineParams};
use crate::error::SdkError;
use crate::request::{HttpMethod, Payload};
use crate::shared::{require, segment};
use serde_json::Value;

const METRIC_ID_MISSING: &str = "Metric ID was not provided.";

pub struct Metrics<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> Metrics<'a> {
    /// One page of the metrics defined on the account.
    pub async fn get_metrics(
        &self,
        page: Option<u32>,
        count: Option<u32>,
    ) -> Result<Value, SdkError> {
        let mut payload = Payload::new();
        payload.insert_opt("page", page).insert_opt("count", count);
        self.client.http.v1(HttpMethod::Get, "metrics", payload).await
    }

    /// Event timeline across all metrics.
    pub async fn get_metrics_timeline(&self, params: &TimelineParams) -> Result<Value, SdkError> {
        let payload = Payload::from_serialize(params)?;
        self.client
            .http
            .v1(HttpMethod::Get, "metrics/timeline", payload)
            .await
    }

    pub async fn get_metric_timeline_by_id(
        &self,
        metric_id: &str,
        params: &TimelineParams,
    ) -> Result<Value, SdkError> {
        require(metric_id, METRIC_ID_MISSING)?;
        let payload = Payload::from_serialize(params)?;
        let resource = format!("metric/{}/timeline", segment(metric_id));
        self.client.http.v1(HttpMethod::Get, &resource, payload).await
    }

    /// Aggregated export of a single metric.
    pub async fn get_metric_export(
        &self,
        metric_id: &str,
        params: &ExportParams,
    ) -> Result<Value, SdkError> {
        require(metric_id, METRIC_ID_MISSING)?;
        let payload = Payload::from_serialize(params)?;
        let resource = format!("metric/{}/export", segment(metric_id));
        self.client.http.v1(HttpMethod::Get, &resource, payload).await
    }
}
