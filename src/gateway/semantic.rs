//! Semantic layer lookups: models, metrics, and data-set schemas

use crate::config::API_PREFIX;
use crate::gateway::error::GatewayError;
use crate::gateway::types::{
    DataSetNode, DataSetSchema, Metric, MetricPageRequest, PageList, ResultEnvelope,
};
use crate::gateway::GatewayClient;

/// Page size large enough to fetch a model's metrics in one call
const METRIC_PAGE_SIZE: u32 = 2000;

impl GatewayClient {
    /// Fetch the domain / data-set tree
    pub async fn data_set_tree(&self) -> Result<ResultEnvelope<Vec<DataSetNode>>, GatewayError> {
        self.get(&format!("{}/chat/conf/getDomainDataSetTree", API_PREFIX))
            .await
    }

    /// List the metrics defined on one model
    ///
    /// Wraps the model id in a single-element identifier list and pins
    /// the paging to the first page of 2000 entries.
    pub async fn query_metrics(
        &self,
        model_id: i64,
    ) -> Result<ResultEnvelope<PageList<Metric>>, GatewayError> {
        let body = MetricPageRequest {
            model_ids: vec![model_id],
            current: 1,
            page_size: METRIC_PAGE_SIZE,
        };
        self.post_json(&format!("{}/semantic/metric/queryMetric", API_PREFIX), &body)
            .await
    }

    /// Fetch the schema of one data set
    pub async fn data_set_schema(
        &self,
        data_set_id: i64,
    ) -> Result<ResultEnvelope<DataSetSchema>, GatewayError> {
        self.get(&format!(
            "{}/chat/conf/getDataSetSchema/{}",
            API_PREFIX, data_set_id
        ))
        .await
    }
}
