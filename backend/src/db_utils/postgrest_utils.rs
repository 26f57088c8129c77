use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::config::StorefrontConfig;
use crate::db_utils::table_query::TableQuery;

/// Client for the hosted PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestClient {
    pub fn new(base_url: String, config: &StorefrontConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { client, base_url, api_key: config.api_key.clone() })
    }

    pub async fn postgrest_select<T: DeserializeOwned>(&self, query: &TableQuery) -> anyhow::Result<Vec<T>> {
        let t0 = std::time::Instant::now();
        let url = format!("{}/{}", self.base_url, query.table);
        let params = query.to_postgrest_params();
        tracing::debug!("REST SELECT {}: {:?}", query.table, params);

        let mut request = self.client.get(url).query(&params).header("Accept", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key).bearer_auth(api_key);
        }
        let response = request.send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let rows: Vec<T> = serde_json::from_str(&response_txt)
            .with_context(|| format!("malformed response from table {}", query.table))?;
        let dt_ms = t0.elapsed().as_millis() as u32;
        tracing::info!("REST SELECT {}: {} rows in {}ms", query.table, rows.len(), dt_ms);
        Ok(rows)
    }
}
