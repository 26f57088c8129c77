//! Catalog data source selection.

use anyhow::Context;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::config::StorefrontConfig;
use crate::db_utils::fixture_tables::FixtureTables;
use crate::db_utils::postgrest_utils::RestClient;
use crate::db_utils::table_query::TableQuery;

#[derive(Debug, Clone)]
pub enum DataSource {
    Rest(RestClient),
    Fixture(FixtureTables),
}

impl DataSource {
    pub fn from_config(config: &StorefrontConfig) -> anyhow::Result<Self> {
        if let Some(rest_url) = &config.rest_url {
            tracing::info!("catalog data source: REST endpoint {}", rest_url);
            return Ok(DataSource::Rest(RestClient::new(rest_url.clone(), config)?));
        }
        let tables = match &config.fixture_path {
            Some(path) => {
                tracing::info!("catalog data source: fixture catalog {}", path.display());
                FixtureTables::from_path(path)?
            }
            None => {
                tracing::info!("catalog data source: bundled fixture catalog");
                FixtureTables::bundled()?
            }
        };
        Ok(DataSource::Fixture(tables))
    }

    pub async fn select<T: DeserializeOwned>(&self, query: &TableQuery) -> anyhow::Result<Vec<T>> {
        if query.matches_nothing() {
            tracing::debug!("skipping {} query that can match no rows", query.table);
            return Ok(vec![]);
        }
        match self {
            DataSource::Rest(client) => client.postgrest_select(query).await,
            DataSource::Fixture(tables) => {
                let rows = tables.select(query)?;
                rows.into_iter()
                    .map(|row| serde_json::from_value::<T>(row).with_context(|| format!("malformed fixture row in table {}", query.table)))
                    .collect()
            }
        }
    }

    /// First row or an error naming what was looked up.
    pub async fn select_one<T: DeserializeOwned>(&self, query: &TableQuery, what: &str) -> anyhow::Result<T> {
        let rows = self.select::<T>(&query.clone().limit(1)).await?;
        rows.into_iter().next().with_context(|| format!("{what} not found"))
    }
}

static DATA_SOURCE: OnceCell<DataSource> = OnceCell::const_new();

pub async fn get_data_source() -> anyhow::Result<&'static DataSource> {
    DATA_SOURCE
        .get_or_try_init(|| async {
            let config = StorefrontConfig::from_env()?;
            DataSource::from_config(&config)
        })
        .await
}
