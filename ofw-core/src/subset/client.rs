//! Native HTTP client for the subset API (feature `api`).
//!
//! Used by offline tooling that pre-fetches grids; browser builds use the
//! fetch wrapper in `ofw-chart-ui` instead.

use super::{OutputFormat, SubsetError, SubsetGrid, SubsetParams, DEFAULT_BASE_URL};

/// Async client bound to one base URL.
#[derive(Debug, Clone)]
pub struct SubsetClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for SubsetClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SubsetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn get(&self, params: &SubsetParams) -> Result<reqwest::Response, SubsetError> {
        let url = params.to_url(&self.base_url)?;
        log::debug!("subset request: {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SubsetError::Decode(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SubsetError::Http {
                status: status.as_u16(),
                text,
            });
        }
        Ok(response)
    }

    /// Fetch a parsed JSON grid; the format is forced to json.
    pub async fn fetch_grid(&self, params: &SubsetParams) -> Result<SubsetGrid, SubsetError> {
        let params = params.clone().with_fmt(OutputFormat::Json);
        let response = self.get(&params).await?;
        let text = response
            .text()
            .await
            .map_err(|e| SubsetError::Decode(e.to_string()))?;
        SubsetGrid::parse(&text).map_err(|e| SubsetError::Decode(e.to_string()))
    }

    /// Fetch the raw netcdf body.
    pub async fn fetch_netcdf(&self, params: &SubsetParams) -> Result<Vec<u8>, SubsetError> {
        let params = params.clone().with_fmt(OutputFormat::Netcdf);
        let response = self.get(&params).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SubsetError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
