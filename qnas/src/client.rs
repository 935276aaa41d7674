use reqwest::header;

use crate::{
    error::Error,
    model::{BuildingRecord, StreetRecord, ZoneRecord},
};

/// Public QNAS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://qnas.qa";

/// HTTP client for the QNAS geocoding API.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    domain: Option<String>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fetch the list of zones in Qatar
    pub async fn fetch_zones(&self) -> Result<Vec<ZoneRecord>, Error> {
        self.get_json(&format!("{}/public/get_zones", self.base_url))
            .await
    }

    /// Fetch streets for a given zone
    pub async fn fetch_streets(&self, zone_number: &str) -> Result<Vec<StreetRecord>, Error> {
        self.get_json(&format!("{}/get_streets/{}", self.base_url, zone_number))
            .await
    }

    /// Fetch buildings for a given zone and street
    pub async fn fetch_buildings(
        &self,
        zone_number: &str,
        street_number: &str,
    ) -> Result<Vec<BuildingRecord>, Error> {
        self.get_json(&format!(
            "{}/get_buildings/{}/{}",
            self.base_url, zone_number, street_number
        ))
        .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.token {
            request = request.header("X-Token", token);
        }
        if let Some(domain) = &self.domain {
            request = request.header("X-Domain", domain);
        }

        let response = request.send().await?.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    domain: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Value for the `X-Token` header of the authenticated API variant.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Value for the `X-Domain` header of the authenticated API variant.
    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = &self.user_agent {
            http = http.user_agent(user_agent);
        }
        let http = http.build()?;

        Ok(Client {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: self.token,
            domain: self.domain,
        })
    }
}
