//! Thin client for the external geocoding collaborator.
//!
//! Talks to a Nominatim-compatible HTTP endpoint: forward search with a
//! viewbox/country restriction, reverse lookup for a picked point, and a
//! status probe used to decide whether interactive picking is available
//! at all. Every failure here is non-fatal to the application; callers
//! degrade to manual address entry.

use crate::domain::Coordinates;
use crate::picker::MapRegion;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!("recycle-pickup/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const SEARCH_LIMIT: u8 = 5;

/// One forward-geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub display_name: String,
    lat: String,
    lon: String,
}

impl Place {
    /// Parsed coordinates; the endpoint serializes them as strings.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates {
            lat: self.lat.parse().ok()?,
            lng: self.lon.parse().ok()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoint: String,
    region: MapRegion,
}

impl GeocodeClient {
    /// Client against the public endpoint, restricted to `region`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(region: MapRegion) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, region)
    }

    /// Same as [`GeocodeClient::new`] but against a custom endpoint, e.g.
    /// a self-hosted instance.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn with_endpoint(endpoint: impl Into<String>, region: MapRegion) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            region,
        })
    }

    /// Check that the endpoint answers at all.
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unreachable or unhealthy.
    pub async fn probe(&self) -> Result<()> {
        self.http
            .get(format!("{}/status", self.endpoint))
            .send()
            .await
            .context("geocoding service unreachable")?
            .error_for_status()
            .context("geocoding service reported an error")?;
        Ok(())
    }

    /// Forward-geocode free text, restricted to the configured region.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the payload is not the
    /// expected shape.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>> {
        let places = self
            .http
            .get(format!("{}/search", self.endpoint))
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", &SEARCH_LIMIT.to_string()),
                ("countrycodes", self.region.country_code),
                ("viewbox", &self.viewbox()),
                ("bounded", "1"),
            ])
            .send()
            .await
            .context("place search request failed")?
            .error_for_status()
            .context("place search rejected")?
            .json::<Vec<Place>>()
            .await
            .context("unexpected place search payload")?;
        Ok(places)
    }

    /// Resolve a point to a display address. `None` when the service has
    /// nothing for the point.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the payload is not the
    /// expected shape.
    pub async fn reverse(&self, point: Coordinates) -> Result<Option<String>> {
        let response = self
            .http
            .get(format!("{}/reverse", self.endpoint))
            .query(&[
                ("lat", point.lat.to_string()),
                ("lon", point.lng.to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .send()
            .await
            .context("reverse geocode request failed")?
            .error_for_status()
            .context("reverse geocode rejected")?
            .json::<ReverseResponse>()
            .await
            .context("unexpected reverse geocode payload")?;
        Ok(response.display_name)
    }

    /// Viewbox in the left,top,right,bottom order the endpoint expects.
    fn viewbox(&self) -> String {
        let bounds = self.region.bounds;
        format!(
            "{},{},{},{}",
            bounds.west, bounds.north, bounds.east, bounds.south
        )
    }
}
