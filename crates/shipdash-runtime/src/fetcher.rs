//! Shipment list retrieval.
//!
//! One best-effort attempt per call: no retries, no timeout, no caching.
//! [`ShipmentFetcher::fetch_shipments`] never fails; every problem becomes
//! the `Error` variant of [`FetchResult`].

use crate::source::ShipmentSource;
use crate::{Error, Result};
use shipdash_core::FetchSlot;
use shipdash_types::{FetchFailure, FetchResult, FetchStatus, Shipment, parse_shipments};

const USER_AGENT: &str = concat!("shipdash/", env!("CARGO_PKG_VERSION"));

pub struct ShipmentFetcher {
    source: ShipmentSource,
    client: reqwest::Client,
}

impl ShipmentFetcher {
    pub fn new(source: ShipmentSource) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { source, client })
    }

    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        Self::new(ShipmentSource::parse(endpoint)?)
    }

    pub fn source(&self) -> &ShipmentSource {
        &self.source
    }

    /// Fetch and decode the full list, propagating the underlying error.
    pub async fn try_fetch(&self) -> Result<Vec<Shipment>> {
        tracing::debug!(source = %self.source, "fetching shipments");

        let body = match &self.source {
            ShipmentSource::Http(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?
                    .error_for_status()?;
                response.bytes().await?.to_vec()
            }
            ShipmentSource::File(path) => tokio::fs::read(path).await.map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            })?,
        };

        let shipments = parse_shipments(&body)?;
        tracing::info!(count = shipments.len(), "fetched shipments");
        Ok(shipments)
    }

    /// Like [`try_fetch`](Self::try_fetch) with every error collapsed into [`FetchFailure`].
    pub async fn fetch_outcome(&self) -> std::result::Result<Vec<Shipment>, FetchFailure> {
        self.try_fetch().await.map_err(|err| {
            tracing::warn!(source = %self.source, error = %err, "shipment fetch failed");
            FetchFailure::new(err.to_string())
        })
    }

    /// Resolve to `Success` or `Error`; never returns an error itself.
    pub async fn fetch_shipments(&self) -> FetchResult {
        self.fetch_outcome().await.into()
    }

    /// Run one fetch lifecycle against `slot`: Loading until this call resolves it.
    pub async fn refresh(&self, slot: &mut FetchSlot) -> FetchStatus {
        let ticket = slot.begin();
        let outcome = self.fetch_outcome().await;
        slot.resolve(ticket, outcome).status()
    }
}
