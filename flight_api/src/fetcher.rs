use crate::api_models::{FlightRecord, RegionFlightRecord, find_flight, normalize_callsign};
use crate::error::{ApiError, FetchError};
use shared::UpstreamConfig;
use shared::opensky::states::{BoundingBox, StateVector, StatesResponse};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the upstream states endpoint. Cheap to clone; the inner `reqwest::Client` is pooled.
#[derive(Clone)]
pub struct StatesFetcher {
    http_client: reqwest::Client,
    states_url: Arc<str>,
}

impl StatesFetcher {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            states_url: Arc::from(config.states_url.as_str()),
        })
    }

    #[instrument(skip(self), fields(url = %self.states_url))]
    async fn fetch_states(
        &self,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<StateVector>, FetchError> {
        let mut request = self.http_client.get(&*self.states_url);
        if let Some(bounds) = &bounds {
            request = request.query(bounds);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        let states = serde_json::from_str::<StatesResponse>(&body)?.into_states();
        debug!(name: "upstream.states.received", count = states.len(), "received state vectors");

        Ok(states)
    }

    pub async fn track(&self, callsign: &str) -> Result<FlightRecord, ApiError> {
        let states = self.fetch_states(None).await?;
        find_flight(states, callsign)
            .ok_or_else(|| ApiError::FlightNotFound(normalize_callsign(callsign)))
    }

    pub async fn region(&self, bounds: BoundingBox) -> Result<Vec<RegionFlightRecord>, FetchError> {
        let states = self.fetch_states(Some(bounds)).await?;
        Ok(states.into_iter().map(RegionFlightRecord::from).collect())
    }
}
