//! OpenSky Network REST client — OAuth2 token retrieval and bounding-box
//! state queries.
//!
//! The web layer talks to the `StateProvider` trait, not to this client
//! directly, so handlers can be exercised with a stub.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use skynear_core::geo::GeoPoint;
use skynear_core::types::{AircraftState, Result, SkynearError};

const TOKEN_URL: &str =
    "https://auth.opensky-network.org/auth/realms/opensky-network/protocol/openid-connect/token";
const STATES_URL: &str = "https://opensky-network.org/api/states/all";

/// Every upstream request is cut off after this long.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Supplies aircraft states in a box around a center point.
#[async_trait]
pub trait StateProvider: Send + Sync {
    async fn states_around(&self, center: GeoPoint, delta_deg: f64) -> Result<Vec<AircraftState>>;
}

// ---------------------------------------------------------------------------
// OpenSky client
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct StatesResponse {
    states: Option<Vec<Vec<serde_json::Value>>>,
}

pub struct OpenSkyClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
}

impl OpenSkyClient {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        OpenSkyClient {
            http: reqwest::Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Client-credentials token from the OpenSky auth realm.
    async fn fetch_token(&self) -> Result<String> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .timeout(HTTP_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SkynearError::UpstreamAuth(e.to_string()))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SkynearError::UpstreamAuth(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl StateProvider for OpenSkyClient {
    async fn states_around(&self, center: GeoPoint, delta_deg: f64) -> Result<Vec<AircraftState>> {
        let token = self.fetch_token().await?;

        let url = format!(
            "{STATES_URL}?lamin={}&lomin={}&lamax={}&lomax={}",
            center.lat - delta_deg,
            center.lon - delta_deg,
            center.lat + delta_deg,
            center.lon + delta_deg,
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .timeout(HTTP_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SkynearError::UpstreamData(e.to_string()))?;

        let body: StatesResponse = response
            .json()
            .await
            .map_err(|e| SkynearError::UpstreamData(e.to_string()))?;

        Ok(body
            .states
            .unwrap_or_default()
            .iter()
            .map(|raw| parse_state(raw))
            .collect())
    }
}

/// OpenSky state vectors are positional JSON arrays: 0 icao24, 1 callsign,
/// 2 origin country, 5 longitude, 6 latitude, 7 barometric altitude.
fn parse_state(raw: &[serde_json::Value]) -> AircraftState {
    AircraftState {
        icao24: raw.first().and_then(|v| v.as_str()).map(str::to_string),
        callsign: raw.get(1).and_then(|v| v.as_str()).map(str::to_string),
        origin_country: raw.get(2).and_then(|v| v.as_str()).map(str::to_string),
        lon: raw.get(5).and_then(|v| v.as_f64()),
        lat: raw.get(6).and_then(|v| v.as_f64()),
        altitude_m: raw.get(7).and_then(|v| v.as_f64()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_state_full() {
        let raw = json!([
            "4840d6", "TAP123  ", "Portugal", 1700000000, 1700000000,
            -8.23, 41.22, 11000.5
        ]);
        let state = parse_state(raw.as_array().unwrap());
        assert_eq!(state.icao24.as_deref(), Some("4840d6"));
        assert_eq!(state.callsign.as_deref(), Some("TAP123  "));
        assert_eq!(state.origin_country.as_deref(), Some("Portugal"));
        assert_eq!(state.lon, Some(-8.23));
        assert_eq!(state.lat, Some(41.22));
        assert_eq!(state.altitude_m, Some(11000.5));
    }

    #[test]
    fn test_parse_state_null_position() {
        let raw = json!([
            "4840d6", "TAP123", "Portugal", null, null, null, null, null
        ]);
        let state = parse_state(raw.as_array().unwrap());
        assert!(state.lat.is_none());
        assert!(state.lon.is_none());
        assert!(state.position().is_none());
    }

    #[test]
    fn test_parse_state_short_array() {
        let raw = json!(["4840d6"]);
        let state = parse_state(raw.as_array().unwrap());
        assert_eq!(state.icao24.as_deref(), Some("4840d6"));
        assert!(state.callsign.is_none());
        assert!(state.position().is_none());
    }

    #[test]
    fn test_states_response_null_states() {
        let body: StatesResponse = serde_json::from_str(r#"{"time": 1700000000}"#).unwrap();
        assert!(body.states.is_none());
    }
}
