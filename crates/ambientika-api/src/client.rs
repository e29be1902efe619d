// Ambientika cloud API HTTP client
//
// Wraps `reqwest::Client` with bearer-token auth, URL construction, and
// response classification. The house → room → device hierarchy traversal
// lives here too, so callers only ever see a flat device list.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret as _;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::models::{ChangeMode, ChangeModeRequest, DeviceInfo, DeviceStatus, House};
use crate::transport::TransportConfig;

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    jwt_token: String,
}

/// Authenticated client for the Ambientika cloud API.
///
/// Created through [`ApiClient::authenticate`]; every request carries the
/// bearer token obtained at login. The client holds no mutable state and
/// is cheap to share behind an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Authenticate against the cloud and return a ready client.
    ///
    /// Every failure on this path -- transport, non-success status, or an
    /// unparseable login response -- surfaces as [`Error::Authentication`];
    /// nothing from the login exchange is passed through raw.
    pub async fn authenticate(
        credentials: &Credentials,
        host: &Url,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        debug!(username = %credentials.username, "authenticating with the Ambientika cloud");

        let login_client = transport.build_client()?;
        let url = join_url(host, "users/authenticate")?;

        let resp = login_client
            .post(url)
            .json(&LoginRequest {
                username: &credentials.username,
                password: credentials.password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("login request failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("login rejected (HTTP {status})"),
            });
        }

        let login: LoginResponse = resp.json().await.map_err(|e| Error::Authentication {
            message: format!("unparseable login response: {e}"),
        })?;

        let client = Self::with_token(&login.jwt_token, host, transport)?;
        debug!("authentication successful");
        Ok(client)
    }

    /// Build a client from an already-issued JWT, skipping the login
    /// exchange. Useful when a token from a previous session is still
    /// valid; an expired token surfaces as an auth error on first use.
    pub fn with_token(token: &str, host: &Url, transport: &TransportConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| Error::Authentication {
                message: format!("token is not a valid header value: {e}"),
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url: host.clone(),
        })
    }

    /// The cloud host this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the configured houses with their rooms and devices.
    ///
    /// An account without houses cannot have devices; that case is
    /// [`Error::NoHouses`] so the caller can abort setup with a clear
    /// diagnostic.
    pub async fn houses(&self) -> Result<Vec<House>, Error> {
        let houses: Vec<House> = self.get(join_url(&self.base_url, "house/houses-info")?).await?;
        if houses.is_empty() {
            return Err(Error::NoHouses);
        }
        Ok(houses)
    }

    /// Fetch all devices as a flat list.
    ///
    /// The house → room grouping is discarded; only the device handles
    /// (serial number, display name) survive.
    pub async fn devices(&self) -> Result<Vec<DeviceInfo>, Error> {
        let houses = self.houses().await?;
        let devices: Vec<DeviceInfo> = houses
            .into_iter()
            .flat_map(|house| house.rooms)
            .flat_map(|room| room.devices)
            .collect();
        debug!(count = devices.len(), "flattened device list");
        Ok(devices)
    }

    /// Fetch the current status of one device.
    pub async fn device_status(&self, serial: &str) -> Result<DeviceStatus, Error> {
        let mut url = join_url(&self.base_url, "device/device-status")?;
        url.query_pairs_mut()
            .append_pair("deviceSerialNumber", serial);
        self.get(url).await
    }

    /// Replace the full operating state of one device.
    pub async fn change_mode(&self, serial: &str, change: ChangeMode) -> Result<(), Error> {
        let url = join_url(&self.base_url, "device/change-mode")?;
        debug!("POST {url}");
        let resp = self
            .http
            .post(url)
            .json(&ChangeModeRequest {
                device_serial_number: serial,
                change,
            })
            .send()
            .await
            .map_err(Error::Transport)?;
        expect_success(resp).await
    }

    /// Reset the filter-wear counter of one device.
    ///
    /// The cloud exposes no typed endpoint for this; it is a raw
    /// authenticated call with the serial as a query parameter.
    pub async fn reset_filter(&self, serial: &str) -> Result<(), Error> {
        let mut url = join_url(&self.base_url, "device/reset-filter")?;
        url.query_pairs_mut()
            .append_pair("deviceSerialNumber", serial);
        debug!("GET {url}");
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        expect_success(resp).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and deserialize the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid token".into(),
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Classify a response where only success matters (empty or ignored body).
async fn expect_success(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication {
            message: "session expired or invalid token".into(),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            message: preview(&body),
        });
    }
    Ok(())
}

/// Append a relative path to the host URL.
fn join_url(base: &Url, path: &str) -> Result<Url, Error> {
    let full = format!("{}/{path}", base.as_str().trim_end_matches('/'));
    Ok(Url::parse(&full)?)
}

/// First 200 characters of a response body, for error messages.
fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
