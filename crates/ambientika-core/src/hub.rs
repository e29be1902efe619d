// ── Hub: the polling coordinator ──
//
// One hub per configured account. Owns the authenticated session and
// the device list; entity adapters hold `Arc` references to the
// handles it vends. Failure classification follows the two-way split
// the host reacts to: re-authenticate vs. retry on the next tick.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use ambientika_api::{ApiClient, DeviceInfo, Error};

use crate::config::HubConfig;
use crate::device::DeviceHandle;
use crate::error::{CoreError, RefreshError};

/// Coordinator lifecycle, observable via [`Hub::subscribe_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubState {
    Unauthenticated,
    Authenticated,
    Refreshing,
    /// The session expired mid-flight; the user must re-authenticate.
    AuthFailed,
}

/// The single polling owner shared by all entities of one account.
pub struct Hub {
    config: HubConfig,
    client: RwLock<Option<Arc<ApiClient>>>,
    devices: RwLock<Vec<Arc<DeviceHandle>>>,
    state: watch::Sender<HubState>,
}

impl Hub {
    /// Create an unauthenticated hub. Call [`login()`](Self::login) to
    /// authenticate and discover devices.
    pub fn new(config: HubConfig) -> Self {
        // Transitions go through send_replace: they must land whether or
        // not anyone currently holds a subscriber.
        let (state, _) = watch::channel(HubState::Unauthenticated);
        Self {
            config,
            client: RwLock::new(None),
            devices: RwLock::new(Vec::new()),
            state,
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Authenticate and perform the initial device discovery.
    ///
    /// Called once at setup. Any failure here is fatal: authentication
    /// errors surface as "invalid credentials", an empty device list as
    /// "no supported devices found"; neither is retried.
    pub async fn login(&self) -> Result<(), CoreError> {
        let client = ApiClient::authenticate(
            &self.config.credentials,
            &self.config.host,
            &self.config.transport,
        )
        .await
        .map_err(CoreError::InvalidCredentials)?;
        let client = Arc::new(client);

        let infos = client.devices().await.map_err(|e| match e {
            Error::NoHouses => CoreError::NoDevicesFound,
            e if e.is_auth_expired() => CoreError::InvalidCredentials(e),
            e => CoreError::Discovery(e),
        })?;
        if infos.is_empty() {
            return Err(CoreError::NoDevicesFound);
        }

        *self.client.write().expect("client lock poisoned") = Some(Arc::clone(&client));
        self.apply_device_list(&client, infos);
        self.state.send_replace(HubState::Authenticated);

        info!(devices = self.devices().len(), "hub login complete");
        Ok(())
    }

    /// Re-list devices from the cloud.
    ///
    /// Invoked on every fixed-interval tick and once immediately at
    /// startup. On failure the previously known device list is kept, so
    /// bound entities retain their identity across a failed tick; only
    /// their status becomes unavailable through their own polls.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        let client = {
            let guard = self.client.read().expect("client lock poisoned");
            guard.clone()
        };
        let Some(client) = client else {
            return Err(RefreshError::AuthExpired(Error::Authentication {
                message: "hub is not logged in".into(),
            }));
        };

        self.state.send_replace(HubState::Refreshing);
        debug!("fetching device list from the Ambientika cloud");

        match client.devices().await {
            Ok(infos) => {
                self.apply_device_list(&client, infos);
                self.state.send_replace(HubState::Authenticated);
                debug!(devices = self.devices().len(), "refresh complete");
                Ok(())
            }
            Err(e) if e.is_auth_expired() => {
                self.state.send_replace(HubState::AuthFailed);
                Err(RefreshError::AuthExpired(e))
            }
            Err(e) => {
                self.state.send_replace(HubState::Authenticated);
                Err(RefreshError::UpdateFailed(e))
            }
        }
    }

    /// Spawn the fixed-interval refresh task.
    ///
    /// The first tick fires immediately; there is no backoff beyond the
    /// configured interval. A transient failure logs and waits for the
    /// next tick; an expired session stops the task for good.
    pub fn spawn_refresh_task(self: &Arc<Self>, cancel: CancellationToken) -> JoinHandle<()> {
        let hub = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(hub.config.poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    _ = interval.tick() => match hub.refresh().await {
                        Ok(()) => {}
                        Err(RefreshError::AuthExpired(e)) => {
                            warn!(error = %e, "re-authentication required; stopping refresh task");
                            break;
                        }
                        Err(RefreshError::UpdateFailed(e)) => {
                            warn!(error = %e, "refresh failed; retrying on next tick");
                        }
                    },
                }
            }
        })
    }

    // ── Device access ────────────────────────────────────────────────

    /// All currently known device handles.
    pub fn devices(&self) -> Vec<Arc<DeviceHandle>> {
        self.devices.read().expect("device lock poisoned").clone()
    }

    /// Look up one device by serial number.
    pub fn device(&self, serial: &str) -> Option<Arc<DeviceHandle>> {
        self.devices
            .read()
            .expect("device lock poisoned")
            .iter()
            .find(|d| d.serial_number() == serial)
            .cloned()
    }

    /// The current coordinator state.
    pub fn state(&self) -> HubState {
        *self.state.borrow()
    }

    /// Subscribe to coordinator state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<HubState> {
        self.state.subscribe()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Replace the device list, reusing existing handles for serials we
    /// already know so entities bound to them keep a canonical handle.
    fn apply_device_list(&self, client: &Arc<ApiClient>, infos: Vec<DeviceInfo>) {
        let mut devices = self.devices.write().expect("device lock poisoned");
        let next: Vec<Arc<DeviceHandle>> = infos
            .into_iter()
            .map(|info| {
                devices
                    .iter()
                    .find(|d| d.serial_number() == info.serial_number)
                    .map_or_else(
                        || Arc::new(DeviceHandle::new(info, Arc::clone(client))),
                        Arc::clone,
                    )
            })
            .collect();
        *devices = next;
    }
}
