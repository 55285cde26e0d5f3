//! Restaurant settings store
//!
//! Read-through store with change notification. The single writer is
//! [`SettingsStore::save`]; every successful save or refresh publishes the
//! new value to all subscribers through a `watch` channel. For changes made
//! by another process, a polling task re-fetches on an interval — the
//! change feed makes this cheap to keep coarse.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use shared::models::{RestaurantSettings, RestaurantSettingsUpdate};

use crate::{ClientResult, HttpClient};

/// Settings store with observer support
#[derive(Debug, Clone)]
pub struct SettingsStore {
    http: HttpClient,
    tx: watch::Sender<RestaurantSettings>,
}

impl SettingsStore {
    pub fn new(http: HttpClient) -> Self {
        let (tx, _) = watch::channel(RestaurantSettings::default());
        Self { http, tx }
    }

    /// Current value without fetching
    pub fn current(&self) -> RestaurantSettings {
        self.tx.borrow().clone()
    }

    /// Subscribe to settings changes
    pub fn subscribe(&self) -> watch::Receiver<RestaurantSettings> {
        self.tx.subscribe()
    }

    /// Fetch from the server and publish
    pub async fn refresh(&self) -> ClientResult<RestaurantSettings> {
        let settings: RestaurantSettings = self.http.get("/api/settings").await?;
        self.publish(settings.clone());
        Ok(settings)
    }

    /// Save (admin) and publish the server's merged result
    pub async fn save(&self, update: &RestaurantSettingsUpdate) -> ClientResult<RestaurantSettings> {
        let settings: RestaurantSettings = self.http.put("/api/settings", update).await?;
        self.publish(settings.clone());
        Ok(settings)
    }

    /// Spawn the interval-poll fallback for cross-process changes
    pub fn spawn_polling(&self, interval: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if let Err(e) = store.refresh().await {
                    tracing::debug!("settings poll failed: {}", e);
                }
            }
        })
    }

    fn publish(&self, settings: RestaurantSettings) {
        // send_replace never fails; subscribers may come and go
        self.tx.send_replace(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    #[tokio::test]
    async fn subscribers_see_published_values() {
        let store = SettingsStore::new(ClientConfig::default().build_http_client());
        let mut rx = store.subscribe();

        let mut settings = RestaurantSettings::default();
        settings.address = "King Fahd Road, Riyadh".to_string();
        store.publish(settings);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().address, "King Fahd Road, Riyadh");
        assert_eq!(store.current().address, "King Fahd Road, Riyadh");
    }
}
