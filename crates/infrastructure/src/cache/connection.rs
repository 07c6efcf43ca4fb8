use std::sync::Arc;
use std::time::Duration;

use ferronote_application::ports::ConnectionState;
use ferronote_domain::config::CacheConfig;
use redis::aio::ConnectionManager;
use redis::Client;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

/// Owns the cache backend connection and publishes its lifecycle state.
///
/// The state transitions `Disconnected → Connecting → Ready →
/// Disconnected` are driven here and by command failures reported through
/// [`CacheConnection::mark_disconnected`]; request paths only ever read
/// the published value. A monitor task pings the backend on a fixed
/// interval, recovering `Ready` after an outage and re-establishing the
/// manager when the initial bounded retries were exhausted.
pub struct CacheConnection {
    client: Client,
    manager: RwLock<Option<ConnectionManager>>,
    state_tx: watch::Sender<ConnectionState>,
    state_rx: watch::Receiver<ConnectionState>,
    config: CacheConfig,
}

impl CacheConnection {
    /// Connects with bounded retries, then starts the monitor task.
    ///
    /// Exhausting the retries is not an error: the connection is left in
    /// `Disconnected` and the service runs in degraded (uncached) mode
    /// until the monitor manages to reconnect.
    pub async fn establish(config: CacheConfig) -> Result<Arc<Self>, redis::RedisError> {
        let client = Client::open(config.url.as_str())?;
        let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);

        let connection = Arc::new(Self {
            client,
            manager: RwLock::new(None),
            state_tx,
            state_rx,
            config,
        });

        connection.try_connect_bounded().await;
        connection.clone().spawn_monitor();

        Ok(connection)
    }

    async fn try_connect_bounded(&self) {
        for attempt in 1..=self.config.connect_attempts {
            self.state_tx.send_replace(ConnectionState::Connecting);

            match ConnectionManager::new(self.client.clone()).await {
                Ok(manager) => {
                    *self.manager.write().await = Some(manager);
                    self.state_tx.send_replace(ConnectionState::Ready);
                    info!(attempt, "Cache backend connection established");
                    return;
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = self.config.connect_attempts,
                        error = %e,
                        "Cache backend connection attempt failed"
                    );
                    if attempt < self.config.connect_attempts {
                        tokio::time::sleep(Duration::from_millis(
                            self.config.connect_retry_delay_ms,
                        ))
                        .await;
                    }
                }
            }
        }

        self.state_tx.send_replace(ConnectionState::Disconnected);
        warn!("Cache backend unreachable after bounded retries, entering degraded mode");
    }

    fn spawn_monitor(self: Arc<Self>) {
        let interval = Duration::from_secs(self.config.monitor_interval_seconds);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                self.supervise().await;
            }
        });
    }

    async fn supervise(&self) {
        let manager = self.manager.read().await.clone();

        match manager {
            Some(mut conn) => {
                let ping = tokio::time::timeout(self.command_timeout(), async {
                    let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
                    Ok::<_, redis::RedisError>(pong)
                })
                .await;

                match ping {
                    Ok(Ok(_)) => {
                        if self.state() != ConnectionState::Ready {
                            info!("Cache backend connection recovered");
                        }
                        self.state_tx.send_replace(ConnectionState::Ready);
                    }
                    Ok(Err(e)) => {
                        debug!(error = %e, "Cache backend ping failed");
                        self.state_tx.send_replace(ConnectionState::Disconnected);
                    }
                    Err(_) => {
                        debug!("Cache backend ping timed out");
                        self.state_tx.send_replace(ConnectionState::Disconnected);
                    }
                }
            }
            None => {
                // Startup retries were exhausted; keep trying quietly.
                if let Ok(manager) = ConnectionManager::new(self.client.clone()).await {
                    *self.manager.write().await = Some(manager);
                    self.state_tx.send_replace(ConnectionState::Ready);
                    info!("Cache backend connection established by monitor");
                }
            }
        }
    }

    /// Latest published state. Never performs I/O.
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Called by the store when a command fails at the transport level.
    pub fn mark_disconnected(&self) {
        self.state_tx.send_replace(ConnectionState::Disconnected);
    }

    pub async fn manager(&self) -> Option<ConnectionManager> {
        self.manager.read().await.clone()
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.config.command_timeout_ms)
    }
}
