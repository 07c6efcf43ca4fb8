use ferronote_api::telemetry::ServiceMetrics;
use ferronote_api::{create_api_routes, AppState};
use ferronote_application::cache::{
    KeyedCache, NoteCacheInvalidator, ReadThrough, RequestMetrics, StatsReporter,
};
use ferronote_application::health::HealthAggregator;
use ferronote_application::ports::{
    CacheStore, ConnectionState, DependencyProbe, MemoryUsage, NoteRepository,
};
use ferronote_application::use_cases::{
    CreateNoteUseCase, DeleteNoteUseCase, FlushCacheUseCase, GetNotesUseCase, UpdateNoteUseCase,
};
use ferronote_infrastructure::probes::{CacheBackendProbe, SqliteProbe};
use ferronote_infrastructure::repositories::SqliteNoteRepository;
use ferronote_infrastructure::system::ProcMemoryReader;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::memory_cache::MemoryCacheStore;

/// In-process Ferronote server bound to an ephemeral port, backed by an
/// in-memory SQLite database and the in-memory cache double.
pub struct TestServer {
    addr: SocketAddr,
    pub store: Arc<MemoryCacheStore>,
    pub pool: SqlitePool,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Duration::from_secs(60)).await
    }

    /// Starts with the cache backend already unreachable, as if startup
    /// retries had been exhausted.
    pub async fn start_degraded() -> anyhow::Result<Self> {
        let server = Self::start().await?;
        server.store.set_state(ConnectionState::Disconnected);
        Ok(server)
    }

    pub async fn start_with(cache_ttl: Duration) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await?;

        let store = Arc::new(MemoryCacheStore::new());
        let started_at = Instant::now();
        let probe_timeout = Duration::from_secs(2);

        let metrics = Arc::new(RequestMetrics::new());
        let keyed = Arc::new(KeyedCache::new(
            store.clone() as Arc<dyn CacheStore>,
            metrics.clone(),
        ));
        let invalidator = Arc::new(NoteCacheInvalidator::new(keyed.clone()));
        let repo: Arc<dyn NoteRepository> = Arc::new(SqliteNoteRepository::new(pool.clone()));

        let probes: Vec<Arc<dyn DependencyProbe>> = vec![
            Arc::new(SqliteProbe::new(pool.clone(), probe_timeout)),
            Arc::new(CacheBackendProbe::new(
                store.clone() as Arc<dyn CacheStore>,
                probe_timeout,
            )),
        ];

        let memory: Arc<dyn MemoryUsage> = Arc::new(ProcMemoryReader::new());

        let state = AppState {
            get_notes: Arc::new(GetNotesUseCase::new(repo.clone())),
            create_note: Arc::new(CreateNoteUseCase::new(repo.clone(), invalidator.clone())),
            update_note: Arc::new(UpdateNoteUseCase::new(repo.clone(), invalidator.clone())),
            delete_note: Arc::new(DeleteNoteUseCase::new(repo.clone(), invalidator.clone())),
            flush_cache: Arc::new(FlushCacheUseCase::new(keyed.clone())),
            cached_reads: Arc::new(ReadThrough::new(keyed.clone(), metrics.clone(), cache_ttl)),
            stats: Arc::new(StatsReporter::new(keyed.clone(), metrics.clone(), started_at)),
            health: Arc::new(HealthAggregator::new(probes, memory.clone(), 512, started_at)),
            cache_store: store.clone(),
            memory,
            metrics: Arc::new(ServiceMetrics::new()?),
            db_pool: pool.clone(),
            api_key: None,
        };

        let app = create_api_routes(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            store,
            pool,
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Thin HTTP client for flow assertions.
pub struct TestClient {
    base: String,
    http: reqwest::Client,
}

impl TestClient {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            base: format!("http://{addr}"),
            http: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post_json(&self, path: &str, payload: &Value) -> reqwest::Response {
        self.http
            .post(format!("{}{}", self.base, path))
            .json(payload)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post_empty(&self, path: &str) -> reqwest::Response {
        self.http
            .post(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn put_json(&self, path: &str, payload: &Value) -> reqwest::Response {
        self.http
            .put(format!("{}{}", self.base, path))
            .json(payload)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.http
            .delete(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request failed")
    }
}

/// Cache-status header of a response.
pub fn cache_status(response: &reqwest::Response) -> String {
    response
        .headers()
        .get("x-cache")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string()
}
