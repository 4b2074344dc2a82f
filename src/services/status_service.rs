//! Last-successful-contact timestamp, kept only as a hint for error messages.
//! No locking: concurrent writers race and the last one wins.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn last_success(&self) -> Option<DateTime<Utc>>;
    async fn record_success(&self, at: DateTime<Utc>);
}

/// Stores the timestamp as a single RFC 3339 line in a plain text file.
pub struct FileStatusStore {
    path: PathBuf,
}

impl FileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StatusStore for FileStatusStore {
    async fn last_success(&self) -> Option<DateTime<Utc>> {
        let raw = tokio::fs::read_to_string(&self.path).await.ok()?;
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                log::debug!("Ignoring unreadable status file {:?}: {}", self.path, e);
                None
            }
        }
    }

    async fn record_success(&self, at: DateTime<Utc>) {
        if let Err(e) = tokio::fs::write(&self.path, at.to_rfc3339()).await {
            log::warn!("Failed to write status file {:?}: {}", self.path, e);
        }
    }
}

#[derive(Default)]
pub struct InMemoryStatusStore {
    last: RwLock<Option<DateTime<Utc>>>,
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn last_success(&self) -> Option<DateTime<Utc>> {
        *self.last.read().await
    }

    async fn record_success(&self, at: DateTime<Utc>) {
        *self.last.write().await = Some(at);
    }
}

pub struct StatusService {
    store: Arc<dyn StatusStore>,
    clock: Arc<dyn Clock>,
}

impl StatusService {
    pub fn new(store: Arc<dyn StatusStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn record_success(&self) {
        self.store.record_success(self.clock.now()).await;
    }

    pub async fn last_success(&self) -> Option<DateTime<Utc>> {
        self.store.last_success().await
    }

    /// Human-readable age of the last success, e.g. "Last successful
    /// connection: 5 minutes ago".
    pub async fn hint(&self) -> Option<String> {
        let last = self.last_success().await?;
        let elapsed = self.clock.now().signed_duration_since(last);

        let age = match elapsed.num_minutes() {
            m if m < 1 => "less than a minute ago".to_string(),
            m if m < 60 => plural(m, "minute"),
            _ if elapsed.num_hours() < 24 => plural(elapsed.num_hours(), "hour"),
            _ => plural(elapsed.num_days(), "day"),
        };
        Some(format!("Last successful connection: {}", age))
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
