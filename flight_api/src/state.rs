use crate::fetcher::StatesFetcher;
use axum::extract::FromRef;
use shared::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub(crate) upstream: StatesFetcher,
    pub(crate) assets: StaticAssets,
}

#[derive(Clone)]
pub struct StaticAssets {
    dir: Arc<PathBuf>,
}

impl StaticAssets {
    pub fn index_path(&self) -> PathBuf {
        self.dir.join("index.html")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            upstream: StatesFetcher::new(&config.upstream)?,
            assets: StaticAssets {
                dir: Arc::new(config.static_dir.clone()),
            },
        })
    }
}
