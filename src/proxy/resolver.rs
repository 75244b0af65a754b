//! Ranked GitHub mirror resolution with a time-boxed cache
//!
//! The resolver asks an external ranking service for currently reachable
//! mirrors, keeps the fastest ones for a while, and degrades to a static
//! list whenever the service is unavailable. It never fails and never
//! returns an empty list.

use std::cmp::Ordering;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{MAX_RANKED_NODES, NODE_CACHE_TTL_MS, RANKING_URL, REQUEST_TIMEOUT};
use crate::error::SourceError;
use crate::proxy::store::{CachedNodes, FileNodeStore, NodeStore};

/// Response from the mirror ranking service
#[derive(Debug, Deserialize)]
struct RankingResponse {
    code: u16,
    #[serde(default)]
    data: Vec<RankedNode>,
}

#[derive(Debug, Deserialize)]
struct RankedNode {
    url: String,
    #[serde(default)]
    speed: f64,
}

/// Resolves an ordered list of healthy mirror endpoints, best first.
pub struct ProxyNodeResolver<S: NodeStore> {
    client: reqwest::Client,
    store: S,
    ranking_url: String,
}

impl ProxyNodeResolver<FileNodeStore> {
    pub fn new() -> Self {
        Self::with_store(FileNodeStore::default(), RANKING_URL)
    }
}

impl Default for ProxyNodeResolver<FileNodeStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NodeStore> ProxyNodeResolver<S> {
    pub fn with_store(store: S, ranking_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-check")
                .build()
                .expect("Failed to create HTTP client"),
            store,
            ranking_url: ranking_url.to_string(),
        }
    }

    /// Return ranked mirror endpoints. Infallible: a fresh cache entry wins,
    /// then a live ranking, then the static fallback list.
    pub async fn get_proxy_nodes(&self) -> Vec<String> {
        match self.store.load() {
            Ok(Some(cached)) if cached.is_fresh(NODE_CACHE_TTL_MS) => {
                debug!("Using {} cached proxy nodes", cached.nodes.len());
                return cached.nodes;
            }
            Ok(_) => {}
            Err(e) => warn!("Failed to read proxy node cache: {}", e),
        }

        match self.fetch_ranked_nodes().await {
            Ok(nodes) if !nodes.is_empty() => {
                info!("Ranked {} proxy nodes", nodes.len());
                let entry = CachedNodes::new(nodes.clone());
                if let Err(e) = self.store.save(&entry) {
                    warn!("Failed to persist proxy node cache: {}", e);
                }
                nodes
            }
            Ok(_) => {
                warn!("Ranking service returned no nodes, using fallback list");
                fallback_nodes()
            }
            Err(e) => {
                warn!("Failed to fetch ranked proxy nodes: {}", e);
                fallback_nodes()
            }
        }
    }

    async fn fetch_ranked_nodes(&self) -> Result<Vec<String>, SourceError> {
        let response = self
            .client
            .get(&self.ranking_url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status));
        }

        let payload: RankingResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        if payload.code != 200 {
            return Err(SourceError::InvalidResponse(format!(
                "ranking service reported code {}",
                payload.code
            )));
        }

        let mut ranked = payload.data;
        ranked.sort_by(|a, b| b.speed.partial_cmp(&a.speed).unwrap_or(Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(MAX_RANKED_NODES)
            .map(|node| node.url)
            .collect())
    }
}

/// The static list of known-good mirrors.
pub fn fallback_nodes() -> Vec<String> {
    crate::config::FALLBACK_NODES
        .iter()
        .map(|node| (*node).to_string())
        .collect()
}
