//! Update decision engine
//!
//! Stateless pipeline: fetch the latest release, normalize its tag, compare
//! against the running version, and either describe the available update or
//! report nothing. An absent result covers both "already up to date" and
//! "could not determine", so a failed check degrades silently.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::release::fetcher::{ReleaseFetcher, ReleaseProvider};
use crate::release::source::SourceConfig;
use crate::update::compare::{compare_versions, normalize_version};

/// Outcome of a successful update check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub has_update: bool,
    pub latest_version: String,
    pub current_version: String,
    pub release_info: Option<UpdateReleaseInfo>,
}

/// Release details shaped for display: derived body, assets without sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateReleaseInfo {
    pub tag_name: String,
    pub body: String,
    pub html_url: String,
    pub assets: Vec<UpdateAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateAsset {
    pub browser_download_url: String,
    pub name: String,
}

pub struct UpdateChecker<P: ReleaseProvider> {
    provider: P,
}

impl UpdateChecker<ReleaseFetcher> {
    pub fn new(config: &SourceConfig) -> Self {
        Self::with_provider(ReleaseFetcher::new(config))
    }
}

impl<P: ReleaseProvider> UpdateChecker<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Check whether a newer release than `current` exists. With no explicit
    /// version the crate's own build-time version is used.
    ///
    /// Returns `None` when the current version is up to date or when the
    /// latest release could not be determined at all.
    pub async fn check_update(&self, current: Option<&str>) -> Option<UpdateResult> {
        let current = normalize_version(current.unwrap_or(env!("CARGO_PKG_VERSION")));
        debug!("Checking for updates, current version {}", current);

        let release = self.provider.get_latest_release_info().await?;
        let latest = normalize_version(&release.tag_name).to_string();

        if compare_versions(&latest, current) != Ordering::Greater {
            debug!("Version {} is up to date (latest {})", current, latest);
            return None;
        }

        info!("Update available: {} -> {}", current, latest);

        let changelog = release.body.unwrap_or_default();
        Some(UpdateResult {
            has_update: true,
            latest_version: latest.clone(),
            current_version: current.to_string(),
            release_info: Some(UpdateReleaseInfo {
                tag_name: latest.clone(),
                body: format!("## Update Contents\n\n- Version: {latest}\n{changelog}"),
                html_url: release.html_url,
                assets: release
                    .assets
                    .into_iter()
                    .map(|asset| UpdateAsset {
                        browser_download_url: asset.browser_download_url,
                        name: asset.name,
                    })
                    .collect(),
            }),
        })
    }
}
