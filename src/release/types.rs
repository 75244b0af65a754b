use serde::{Deserialize, Serialize};

/// Canonical release record, matching the GitHub releases API wire shape.
///
/// Every candidate source is normalized into this form before it reaches
/// the update decision logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// Release tag, usually with a leading "v" ("v1.2.0")
    pub tag_name: String,
    /// Human-readable changelog
    #[serde(default)]
    pub body: Option<String>,
    /// Web link to the release page
    pub html_url: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub browser_download_url: String,
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Package manifest shape shared by the manifest mirror sources.
/// Only the version field matters here.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub version: String,
}
