//! Candidate source list for release information
//!
//! Each source carries its adapter kind as data so the fetcher dispatches
//! on the kind, never by inspecting the URL text.

use std::time::Duration;

use crate::config::{FORWARD_TIMEOUT, REQUEST_TIMEOUT};

/// How a source's response maps onto the canonical [`ReleaseInfo`] shape.
///
/// [`ReleaseInfo`]: crate::release::types::ReleaseInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A raw package manifest; the version field is extracted and the rest
    /// of the record is synthesized
    Manifest,
    /// The GitHub releases API, already in canonical shape
    Api,
    /// A server-side forwarding path that proxies the releases API and
    /// returns its body unchanged
    Forward,
}

/// One candidate URL for reaching the latest-release information.
#[derive(Debug, Clone)]
pub struct ReleaseSource {
    pub url: String,
    pub kind: SourceKind,
    pub timeout: Duration,
}

impl ReleaseSource {
    pub fn new(url: impl Into<String>, kind: SourceKind) -> Self {
        let timeout = match kind {
            SourceKind::Forward => FORWARD_TIMEOUT,
            _ => REQUEST_TIMEOUT,
        };
        Self {
            url: url.into(),
            kind,
            timeout,
        }
    }
}

/// Where the releases of a repository can be looked up.
///
/// `repo` is the "owner/name" GitHub repository. `site_base` is an optional
/// mirror site that serves the repository's package manifest and hosts the
/// forwarding function; without it only the raw-content mirror and the API
/// are tried.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub repo: String,
    pub branch: String,
    pub site_base: Option<String>,
}

impl SourceConfig {
    pub fn new(repo: &str) -> Self {
        Self {
            repo: repo.to_string(),
            branch: "main".to_string(),
            site_base: None,
        }
    }

    #[must_use]
    pub fn with_site_base(mut self, site_base: &str) -> Self {
        self.site_base = Some(site_base.trim_end_matches('/').to_string());
        self
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    /// Web page for the latest release, used when a manifest source has no
    /// real release URL to offer.
    pub fn releases_page(&self) -> String {
        format!("https://github.com/{}/releases/latest", self.repo)
    }

    /// Build the ordered candidate list. Order matters: cheapest and most
    /// reliable mirrors first, the forwarding path as the last resort.
    pub fn sources(&self) -> Vec<ReleaseSource> {
        let mut sources = Vec::new();

        if let Some(site) = &self.site_base {
            sources.push(ReleaseSource::new(
                format!("{site}/package.json"),
                SourceKind::Manifest,
            ));
        }

        sources.push(ReleaseSource::new(
            format!(
                "https://raw.githubusercontent.com/{}/{}/package.json",
                self.repo, self.branch
            ),
            SourceKind::Manifest,
        ));

        sources.push(ReleaseSource::new(
            format!("https://api.github.com/repos/{}/releases/latest", self.repo),
            SourceKind::Api,
        ));

        if let Some(site) = &self.site_base {
            let path = format!("/repos/{}/releases/latest", self.repo);
            sources.push(ReleaseSource::new(
                format!(
                    "{site}/.netlify/functions/github-proxy?path={}",
                    encode_path(&path)
                ),
                SourceKind::Forward,
            ));
        }

        sources
    }
}

/// Percent-encode a repository API path for use as a query parameter value.
fn encode_path(path: &str) -> String {
    path.replace('/', "%2F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_without_site_base_skips_site_bound_entries() {
        let sources = SourceConfig::new("owner/app").sources();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].kind, SourceKind::Manifest);
        assert_eq!(
            sources[0].url,
            "https://raw.githubusercontent.com/owner/app/main/package.json"
        );
        assert_eq!(sources[1].kind, SourceKind::Api);
        assert_eq!(
            sources[1].url,
            "https://api.github.com/repos/owner/app/releases/latest"
        );
    }

    #[test]
    fn sources_with_site_base_puts_site_manifest_first_and_forward_last() {
        let sources = SourceConfig::new("owner/app")
            .with_site_base("https://mirror.example.com/")
            .sources();

        assert_eq!(sources.len(), 4);
        assert_eq!(sources[0].url, "https://mirror.example.com/package.json");
        assert_eq!(sources[0].kind, SourceKind::Manifest);
        assert_eq!(sources[3].kind, SourceKind::Forward);
        assert_eq!(
            sources[3].url,
            "https://mirror.example.com/.netlify/functions/github-proxy?path=%2Frepos%2Fowner%2Fapp%2Freleases%2Flatest"
        );
    }

    #[test]
    fn forward_source_uses_longer_timeout() {
        let source = ReleaseSource::new("https://example.com", SourceKind::Forward);
        assert_eq!(source.timeout, crate::config::FORWARD_TIMEOUT);

        let source = ReleaseSource::new("https://example.com", SourceKind::Api);
        assert_eq!(source.timeout, crate::config::REQUEST_TIMEOUT);
    }
}
