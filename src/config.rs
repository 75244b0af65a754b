use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// How long a cached proxy node list stays valid (10 minutes)
pub const NODE_CACHE_TTL_MS: i64 = 10 * 60 * 1000;

/// Timeout for most outbound requests (2 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Timeout for the server-side forwarding path, which itself calls the
/// GitHub API and needs more headroom (10 seconds)
pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Proxy node ranking
// =============================================================================

/// Endpoint that ranks currently reachable GitHub mirrors by speed
pub const RANKING_URL: &str = "https://api.akams.cn/github";

/// How many of the fastest ranked nodes to keep
pub const MAX_RANKED_NODES: usize = 10;

/// Known-good mirrors used whenever the ranking service is unavailable
pub const FALLBACK_NODES: &[&str] = &[
    "https://gh.lk.cc",
    "https://ghproxy.cn",
    "https://ghproxy.net",
    "https://gitproxy.click",
    "https://github.tbedu.top",
    "https://github.moeyy.xyz",
];

/// Storage key for the cached proxy node list
pub const NODE_CACHE_KEY: &str = "github_proxy_nodes";

/// Returns the path to the data directory for release-check.
/// Uses $XDG_DATA_HOME/release-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/release-check,
/// or ./release-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the proxy node cache file.
pub fn node_cache_path() -> PathBuf {
    data_dir().join(format!("{NODE_CACHE_KEY}.json"))
}

/// Optional GitHub API token used to reduce the chance of rate limiting.
/// Empty values are treated as unset.
pub fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("release-check")
}
