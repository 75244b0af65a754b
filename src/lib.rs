//! Update checking for applications distributed via GitHub releases
//!
//! Direct access to the GitHub API may be blocked, rate limited, or slow
//! depending on where the user is, so release information is resolved
//! through an ordered set of alternative sources and mirror endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│   Fetcher   │────▶│   Sources   │
//! │  (decide)   │     │ (fallback)  │     │ (ordered)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//! ┌─────────────┐     ┌─────────────┐           ▼
//! │  Resolver   │────▶│  NodeStore  │     mirrors / API /
//! │ (mirrors)   │     │ (TTL cache) │     forwarding path
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Endpoints, timeouts, data-dir resolution, env credential
//! - [`error`]: Internal error types; no error crosses the public surface
//! - [`proxy`]: Ranked mirror resolution with a time-boxed cache
//! - [`release`]: Candidate sources and release record normalization
//! - [`update`]: Version comparison and the final update decision

pub mod config;
pub mod error;
pub mod proxy;
pub mod release;
pub mod update;

pub use proxy::resolver::ProxyNodeResolver;
pub use release::fetcher::{ReleaseFetcher, ReleaseProvider};
pub use release::source::{ReleaseSource, SourceConfig, SourceKind};
pub use release::types::{ReleaseAsset, ReleaseInfo};
pub use update::checker::{UpdateChecker, UpdateResult};
pub use update::compare::{compare_versions, format_date, normalize_version};
