//! # dockhub-client
//!
//! Client library for the Docker Hub v2 REST API.
//!
//! Every call goes through one dispatch pipeline that normalizes the
//! resource path, attaches the login token, serves GETs from a TTL cache
//! and turns in-band error bodies into typed errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dockhub_client::{ClientConfig, HubClient, Page, RepoRef};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HubClient::new(ClientConfig::new())?;
//!
//!     let nginx = client.repository(&RepoRef::official("nginx")).await?;
//!     let tags = client.tags(&RepoRef::official("nginx"), Page::default()).await?;
//!
//!     println!("{nginx}\n{tags}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HubClient                            │
//! │  ┌─────────────┐  ┌─────────────────┐  ┌──────────────────┐  │
//! │  │ PathBuilder │  │ CredentialStore │  │  ResponseCache   │  │
//! │  └─────────────┘  └─────────────────┘  └──────────────────┘  │
//! │                  ┌──────────────────┐                        │
//! │                  │     classify     │                        │
//! │                  └──────────────────┘                        │
//! └──────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │               Transport (HttpTransport / custom)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cache;
mod classify;
mod client;
mod clock;
mod config;
mod credential;
mod endpoints;
mod error;
mod path;
mod request;
mod transport;

pub use cache::{CacheConfig, CacheEntry, CacheOptions, ResponseCache, DEFAULT_TTL};
pub use classify::{classify, extract};
pub use client::HubClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ClientConfig;
pub use credential::CredentialStore;
pub use endpoints::{Description, NewRepository, Page, RepoRef, OFFICIAL_NAMESPACE};
pub use error::{HubError, Result, TransportError};
pub use path::{PathBuilder, DEFAULT_API_VERSION, DEFAULT_ORIGIN};
pub use request::Request;
pub use transport::{HttpTransport, Method, RequestDescriptor, Transport};
