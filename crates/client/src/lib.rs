//! # Dex Client
//!
//! HTTP transport against the remote species catalog API.
//!
//! ## Contract
//!
//! ```text
//! GET {base}/pokemon?offset={o}&limit={l}
//!     └─> { results: [{name, url}], count }
//!
//! GET {base}/pokemon/{id_or_name}
//!     └─> full detail payload
//! ```
//!
//! Both calls carry a bounded timeout and no internal retry; the only retry
//! surface is the aggregation layer's manual refetch. The [`EntitySource`]
//! trait is the seam consumers depend on, so tests can swap the network out
//! for an in-memory source.

mod client;
mod config;
mod error;
mod source;
mod wire;

pub use client::{ApiClient, SummaryPage};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use source::EntitySource;
