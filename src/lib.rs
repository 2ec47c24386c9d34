//! # Simple and type-safe client for the DNSPod API.
//!
//! Implements an easy-to-use client for managing domains and DNS records
//! through the [DNSPod API]. Every call is a single blocking round trip: the
//! parameters are form-encoded, POSTed to the remote method, and the JSON
//! envelope that comes back is decoded and checked.
//!
//! ## Examples
//!
//! ```no_run
//! use dnspod::Client;
//! use dnspod::record::{ListParams, Record};
//!
//! let client = Client::builder()
//!     .login_token("<ID>,<TOKEN>")
//!     .build()
//!     .unwrap();
//!
//! let domains = client.domains().list().unwrap();
//! let records = client
//!     .records()
//!     .list(&ListParams::for_domain("example.com"))
//!     .unwrap();
//!
//! let record = Record {
//!     name: Some("www".to_string()),
//!     type_: Some("A".to_string()),
//!     line: Some("默认".to_string()),
//!     value: Some("192.0.2.1".to_string()),
//!     ..Default::default()
//! };
//! let created = client.records().create("example.com", "", &record).unwrap();
//! ```
//!
//! [DNSPod API]: https://docs.dnspod.com/api/

mod client;
pub mod domain;
mod errors;
mod method;
mod payload;
pub mod record;
mod status;
#[cfg(test)]
mod testing;
mod utils;

pub use client::*;
pub use errors::*;
pub use method::*;
pub use payload::*;
pub use status::{NO_RECORDS, Reply, Response, SUCCESS, Status};
