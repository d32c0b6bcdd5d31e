//! API-Football (api-sports.io) access: transport, typed client, and the
//! small amount of response inspection the fetcher needs.

pub mod client;
pub mod http;
pub mod types;

pub use client::ApiClient;
pub use http::{RawResponse, ReqwestTransport, Transport};
