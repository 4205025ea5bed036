pub mod api;
pub mod client;
pub mod http;

#[cfg(test)]
pub mod fake;

pub use api::ActivityApi;
pub use client::ActivityClient;
pub use http::HttpActivityApi;
