//! API Module
//!
//! HTTP client for PokeAPI. Every GET goes through the response cache.
//!
//! # Endpoints
//! - `GET {base}/location-area` - First page of location areas
//! - `GET {base}/location-area/{name}/` - One area with its encounters
//! - `GET {base}/pokemon/{name}` - One pokemon's detail record

pub mod client;

pub use client::{Fetched, PokeApiClient, Source};
