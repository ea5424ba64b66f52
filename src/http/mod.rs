//! HTTP certificate endpoint.
//!
//! The proxy asks for a certificate with a single `GET` carrying the SNI
//! domain in the `server_name` query parameter (the request format of
//! Caddy's `get_certificate http` manager). The path is not inspected.
//!
//! # Responses
//!
//! - `200` with the PEM certificate chain and key as body
//! - `400` when `server_name` is missing; storage is not read. A repeated
//!   `server_name` uses its first value.
//! - `404` when no stored certificate lists the domain
//! - `405` for any method other than `GET`
//! - `500` when a storage source cannot be read or is invalid
//!
//! All error responses have an empty body.

/// Data structures for HTTP request handling.
pub mod structs;

/// Query string parsing.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
