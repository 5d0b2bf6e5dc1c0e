//! TMDB Trending Proxy Library
//!
//! Server-side proxy for TMDB's trending movies list. The TMDB bearer token
//! stays on the server and is injected into each outbound request.
//!
//! # Modules
//!
//! - `api`: Router, middleware and OpenAPI document.
//! - `integrations`: External service integrations.
//! - `config`: Configuration management.
//! - `credentials`: Bearer token providers.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Time window and query models.
//! - `tmdb_client`: TMDB API client.

pub mod api;
pub mod integrations;

pub mod config;
pub mod credentials;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod tmdb_client;
