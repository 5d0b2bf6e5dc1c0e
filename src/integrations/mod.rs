//! External service integrations.

pub mod tmdb_client {
    pub use crate::tmdb_client::*;
}
