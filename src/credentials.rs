//! Sources for the TMDB bearer token.
//!
//! The handler asks its provider on every request, so nothing here is cached
//! across requests unless the provider itself chooses to.

use crate::config::DEFAULT_TOKEN_VAR;

/// Supplies the bearer token used for TMDB calls.
pub trait CredentialProvider: Send + Sync {
    /// Returns the current token, or `None` if the server holds none.
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Token fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    token: Option<String>,
}

impl StaticCredentialProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Returns the token from `provider` exactly as supplied, treating an empty
/// value as absent.
pub fn resolve_token(provider: &dyn CredentialProvider) -> Option<String> {
    provider.bearer_token().filter(|token| !token.is_empty())
}
