//! Shared types for the API layer.

use std::time::Instant;

/// Shared context for all API routes.
///
/// The extractor itself is stateless; the context only carries process
/// metadata for the health endpoint.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub started_at: Instant,
}

impl ApiContext {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new()
    }
}
