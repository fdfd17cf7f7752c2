pub mod api; // HTTP boundary: router, server lifecycle, endpoints
pub mod config;
pub mod extraction; // Narrative mining: tokenizer, scans, composer
