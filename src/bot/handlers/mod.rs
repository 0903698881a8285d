//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as
//! autocomplete, separate from the commands they serve.

/// Autocomplete handlers for cached character names
pub mod autocomplete;
