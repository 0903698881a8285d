//! Core business logic - framework-agnostic account, cache, and cost
//! operations over the persistent store.

/// Account registry: UID registration, switching, listing, deletion
pub mod accounts;
/// Build-cost estimation math
pub mod build_cost;
/// Character snapshot cache
pub mod characters;
/// Cost database trait and JSON-file implementation
pub mod cost_db;
