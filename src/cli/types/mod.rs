//! Type-safe wrappers for SWC identifiers.

pub mod ids;

pub use ids::{LeagueId, PlayerId, TeamId};
