//! Command implementations for the SWC CLI

pub mod bulk_files;
pub mod common;
pub mod health_check;
pub mod league_data;
pub mod player_data;
