//! Bulk file naming.
//!
//! The SWC data sets are also published as whole-file snapshots. Download and
//! storage live outside this crate; the client only knows what each file is
//! called for the configured format.

use std::collections::BTreeMap;

use crate::config::BulkFileFormat;

pub const PLAYERS: &str = "players";
pub const LEAGUES: &str = "leagues";
pub const PERFORMANCES: &str = "performances";
pub const TEAM_PLAYERS: &str = "team_players";

pub const BULK_FILE_NAMES: [&str; 4] = [PLAYERS, LEAGUES, PERFORMANCES, TEAM_PLAYERS];

/// Logical name to file name, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFiles {
    format: BulkFileFormat,
    files: BTreeMap<&'static str, String>,
}

impl BulkFiles {
    pub fn new(format: BulkFileFormat) -> Self {
        let files = BULK_FILE_NAMES
            .iter()
            .map(|name| (*name, format!("{name}_data.{}", format.extension())))
            .collect();
        Self { format, files }
    }

    pub fn format(&self) -> BulkFileFormat {
        self.format
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.files.iter().map(|(name, file)| (*name, file.as_str()))
    }
}
