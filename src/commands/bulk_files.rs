use std::collections::BTreeMap;

use crate::{swc::SwcClient, Result};

use super::common::print_json;

/// Print logical name to file name for the configured bulk format
pub fn handle_bulk_files(client: &SwcClient) -> Result<()> {
    let files: BTreeMap<&str, &str> = client.bulk_files().iter().collect();
    print_json(&files)
}
