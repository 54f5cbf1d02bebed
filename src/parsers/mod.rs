//! Input document parsers.
//!
//! Two inputs feed a comparison:
//!
//! - the provider schema document (`terraform providers schema -json`),
//!   parsed into [`ProviderSchemas`];
//! - two state or plan documents (`terraform show -json`), parsed into
//!   [`Snapshot`]s. Resources of child modules are flattened into one list
//!   after the root module's own resources.
//!
//! ## Usage
//!
//! ```no_run
//! use tfstate_diff::parsers::{load_provider_schemas, load_snapshot};
//! use std::path::Path;
//!
//! let schemas = load_provider_schemas(Path::new("schema.json")).unwrap();
//! let snapshot = load_snapshot(Path::new("prod.tfstate.json")).unwrap();
//! println!("{} resources", snapshot.current().len());
//! ```

mod schema;
mod state;

pub use schema::parse_provider_schemas;
pub use state::parse_snapshot;

use crate::error::{ErrorContext, Result, StateDiffError};
use crate::model::Snapshot;
use crate::schema::ProviderSchemas;
use std::path::Path;

/// Maximum input file size (1 GB). Inputs are held in memory in full.
const MAX_INPUT_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Read and parse a provider schema file.
pub fn load_provider_schemas(path: &Path) -> Result<ProviderSchemas> {
    let content = read_input(path)?;
    parse_provider_schemas(&content).with_context(|| path.display().to_string())
}

/// Read and parse a state or plan file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let content = read_input(path)?;
    parse_snapshot(&content).with_context(|| path.display().to_string())
}

fn read_input(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| StateDiffError::io(path, e))?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(StateDiffError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_INPUT_FILE_SIZE / (1024 * 1024),
        )));
    }
    std::fs::read_to_string(path).map_err(|e| StateDiffError::io(path, e))
}
