//! Provider schema document parsing.

use crate::error::{ErrorContext, Result, StateDiffError};
use crate::schema::ProviderSchemas;
use serde_json::Value;

/// Parse `terraform providers schema -json` output.
///
/// The document must carry a `provider_schemas` member; anything else is
/// most likely a state or plan file passed in the wrong position.
pub fn parse_provider_schemas(content: &str) -> Result<ProviderSchemas> {
    let raw: Value = serde_json::from_str(content).context("parsing provider schema")?;
    if raw.get("provider_schemas").is_none() {
        return Err(StateDiffError::missing_field(
            "provider_schemas",
            "provider schema document",
        ));
    }
    let schemas: ProviderSchemas =
        serde_json::from_value(raw).context("parsing provider schema")?;

    tracing::debug!(
        "parsed schemas for {} providers",
        schemas.provider_schemas.len()
    );
    Ok(schemas)
}
