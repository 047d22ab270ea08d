use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::schema::provider_schema;

/// Execute the `tfe-gpg schema` command.
pub fn execute() -> Result<()> {
    output::json(&provider_schema())
}
