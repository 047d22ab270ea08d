use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::registry_gpg_key_lookup::RegistryGpgKeyLookupService;

/// Execute the `tfe-gpg lookup` command and print the key as JSON.
pub fn execute(ctx: &Context, namespace: &str, key_id: &str) -> Result<()> {
    let svc = RegistryGpgKeyLookupService {
        keys: ctx.client()?,
    };
    let found = svc.read(namespace, key_id)?;
    output::json(&found)
}
