use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg delete` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let Some(mut state) = ctx.state.load()? else {
        output::warning("No GPG key is tracked; nothing to delete.");
        return Ok(());
    };

    let svc = RegistryGpgKeyService::new(ctx.client()?);
    output::with_spinner("Deleting GPG key...", || svc.delete(&mut state))?;
    ctx.state.remove()?;

    output::success(&format!("Deleted GPG key {}", state.gpg_key_id()));
    Ok(())
}
