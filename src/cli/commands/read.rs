use crate::cli::commands::state_helpers::print_state;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg read` command.
///
/// A key that has disappeared from the registry is dropped from the state
/// file; that is reported, not treated as a failure.
pub fn execute(ctx: &Context) -> Result<()> {
    let mut state = ctx.require_state()?;
    let svc = RegistryGpgKeyService::new(ctx.client()?);

    output::with_spinner("Reading GPG key...", || svc.read(&mut state))?;

    if !state.exists() {
        ctx.state.remove()?;
        output::warning(&format!(
            "GPG key {} no longer exists; removed from state",
            state.gpg_key_id()
        ));
        return Ok(());
    }

    ctx.state.save(&state)?;
    output::header("GPG key");
    print_state(&state);
    Ok(())
}
