use crate::cli::commands::plan::describe;
use crate::cli::commands::state_helpers::{persist, print_state};
use crate::cli::context::Context;
use crate::cli::{KeyArgs, output};
use crate::core::errors::Result;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg apply` command.
pub fn execute(ctx: &Context, args: &KeyArgs) -> Result<()> {
    let desired = args.to_config()?;
    let mut state = ctx.state.load()?;
    let svc = RegistryGpgKeyService::new(ctx.client()?);

    let applied = output::with_spinner("Applying...", || svc.apply(&mut state, &desired));
    persist(ctx, state.as_ref())?;
    let plan = applied?;

    output::header("tfe_registry_gpg_key");
    describe(&plan);
    if plan.has_changes() {
        output::success("Apply complete");
    }
    if let Some(state) = &state {
        print_state(state);
    }
    Ok(())
}
