use crate::cli::context::Context;
use crate::cli::{KeyArgs, output};
use crate::core::errors::Result;
use crate::core::models::plan::Plan;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg plan` command. Nothing is written.
pub fn execute(ctx: &Context, args: &KeyArgs) -> Result<()> {
    let desired = args.to_config()?;
    let mut prior = ctx.state.load()?;
    let svc = RegistryGpgKeyService::new(ctx.client()?);

    let plan = output::with_spinner("Refreshing state...", || {
        svc.plan(prior.as_mut(), &desired)
    })?;

    output::header("tfe_registry_gpg_key");
    describe(&plan);
    Ok(())
}

pub fn describe(plan: &Plan) {
    match plan {
        Plan::NoOp => output::success("No changes. The key matches the configuration."),
        other => output::warning(&format!("Plan: {other}")),
    }
}
