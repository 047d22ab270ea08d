use crate::cli::commands::state_helpers::{persist, print_state};
use crate::cli::context::Context;
use crate::cli::{KeyArgs, output};
use crate::core::errors::{Result, TfeError};
use crate::core::models::key_state::GpgKeyState;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg create` command.
pub fn execute(ctx: &Context, args: &KeyArgs) -> Result<()> {
    if let Some(existing) = ctx.state.load()?
        && existing.exists()
    {
        return Err(TfeError::StateError {
            path: ctx.state.path().to_path_buf(),
            detail: format!(
                "already tracking GPG key {}. Use 'tfe-gpg apply' to change it \
                 or 'tfe-gpg delete' to remove it.",
                existing.id_or_empty()
            ),
        });
    }

    let config = args.to_config()?;
    let svc = RegistryGpgKeyService::new(ctx.client()?);

    let mut state = GpgKeyState::planned(&config);
    let created = output::with_spinner("Uploading GPG key...", || svc.create(&mut state));
    persist(ctx, Some(&state))?;
    created?;

    output::success(&format!(
        "Created GPG key {} in namespace {}",
        state.key_id.as_deref().unwrap_or(""),
        state.provider_namespace
    ));
    print_state(&state);
    Ok(())
}
