use crate::cli::commands::state_helpers::print_state;
use crate::cli::context::{Context, read_ascii_armor};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_state::GpgKeyConfig;
use crate::core::services::registry_gpg_key::RegistryGpgKeyService;
use crate::core::traits::state_store::StateStore;

/// Execute the `tfe-gpg update` command.
///
/// Unset arguments keep their tracked values.
pub fn execute(
    ctx: &Context,
    key_type: Option<&str>,
    namespace: Option<&str>,
    ascii_armor: Option<&str>,
) -> Result<()> {
    let mut state = ctx.require_state()?;

    let desired = GpgKeyConfig {
        provider_namespace: namespace
            .map(str::to_string)
            .unwrap_or_else(|| state.provider_namespace.clone()),
        ascii_armor: match ascii_armor {
            Some(source) => read_ascii_armor(source)?,
            None => state.ascii_armor.clone(),
        },
        key_type: key_type.map(str::to_string),
    };

    let svc = RegistryGpgKeyService::new(ctx.client()?);
    output::with_spinner("Updating GPG key...", || svc.update(&mut state, &desired))?;

    if !state.exists() {
        ctx.state.remove()?;
        output::warning("GPG key disappeared from the registry after the update");
        return Ok(());
    }

    ctx.state.save(&state)?;
    output::success(&format!("Updated GPG key {}", state.id_or_empty()));
    print_state(&state);
    Ok(())
}
