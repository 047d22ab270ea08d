use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::key_state::GpgKeyState;
use crate::core::traits::state_store::StateStore;

/// Write `state` back, or drop the state file when no key is tracked.
pub fn persist(ctx: &Context, state: Option<&GpgKeyState>) -> Result<()> {
    match state.filter(|s| s.exists()) {
        Some(state) => ctx.state.save(state),
        None => ctx.state.remove(),
    }
}

/// Print the tracked key's fields.
pub fn print_state(state: &GpgKeyState) {
    output::field("id", state.id_or_empty());
    output::field("provider_namespace", &state.provider_namespace);
    output::field("key_id", state.key_id.as_deref().unwrap_or(""));
    output::field("type", &state.key_type);
    output::field(
        "ascii_armor",
        &format!("{} bytes", state.ascii_armor.len()),
    );
}
