use crate::core::models::key_state::{GpgKeyConfig, GpgKeyState};
use crate::core::models::plan::Plan;
use crate::core::models::schema::Schema;

/// Attributes whose configured value differs from `state`, in schema order.
///
/// `type` is optional: leaving it unset keeps whatever the state holds.
pub fn changed_attributes(
    schema: &Schema,
    state: &GpgKeyState,
    desired: &GpgKeyConfig,
) -> Vec<&'static str> {
    schema
        .attributes
        .iter()
        .filter(|attr| match attr.name {
            "provider_namespace" => state.provider_namespace != desired.provider_namespace,
            "ascii_armor" => state.ascii_armor != desired.ascii_armor,
            "type" => desired
                .key_type
                .as_deref()
                .is_some_and(|t| t != state.key_type),
            _ => false,
        })
        .map(|attr| attr.name)
        .collect()
}

/// The changed attributes that cannot be updated in place.
pub fn force_new_changes(
    schema: &Schema,
    state: &GpgKeyState,
    desired: &GpgKeyConfig,
) -> Vec<&'static str> {
    changed_attributes(schema, state, desired)
        .into_iter()
        .filter(|name| schema.is_force_new(name))
        .collect()
}

/// Decide how to get from `prior` to `desired`.
pub fn plan(schema: &Schema, prior: Option<&GpgKeyState>, desired: &GpgKeyConfig) -> Plan {
    let Some(state) = prior.filter(|s| s.exists()) else {
        return Plan::Create;
    };

    let changed = changed_attributes(schema, state, desired);
    if changed.is_empty() {
        return Plan::NoOp;
    }

    let reasons = force_new_changes(schema, state, desired);
    if reasons.is_empty() {
        Plan::Update { changed }
    } else {
        Plan::Replace { reasons }
    }
}
