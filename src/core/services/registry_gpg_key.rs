use tracing::debug;

use crate::core::errors::{Result, TfeError};
use crate::core::models::gpg_key::{GpgKeyCreateOptions, GpgKeyUpdateOptions, PRIVATE_REGISTRY};
use crate::core::models::key_state::{GpgKeyConfig, GpgKeyState};
use crate::core::models::plan::Plan;
use crate::core::models::schema::{Schema, registry_gpg_key_resource};
use crate::core::services::planner;
use crate::core::traits::gpg_keys::GpgKeys;

/// Lifecycle of the `tfe_registry_gpg_key` resource on top of a `GpgKeys` client.
pub struct RegistryGpgKeyService<K: GpgKeys> {
    pub keys: K,
    schema: Schema,
}

impl<K: GpgKeys> RegistryGpgKeyService<K> {
    pub fn new(keys: K) -> Self {
        Self {
            keys,
            schema: registry_gpg_key_resource(),
        }
    }

    /// Upload a new key described by `state`, then read it back.
    ///
    /// The id is set as soon as the registry accepts the key, so on a failed
    /// read-back `state` still holds the handle of the uploaded key.
    pub fn create(&self, state: &mut GpgKeyState) -> Result<()> {
        let options = GpgKeyCreateOptions {
            key_type: state.key_type.clone(),
            namespace: state.provider_namespace.clone(),
            ascii_armor: state.ascii_armor.clone(),
        };

        debug!(
            "Create new GPG key for namespace/organization {}",
            state.provider_namespace
        );
        let key = self
            .keys
            .create(PRIVATE_REGISTRY, &options)
            .map_err(|e| TfeError::CreateFailed {
                namespace: state.provider_namespace.clone(),
                source: Box::new(e),
            })?;

        // Reads are keyed by the key id, which only the registry can compute.
        state.key_id = Some(key.key_id);
        state.set_id(Some(key.id));
        let id = state.id_or_empty().to_string();

        self.read(state)?;
        if !state.exists() {
            return Err(TfeError::ReadFailed {
                id,
                source: Box::new(TfeError::ResourceNotFound),
            });
        }
        Ok(())
    }

    /// Refresh `state` from the registry.
    ///
    /// A key that no longer exists clears the id and is not an error.
    pub fn read(&self, state: &mut GpgKeyState) -> Result<()> {
        debug!("Read GPG key {}", state.id_or_empty());
        match self.keys.read(&state.gpg_key_id()) {
            Ok(key) => {
                state.refresh_from(&key);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!("GPG key {} no longer exists", state.id_or_empty());
                state.set_id(None);
                Ok(())
            }
            Err(e) => Err(TfeError::ReadFailed {
                id: state.id_or_empty().to_string(),
                source: Box::new(e),
            }),
        }
    }

    /// Apply in-place changes from `desired`, then refresh.
    ///
    /// Only the key type can change in place. A different namespace or key
    /// material is rejected before any remote call.
    pub fn update(&self, state: &mut GpgKeyState, desired: &GpgKeyConfig) -> Result<()> {
        let replaced = planner::force_new_changes(&self.schema, state, desired);
        if !replaced.is_empty() {
            return Err(TfeError::RequiresReplacement {
                id: state.id_or_empty().to_string(),
                attributes: replaced.join(", "),
            });
        }

        let options = GpgKeyUpdateOptions {
            key_type: desired.key_type().to_string(),
            namespace: state.provider_namespace.clone(),
        };

        debug!("Update GPG key {}", state.id_or_empty());
        self.keys
            .update(&state.gpg_key_id(), &options)
            .map_err(|e| TfeError::UpdateFailed {
                id: state.id_or_empty().to_string(),
                source: Box::new(e),
            })?;
        state.key_type = options.key_type;

        self.read(state)
    }

    /// Delete the key. A key that is already gone counts as deleted.
    pub fn delete(&self, state: &mut GpgKeyState) -> Result<()> {
        debug!("Delete GPG key: {}", state.id_or_empty());
        match self.keys.delete(&state.gpg_key_id()) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                return Err(TfeError::DeleteFailed {
                    id: state.id_or_empty().to_string(),
                    source: Box::new(e),
                });
            }
        }
        state.set_id(None);
        Ok(())
    }

    /// Refresh `prior` and compute what applying `desired` would do.
    pub fn plan(&self, prior: Option<&mut GpgKeyState>, desired: &GpgKeyConfig) -> Result<Plan> {
        let prior = match prior {
            Some(state) if state.exists() => {
                self.read(state)?;
                Some(&*state)
            }
            other => other.map(|s| &*s),
        };
        Ok(planner::plan(&self.schema, prior, desired))
    }

    /// Converge the registry on `desired`, starting from the tracked `state`.
    ///
    /// `state` is kept current on failure too: after a replace whose create
    /// step fails it no longer holds the deleted key's id.
    pub fn apply(&self, state: &mut Option<GpgKeyState>, desired: &GpgKeyConfig) -> Result<Plan> {
        let plan = self.plan(state.as_mut(), desired)?;

        match (&plan, state.as_mut()) {
            (Plan::Update { .. }, Some(current)) => self.update(current, desired)?,
            (Plan::Replace { .. }, Some(current)) => self.delete(current)?,
            _ => {}
        }
        if matches!(plan, Plan::Create | Plan::Replace { .. }) {
            self.create(state.insert(GpgKeyState::planned(desired)))?;
        }

        Ok(plan)
    }
}
