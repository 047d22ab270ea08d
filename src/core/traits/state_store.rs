use crate::core::errors::Result;
use crate::core::models::key_state::GpgKeyState;

/// Port for persisting resource state between invocations.
pub trait StateStore: Send + Sync {
    /// Load the saved state, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<GpgKeyState>>;

    fn save(&self, state: &GpgKeyState) -> Result<()>;

    /// Forget the saved state. Removing nothing is not an error.
    fn remove(&self) -> Result<()>;
}
