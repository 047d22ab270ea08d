pub mod gpg_keys;
pub mod state_store;
