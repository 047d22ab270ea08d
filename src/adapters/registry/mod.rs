#[cfg(test)]
pub mod memory_gpg_keys;
pub mod tfe_client;
pub mod wire;
