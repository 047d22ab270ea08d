pub mod planner;
pub mod registry_gpg_key;
pub mod registry_gpg_key_lookup;
