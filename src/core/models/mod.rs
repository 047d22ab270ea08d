pub mod gpg_key;
pub mod key_state;
pub mod plan;
pub mod schema;
