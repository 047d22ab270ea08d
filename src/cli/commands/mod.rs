pub mod apply;
pub mod create;
pub mod delete;
pub mod lookup;
pub mod plan;
pub mod read;
pub mod schema;
pub mod state_helpers;
pub mod update;
