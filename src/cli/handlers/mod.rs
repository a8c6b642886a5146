mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::SignupConfig;
use crate::graphql::{SignupSchema, build_schema};
use crate::users::{DynUsersService, MemoryUsersService};
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: SignupConfig,
    /// `None` when running on defaults
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: SignupConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn users_service(&self) -> DynUsersService {
        Arc::new(MemoryUsersService::new(&self.config.users))
    }

    pub fn schema(&self) -> SignupSchema {
        build_schema(self.users_service())
    }
}
