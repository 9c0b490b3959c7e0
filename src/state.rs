//! Shared application state.

use crate::config::Config;
use crate::store::LeadStore;

/// Process-wide state handed to every handler through `State<Arc<AppState>>`.
/// The store is the single owner of the lead file; handlers never touch the
/// path directly.
pub struct AppState {
    pub config: Config,
    pub store: LeadStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = LeadStore::new(&config.data_file);
        Self { config, store }
    }

    /// Single-pair credential check backing /admin/login.
    pub fn check_admin(&self, usuario: &str, senha: &str) -> bool {
        usuario == self.config.admin_usuario && senha == self.config.admin_senha
    }
}
