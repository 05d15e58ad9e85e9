//! Store set that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use recipebox_core::config::database::DatabaseConfig;
use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    IngredientRepository, InvitationRepository, InviteLinkRepository, RecipeRepository,
    UserRepository,
};
use crate::store::{IngredientStore, InvitationStore, InviteLinkStore, RecipeStore, UserStore};

/// One handle per collection, all backed by the same provider.
///
/// The provider is selected at construction time from `database.provider`.
#[derive(Debug, Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub ingredients: Arc<dyn IngredientStore>,
    pub recipes: Arc<dyn RecipeStore>,
    pub invite_links: Arc<dyn InviteLinkStore>,
    pub invitations: Arc<dyn InvitationStore>,
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the store set described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Store set backed by PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pg.clone())),
            ingredients: Arc::new(IngredientRepository::new(pg.clone())),
            recipes: Arc::new(RecipeRepository::new(pg.clone())),
            invite_links: Arc::new(InviteLinkRepository::new(pg.clone())),
            invitations: Arc::new(InvitationRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Store set backed by a single in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            ingredients: Arc::new(store.clone()),
            recipes: Arc::new(store.clone()),
            invite_links: Arc::new(store.clone()),
            invitations: Arc::new(store),
            pool: None,
        }
    }

    /// Name of the active backend.
    pub fn backend(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => pool.ping().await,
            None => Ok(()),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
