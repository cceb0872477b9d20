//! Application state and composition.

use std::sync::Arc;

use shelfkeep_domain::{Book, Entity, Record, User};

use crate::application::{AllowAll, PermissionPolicy, RecordService, UserService};
use crate::config::{ServerConfig, StoreBackend};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::ports::{EntityStore, StoreError};
use crate::infrastructure::sqlite::{connect_pool, SqliteStore};
use crate::repositories::RecordRepository;
use crate::use_cases::{RecordUseCase, UseCaseConfig};

/// Main application state.
///
/// Holds one application service per record kind.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub entities: RecordService<Entity>,
    pub users: UserService,
    pub books: RecordService<Book>,
    stores: Stores,
}

/// Store handles kept for shutdown.
pub struct Stores {
    pub entity: Arc<dyn EntityStore<Entity>>,
    pub user: Arc<dyn EntityStore<User>>,
    pub book: Arc<dyn EntityStore<Book>>,
}

impl Stores {
    /// Construct the configured backend. SQLite stores share one pool.
    pub async fn open(config: &ServerConfig) -> Result<Self, StoreError> {
        match config.backend {
            StoreBackend::Memory => Ok(Self {
                entity: Arc::new(InMemoryStore::<Entity>::new()),
                user: Arc::new(InMemoryStore::<User>::new()),
                book: Arc::new(InMemoryStore::<Book>::new()),
            }),
            StoreBackend::Sqlite => {
                let pool = connect_pool(&config.database_url).await?;
                Ok(Self {
                    entity: Arc::new(SqliteStore::<Entity>::new(pool.clone())),
                    user: Arc::new(SqliteStore::<User>::new(pool.clone())),
                    book: Arc::new(SqliteStore::<Book>::new(pool)),
                })
            }
        }
    }

    pub async fn initialize(&self) -> Result<(), StoreError> {
        self.entity.initialize().await?;
        self.user.initialize().await?;
        self.book.initialize().await?;
        Ok(())
    }

    /// Remove every record of every kind.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.entity.clear().await?;
        self.user.clear().await?;
        self.book.clear().await?;
        Ok(())
    }
}

impl App {
    /// Open and initialize every store, then wire the layers above them.
    /// Any store failure here is fatal to startup.
    pub async fn build(config: &ServerConfig) -> Result<Self, StoreError> {
        let stores = Stores::open(config).await?;
        stores.initialize().await?;
        tracing::info!(backend = ?config.backend, "Record stores initialized");
        if config.reset_on_start {
            stores.clear().await?;
            tracing::warn!("RESET_ON_START set; all stored records removed");
        }
        Ok(Self::new(stores, config, Arc::new(AllowAll)))
    }

    /// Wire services over already-initialized stores.
    pub fn new(
        stores: Stores,
        config: &ServerConfig,
        permissions: Arc<dyn PermissionPolicy>,
    ) -> Self {
        let entities = RecordService::new(
            use_case(stores.entity.clone(), config.use_case_config(false)),
            permissions.clone(),
            config.update_mode,
        );
        let users = UserService::new(
            use_case(stores.user.clone(), config.use_case_config(false)),
            permissions.clone(),
            config.update_mode,
        );
        let books = RecordService::new(
            use_case(stores.book.clone(), config.use_case_config(true)),
            permissions,
            config.update_mode,
        );

        Self {
            entities,
            users,
            books,
            stores,
        }
    }

    /// Shut every store down, reporting the first failure.
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        let results = [
            self.stores.entity.shutdown().await,
            self.stores.user.shutdown().await,
            self.stores.book.shutdown().await,
        ];
        tracing::info!("Record stores shut down");
        results.into_iter().collect()
    }
}

fn use_case<R: Record>(store: Arc<dyn EntityStore<R>>, config: UseCaseConfig) -> RecordUseCase<R> {
    RecordUseCase::new(Arc::new(RecordRepository::new(store)), config)
}
