//! Persistence for [`Aviso`] records.
//!
//! Every read and mutation only sees active records (`ativo = true`).
//! Soft-deleted rows stay in the store but are invisible through this trait.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::aviso::Aviso;

pub use memory::InMemoryAvisoRepository;
pub use postgres::PgAvisoRepository;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("id sequence exhausted")]
    IdExhausted,
}

#[async_trait]
pub trait AvisoRepository: Send + Sync {
    /// All active avisos, ascending by id.
    async fn find_all(&self) -> Result<Vec<Aviso>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Aviso>, RepositoryError>;

    /// Stores a new active aviso with `data_criacao = now`.
    async fn create(&self, titulo: &str, mensagem: &str) -> Result<Aviso, RepositoryError>;

    /// Replaces `mensagem` and stamps `data_edicao`. `None` when no active
    /// record has this id.
    async fn update(&self, id: i32, mensagem: &str) -> Result<Option<Aviso>, RepositoryError>;

    /// Clears `ativo` and stamps `data_edicao`. `false` when no active record
    /// has this id.
    async fn soft_delete(&self, id: i32) -> Result<bool, RepositoryError>;

    /// Cheap reachability check for the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError>;

    fn backend(&self) -> &'static str;
}
