use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{AvisoRepository, RepositoryError};
use crate::models::aviso::Aviso;

/// Process-local store. Ids start at 1 and are never reused, even after a
/// record is soft-deleted.
#[derive(Default)]
pub struct InMemoryAvisoRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    last_id: i32,
    avisos: BTreeMap<i32, Aviso>,
}

impl InMemoryAvisoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record, inactive ones included.
    #[cfg(test)]
    pub async fn history(&self) -> Vec<Aviso> {
        self.inner.read().await.avisos.values().cloned().collect()
    }
}

#[async_trait]
impl AvisoRepository for InMemoryAvisoRepository {
    async fn find_all(&self) -> Result<Vec<Aviso>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store.avisos.values().filter(|a| a.ativo).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Aviso>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store.avisos.get(&id).filter(|a| a.ativo).cloned())
    }

    async fn create(&self, titulo: &str, mensagem: &str) -> Result<Aviso, RepositoryError> {
        let mut store = self.inner.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::IdExhausted)?;

        let aviso = Aviso {
            id,
            titulo: titulo.to_string(),
            mensagem: mensagem.to_string(),
            ativo: true,
            data_criacao: Utc::now(),
            data_edicao: None,
        };
        store.last_id = id;
        store.avisos.insert(id, aviso.clone());
        Ok(aviso)
    }

    async fn update(&self, id: i32, mensagem: &str) -> Result<Option<Aviso>, RepositoryError> {
        let mut store = self.inner.write().await;
        let Some(aviso) = store.avisos.get_mut(&id).filter(|a| a.ativo) else {
            return Ok(None);
        };
        aviso.mensagem = mensagem.to_string();
        aviso.data_edicao = Some(Utc::now());
        Ok(Some(aviso.clone()))
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().await;
        let Some(aviso) = store.avisos.get_mut(&id).filter(|a| a.ativo) else {
            return Ok(false);
        };
        aviso.ativo = false;
        aviso.data_edicao = Some(Utc::now());
        Ok(true)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
