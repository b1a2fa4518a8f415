use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::{AvisoRepository, RepositoryError};
use crate::models::aviso::Aviso;

pub struct PgAvisoRepository {
    pool: PgPool,
}

impl PgAvisoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvisoRepository for PgAvisoRepository {
    async fn find_all(&self) -> Result<Vec<Aviso>, RepositoryError> {
        let avisos = sqlx::query_as::<_, Aviso>(
            "SELECT * FROM avisos WHERE ativo = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(avisos)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Aviso>, RepositoryError> {
        let aviso = sqlx::query_as::<_, Aviso>(
            "SELECT * FROM avisos WHERE id = $1 AND ativo = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(aviso)
    }

    async fn create(&self, titulo: &str, mensagem: &str) -> Result<Aviso, RepositoryError> {
        let aviso = sqlx::query_as::<_, Aviso>(
            "INSERT INTO avisos (titulo, mensagem, ativo, data_criacao)
             VALUES ($1, $2, TRUE, $3)
             RETURNING *",
        )
        .bind(titulo)
        .bind(mensagem)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(aviso)
    }

    async fn update(&self, id: i32, mensagem: &str) -> Result<Option<Aviso>, RepositoryError> {
        let aviso = sqlx::query_as::<_, Aviso>(
            "UPDATE avisos
             SET mensagem = $1,
                 data_edicao = $2
             WHERE id = $3 AND ativo = TRUE
             RETURNING *",
        )
        .bind(mensagem)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(aviso)
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE avisos
             SET ativo = FALSE,
                 data_edicao = $1
             WHERE id = $2 AND ativo = TRUE",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// These need a reachable PostgreSQL; run with
/// `DATABASE_URL=postgres://... cargo test -- --ignored`.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn repository() -> PgAvisoRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = db::create_pool(&url, 2).await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        PgAvisoRepository::new(pool)
    }

    #[tokio::test]
    #[ignore] // needs PostgreSQL
    async fn test_create_defaults() {
        let repo = repository().await;
        let before = Utc::now();
        let aviso = repo.create("Titulo pg", "Mensagem pg").await.unwrap();
        let after = Utc::now();

        assert!(aviso.id > 0);
        assert!(aviso.ativo);
        assert_eq!(aviso.titulo, "Titulo pg");
        assert_eq!(aviso.mensagem, "Mensagem pg");
        assert!(aviso.data_edicao.is_none());
        // TIMESTAMPTZ keeps microseconds, so compare with that slack.
        let slack = chrono::Duration::milliseconds(1);
        assert!(aviso.data_criacao >= before - slack && aviso.data_criacao <= after + slack);

        let fetched = repo.find_by_id(aviso.id).await.unwrap().unwrap();
        assert_eq!(fetched, aviso);
    }

    #[tokio::test]
    #[ignore] // needs PostgreSQL
    async fn test_update_only_touches_mensagem_and_edicao() {
        let repo = repository().await;
        let original = repo.create("Titulo", "antiga").await.unwrap();

        let updated = repo.update(original.id, "nova").await.unwrap().unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.mensagem, "nova");
        assert_eq!(updated.titulo, original.titulo);
        assert_eq!(updated.data_criacao, original.data_criacao);
        assert!(updated.ativo);
        assert!(updated.data_edicao.is_some());
    }

    #[tokio::test]
    #[ignore] // needs PostgreSQL
    async fn test_update_inactive_returns_none_and_keeps_row() {
        let repo = repository().await;
        let aviso = repo.create("T", "M").await.unwrap();
        assert!(repo.soft_delete(aviso.id).await.unwrap());

        assert!(repo.update(aviso.id, "nova").await.unwrap().is_none());
        assert!(repo.find_by_id(aviso.id).await.unwrap().is_none());

        let (ativo, mensagem, data_edicao): (bool, String, Option<chrono::DateTime<Utc>>) =
            sqlx::query_as("SELECT ativo, mensagem, data_edicao FROM avisos WHERE id = $1")
                .bind(aviso.id)
                .fetch_one(&repo.pool)
                .await
                .unwrap();
        assert!(!ativo);
        assert_eq!(mensagem, "M");
        assert!(data_edicao.is_some());
    }

    #[tokio::test]
    #[ignore] // needs PostgreSQL
    async fn test_soft_delete_repeated_returns_false() {
        let repo = repository().await;
        let aviso = repo.create("T", "M").await.unwrap();

        assert!(repo.soft_delete(aviso.id).await.unwrap());
        assert!(!repo.soft_delete(aviso.id).await.unwrap());
        assert!(!repo.soft_delete(i32::MAX).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // needs PostgreSQL
    async fn test_find_all_active_ascending() {
        let repo = repository().await;
        let first = repo.create("A", "M").await.unwrap();
        let deleted = repo.create("B", "M").await.unwrap();
        let last = repo.create("C", "M").await.unwrap();
        repo.soft_delete(deleted.id).await.unwrap();

        let avisos = repo.find_all().await.unwrap();
        assert!(avisos.iter().all(|a| a.ativo));
        assert!(avisos.windows(2).all(|w| w[0].id < w[1].id));

        let ids: Vec<i32> = avisos.iter().map(|a| a.id).collect();
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&last.id));
        assert!(!ids.contains(&deleted.id));
    }
}
