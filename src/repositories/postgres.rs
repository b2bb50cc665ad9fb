use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::{AggregateRepository, RepositoryError};
use crate::models::Aggregate;

/// Stores each aggregate as one JSONB document in `table`.
///
/// The table layout is created by `migrations/0001_create_aggregate_tables.sql`:
/// `(id UUID PRIMARY KEY, owner_id UUID, body JSONB, updated_at TIMESTAMPTZ)`.
#[derive(Debug, Clone)]
pub struct PgRepository<A> {
    db: PgPool,
    table: &'static str,
    _aggregate: PhantomData<fn() -> A>,
}

impl<A> PgRepository<A> {
    pub fn new(db: PgPool, table: &'static str) -> Self {
        Self {
            db,
            table,
            _aggregate: PhantomData,
        }
    }
}

#[async_trait]
impl<A: Aggregate> AggregateRepository<A> for PgRepository<A> {
    async fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<A>, RepositoryError> {
        let sql = format!("SELECT body FROM {} WHERE id = $1 AND owner_id = $2", self.table);

        let body = sqlx::query_scalar::<_, Json<A>>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(body.map(|Json(aggregate)| aggregate))
    }

    async fn save(&self, aggregate: &A) -> Result<(), RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO {} (id, owner_id, body, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET owner_id = EXCLUDED.owner_id,
                body = EXCLUDED.body,
                updated_at = EXCLUDED.updated_at
            "#,
            self.table
        );

        sqlx::query(&sql)
            .bind(aggregate.id())
            .bind(aggregate.owner_id())
            .bind(Json(aggregate))
            .bind(Utc::now())
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND owner_id = $2", self.table);

        sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<A>, RepositoryError> {
        let sql = format!(
            "SELECT body FROM {} WHERE owner_id = $1 ORDER BY updated_at DESC",
            self.table
        );

        let rows = sqlx::query_scalar::<_, Json<A>>(&sql)
            .bind(owner_id)
            .fetch_all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|Json(aggregate)| aggregate).collect())
    }
}
