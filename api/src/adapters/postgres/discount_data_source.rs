//! PostgreSQL adapter for DiscountDataSource

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};

use crate::config::DatabaseConfig;
use crate::domain::entities::{CustomerId, DiscountRecordId, RawDiscountRecord};
use crate::domain::ports::DiscountDataSource;
use crate::entity::{customer_discount, discount};
use crate::error::StoreAccessError;

/// PostgreSQL implementation of DiscountDataSource
///
/// Each query checks a connection out of `db` and hands it back when the
/// query future completes or is dropped.
pub struct PostgresDiscountDataSource {
    db: DatabaseConnection,
}

impl PostgresDiscountDataSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open a connection using the configured url and credentials
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreAccessError> {
        let url = config.connection_url()?;

        let db = Database::connect(&url).await.map_err(|e| {
            tracing::error!("Database connection failed: {}", e);
            StoreAccessError::Connection(e.to_string())
        })?;

        Ok(Self::new(db))
    }
}

#[async_trait]
impl DiscountDataSource for PostgresDiscountDataSource {
    async fn get_discount_data(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<RawDiscountRecord>, StoreAccessError> {
        let results = discount::Entity::find()
            .inner_join(customer_discount::Entity)
            .filter(customer_discount::Column::CustomerId.eq(customer.0))
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(customer = %customer, "database access failed: {}", e);
                StoreAccessError::Query(e.to_string())
            })?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<discount::Model> for RawDiscountRecord {
    fn from(model: discount::Model) -> Self {
        RawDiscountRecord {
            id: DiscountRecordId(model.discount_id),
            percentage: model.discount,
            label: model.discount_text,
        }
    }
}
