//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL. Creation is idempotent: opening an existing
//! cache file leaves its rows alone.

use crate::config::DatabaseConfig;
use crate::entities::{
    Chore, ChoreEntry, Location, PendingProduct, PendingProductBarcode, Product, ProductBarcode,
    ProductGroup, QuantityUnit, QuantityUnitConversion, QuantityUnitConversionResolved, Recipe,
    RecipeNestingResolved, RecipePosition, RecipePositionResolved, ShoppingList,
    ShoppingListItem, ShoppingLocation, StockItem, StockLocation, StoredPurchase, Task,
    TaskCategory, User, Userfield,
};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured database url.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Local cache file used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/pantry.sqlite?mode=rwc";

/// How long the single connection of an in-memory database is kept, idle or
/// not. Recycling it would reopen an empty database.
pub const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Opens a connection pool for the configured url.
#[instrument(skip(config), fields(url = %config.url))]
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let options = connect_options(config);
    debug!(
        "Connecting with at most {} pooled connections",
        options.get_max_connections().unwrap_or(1)
    );
    Database::connect(options).await.map_err(Into::into)
}

/// Pool settings for `config`.
///
/// An in-memory database exists once per connection, so for `:memory:` urls the
/// pool is pinned to a single connection that is never recycled.
fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options.min_connections(1).sqlx_logging(false);

    if config.url.contains(":memory:") {
        options
            .max_connections(1)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    } else {
        options.max_connections(config.max_connections.max(1));
    }
    options
}

/// Creates every cache table that does not exist yet.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Product).await?;
    create_table(db, &schema, ProductGroup).await?;
    create_table(db, &schema, ProductBarcode).await?;
    create_table(db, &schema, ShoppingLocation).await?;
    create_table(db, &schema, Location).await?;
    create_table(db, &schema, QuantityUnit).await?;
    create_table(db, &schema, QuantityUnitConversion).await?;
    create_table(db, &schema, QuantityUnitConversionResolved).await?;
    create_table(db, &schema, StockItem).await?;
    create_table(db, &schema, StockLocation).await?;
    create_table(db, &schema, ShoppingList).await?;
    create_table(db, &schema, ShoppingListItem).await?;
    create_table(db, &schema, Recipe).await?;
    create_table(db, &schema, RecipePosition).await?;
    create_table(db, &schema, RecipePositionResolved).await?;
    create_table(db, &schema, RecipeNestingResolved).await?;
    create_table(db, &schema, Chore).await?;
    create_table(db, &schema, ChoreEntry).await?;
    create_table(db, &schema, Task).await?;
    create_table(db, &schema, TaskCategory).await?;
    create_table(db, &schema, PendingProduct).await?;
    create_table(db, &schema, PendingProductBarcode).await?;
    create_table(db, &schema, StoredPurchase).await?;
    create_table(db, &schema, User).await?;
    create_table(db, &schema, Userfield).await?;

    info!("Cache tables ensured.");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PendingProductModel, ProductModel, StockItemModel};
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<StockItemModel> = StockItem::find().limit(1).all(&db).await?;
        let _: Vec<PendingProductModel> = PendingProduct::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[test]
    fn test_in_memory_pool_is_never_recycled() {
        let options = connect_options(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 8,
        });
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIFETIME));
        assert_eq!(options.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIFETIME));
    }

    #[test]
    fn test_file_pool_uses_configured_size() {
        let options = connect_options(&DatabaseConfig {
            url: "sqlite://pantry.sqlite?mode=rwc".to_string(),
            max_connections: 8,
        });
        assert_eq!(options.get_max_connections(), Some(8));
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 8,
        };
        let db = create_connection(&config).await?;
        create_tables(&db).await?;
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        Ok(())
    }
}
