//! The persistent store handle and its generic per-table accessor.
//!
//! A [`Store`] is constructed explicitly and handed to whatever needs it; there is
//! no process-wide instance. [`Table`] provides the only operations the
//! aggregation layer uses on any entity: read all rows, find by key, insert one,
//! delete one, and the batch writes the sync writer needs.

use crate::config::{DatabaseConfig, database};
use crate::errors::{Error, Result};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityName, EntityTrait, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryOrder, TransactionTrait,
};
use std::fmt::Debug;
use std::future::Future;
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// Primary key value type of an entity.
pub type Key<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Shared handle to the local cache database.
///
/// Cloning is cheap and every clone talks to the same connection pool.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    /// Connects to the configured database and makes sure every table exists.
    #[instrument(skip(config))]
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let db = database::create_connection(config).await?;
        database::create_tables(&db).await?;
        info!("Store opened.");
        Ok(Self { db })
    }

    /// Opens a fresh, empty in-memory store.
    pub async fn in_memory() -> Result<Self> {
        Self::open(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
    }

    /// Wraps an existing connection without touching the schema.
    #[must_use]
    pub const fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Accessor for the table of entity `E`.
    #[must_use]
    pub fn table<E: EntityTrait>(&self) -> Table<E> {
        Table {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }

    /// A self-contained "read all rows of `E`" query, ready to be spawned.
    pub fn all<E>(&self) -> impl Future<Output = Result<Vec<E::Model>>> + Send + 'static
    where
        E: EntityTrait,
    {
        let table = self.table::<E>();
        async move { table.all().await }
    }

    /// Closes the connection pool. Clones still held elsewhere stop working.
    pub async fn close(self) -> Result<()> {
        self.db.close().await?;
        info!("Store closed.");
        Ok(())
    }
}

/// Generic access to one table, parameterized by entity.
#[derive(Debug)]
pub struct Table<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> Table<E>
where
    E: EntityTrait,
{
    /// Table name, used in error messages.
    #[must_use]
    pub fn name(&self) -> String {
        E::default().table_name().to_string()
    }

    /// Every row, ordered by primary key.
    pub async fn all(&self) -> Result<Vec<E::Model>> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select.all(&self.db).await.map_err(Into::into)
    }

    /// The row with the given key, if any.
    pub async fn find(&self, id: Key<E>) -> Result<Option<E::Model>> {
        E::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    /// Inserts one row and returns its key (generated if the model left it unset).
    pub async fn insert<A>(&self, model: A) -> Result<Key<E>>
    where
        A: ActiveModelTrait<Entity = E> + Send,
    {
        let result = E::insert(model).exec(&self.db).await?;
        debug!("Inserted into {}", self.name());
        Ok(result.last_insert_id)
    }

    /// Deletes the row with the given key. A missing row is an error.
    pub async fn delete(&self, id: Key<E>) -> Result<()>
    where
        Key<E>: Debug,
    {
        let label = format!("{id:?}");
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: self.name(),
                id: label,
            });
        }
        debug!("Deleted {} from {}", label, self.name());
        Ok(())
    }

    /// Inserts many rows in one statement. An empty batch does nothing.
    pub async fn insert_many<A, I>(&self, models: I) -> Result<u64>
    where
        A: ActiveModelTrait<Entity = E> + Send,
        I: IntoIterator<Item = A>,
    {
        let models: Vec<A> = models.into_iter().collect();
        let count = models.len() as u64;
        if count == 0 {
            return Ok(0);
        }
        E::insert_many(models).exec(&self.db).await?;
        Ok(count)
    }

    /// Replaces the whole table content with `models` inside one transaction.
    ///
    /// This is the write-back path of a full sync: readers see either the old
    /// rows or the new ones, never an empty table in between.
    pub async fn replace_all<A, I>(&self, models: I) -> Result<u64>
    where
        A: ActiveModelTrait<Entity = E> + Send,
        I: IntoIterator<Item = A>,
    {
        let models: Vec<A> = models.into_iter().collect();
        let count = models.len() as u64;

        let txn = self.db.begin().await?;
        E::delete_many().exec(&txn).await?;
        if count > 0 {
            E::insert_many(models).exec(&txn).await?;
        }
        txn.commit().await?;

        debug!("Replaced {} with {} rows", self.name(), count);
        Ok(count)
    }
}
