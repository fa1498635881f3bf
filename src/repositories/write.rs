//! Single-table writes in callback form.
//!
//! Each helper wraps one [`Table`] operation, runs it on the background runtime
//! and reports the outcome on the delivery context. Failures never surface
//! synchronously.

use crate::core::Dispatcher;
use crate::errors::Error;
use crate::store::{Key, Table};
use sea_orm::{ActiveModelTrait, EntityTrait};
use std::fmt::Debug;

/// Inserts `model`; `on_success` receives the (possibly generated) key.
pub fn submit_insert<E, A, S, F>(
    dispatcher: &Dispatcher,
    table: Table<E>,
    model: A,
    on_success: S,
    on_error: F,
) where
    E: EntityTrait,
    E::Model: Sync,
    A: ActiveModelTrait<Entity = E> + Send + Sync + 'static,
    Key<E>: Send + Sync + 'static,
    S: FnOnce(Key<E>) + Send + 'static,
    F: FnOnce(Error) + Send + 'static,
{
    dispatcher.submit(
        async move { table.insert(model).await },
        on_success,
        on_error,
    );
}

/// Deletes the row keyed `id`. Deleting a missing row goes to `on_error`.
pub fn submit_delete<E, S, F>(
    dispatcher: &Dispatcher,
    table: Table<E>,
    id: Key<E>,
    on_success: S,
    on_error: F,
) where
    E: EntityTrait,
    E::Model: Sync,
    Key<E>: Debug + Send + Sync + 'static,
    S: FnOnce(()) + Send + 'static,
    F: FnOnce(Error) + Send + 'static,
{
    dispatcher.submit(async move { table.delete(id).await }, on_success, on_error);
}
