//! Per-screen repositories.
//!
//! Every screen needs a handful of tables at once. A repository is bound to one
//! [`Store`](crate::store::Store) and one [`Dispatcher`], issues its fixed set of
//! read queries concurrently, and joins them into an immutable bundle. Bundles are
//! snapshots: each table is read independently, so two tables may reflect
//! slightly different moments if a writer is active.

use crate::core::Dispatcher;
use crate::errors::{Error, Result};
use std::future::Future;

/// Declares an immutable bundle: one private `Vec` per source, a read-only
/// slice accessor per source, and construction from the join's result tuple.
macro_rules! bundle {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$field_meta:meta])* $field:ident: $model:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($field: Vec<$model>,)+
        }

        impl $name {
            $(
                $(#[$field_meta])*
                #[must_use]
                pub fn $field(&self) -> &[$model] {
                    &self.$field
                }
            )+
        }

        impl From<($(Vec<$model>,)+)> for $name {
            fn from(($($field,)+): ($(Vec<$model>,)+)) -> Self {
                Self { $($field,)+ }
            }
        }
    };
}

/// Repositories for chores and tasks
pub mod chores;
/// Product, location, unit and user master data
pub mod master_data;
/// Purchase screen and offline drafted purchases
pub mod purchase;
/// Recipe list and recipe editing
pub mod recipes;
/// Shopping lists and shopping mode
pub mod shopping;
/// Stock overview, entries, consume and transfer
pub mod stock;
/// Callback-style single-table writes
pub mod write;

pub use chores::{ChoresBundle, ChoresRepository, TasksBundle, TasksRepository};
pub use master_data::{
    MasterObjectsBundle, MasterObjectsRepository, MasterProductBundle, MasterProductRepository,
    SettingsBundle, SettingsRepository,
};
pub use purchase::{PurchaseBundle, PurchaseDraft, PurchaseRepository};
pub use recipes::{RecipeEditBundle, RecipeEditRepository, RecipesBundle, RecipesRepository};
pub use shopping::{
    ShoppingListBundle, ShoppingListRepository, ShoppingModeBundle, ShoppingModeRepository,
};
pub use stock::{
    ConsumeBundle, ConsumeRepository, StockEntriesBundle, StockEntriesRepository,
    StockOverviewBundle, StockOverviewRepository, TransferBundle, TransferRepository,
};

/// A repository that loads one bundle for one screen.
pub trait ScreenRepository {
    /// What a successful load produces.
    type Bundle: Send + 'static;

    /// Dispatcher used for [`load_from_database`](Self::load_from_database).
    fn dispatcher(&self) -> &Dispatcher;

    /// Reads every source concurrently and joins them into a bundle.
    ///
    /// The returned future owns everything it needs, so it can be spawned or
    /// awaited directly. Each call reads afresh and shares nothing with other
    /// calls.
    fn load(&self) -> impl Future<Output = Result<Self::Bundle>> + Send + 'static;

    /// Callback form of [`load`](Self::load): the reads run in the background and
    /// exactly one of the callbacks runs on the delivery context.
    fn load_from_database<S, E>(&self, on_success: S, on_error: E)
    where
        S: FnOnce(Self::Bundle) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        self.dispatcher().submit(self.load(), on_success, on_error);
    }
}
