//! Composition root: owns the store and the dispatcher and hands out repositories.

use crate::config::AppConfig;
use crate::core::{DeliveryQueue, Dispatcher, delivery_channel};
use crate::errors::Result;
use crate::repositories::{
    ChoresRepository, ConsumeRepository, MasterObjectsRepository, MasterProductRepository,
    PurchaseRepository, RecipeEditRepository, RecipesRepository, SettingsRepository,
    ShoppingListRepository, ShoppingModeRepository, StockEntriesRepository,
    StockOverviewRepository, TasksRepository, TransferRepository,
};
use crate::store::Store;
use tokio::runtime::Handle;
use tracing::info;

/// Application-wide services, constructed once and passed around explicitly.
#[derive(Clone, Debug)]
pub struct App {
    store: Store,
    dispatcher: Dispatcher,
}

impl App {
    /// Opens the store from `config` and binds a dispatcher running store work
    /// on `background`. The returned queue is the delivery context: callbacks
    /// run wherever it is drained.
    pub async fn start(config: &AppConfig, background: Handle) -> Result<(Self, DeliveryQueue)> {
        let store = Store::open(&config.database).await?;
        let (delivery, queue) = delivery_channel();
        info!("Application services started.");
        Ok((Self::new(store, Dispatcher::new(background, delivery)), queue))
    }

    /// Assembles services from parts that already exist.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// The shared store handle.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The shared dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Closes the store. Repositories handed out earlier stop working.
    pub async fn shutdown(self) -> Result<()> {
        self.store.close().await?;
        info!("Application services shut down.");
        Ok(())
    }

    /// Stock overview screen.
    #[must_use]
    pub fn stock_overview(&self) -> StockOverviewRepository {
        StockOverviewRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Individual stock entries.
    #[must_use]
    pub fn stock_entries(&self) -> StockEntriesRepository {
        StockEntriesRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Consume screen.
    #[must_use]
    pub fn consume(&self) -> ConsumeRepository {
        ConsumeRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Transfer between locations.
    #[must_use]
    pub fn transfer(&self) -> TransferRepository {
        TransferRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Shopping lists, with item insert and delete.
    #[must_use]
    pub fn shopping_list(&self) -> ShoppingListRepository {
        ShoppingListRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// In-store shopping mode.
    #[must_use]
    pub fn shopping_mode(&self) -> ShoppingModeRepository {
        ShoppingModeRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Recipe list with fulfillment state.
    #[must_use]
    pub fn recipes(&self) -> RecipesRepository {
        RecipesRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Recipe editor.
    #[must_use]
    pub fn recipe_edit(&self) -> RecipeEditRepository {
        RecipeEditRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Product master data editor.
    #[must_use]
    pub fn master_product(&self) -> MasterProductRepository {
        MasterProductRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Locations, groups, units and other simple master objects.
    #[must_use]
    pub fn master_objects(&self) -> MasterObjectsRepository {
        MasterObjectsRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Users and userfields.
    #[must_use]
    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Purchases and offline drafts.
    #[must_use]
    pub fn purchase(&self) -> PurchaseRepository {
        PurchaseRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Chore overview.
    #[must_use]
    pub fn chores(&self) -> ChoresRepository {
        ChoresRepository::new(self.store.clone(), self.dispatcher.clone())
    }

    /// Task list, with task delete.
    #[must_use]
    pub fn tasks(&self) -> TasksRepository {
        TasksRepository::new(self.store.clone(), self.dispatcher.clone())
    }
}
