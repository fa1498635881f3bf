//! Master data screens: product editing, object lists and settings.

use super::ScreenRepository;
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Location, LocationModel, Product, ProductBarcode, ProductBarcodeModel, ProductGroup,
    ProductGroupModel, ProductModel, QuantityUnit, QuantityUnitConversion,
    QuantityUnitConversionModel, QuantityUnitModel, ShoppingLocation, ShoppingLocationModel,
    TaskCategory, TaskCategoryModel, User, UserModel, Userfield, UserfieldModel,
};
use crate::errors::Result;
use crate::store::Store;
use std::future::Future;

bundle! {
    /// Product editor. Uses the base conversions, which are what the user edits.
    MasterProductBundle {
        products: ProductModel,
        product_groups: ProductGroupModel,
        product_barcodes: ProductBarcodeModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionModel,
        locations: LocationModel,
        shopping_locations: ShoppingLocationModel,
    }
}

/// Loads [`MasterProductBundle`].
#[derive(Clone, Debug)]
pub struct MasterProductRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl MasterProductRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for MasterProductRepository {
    type Bundle = MasterProductBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<MasterProductBundle>> + Send + 'static {
        join_into((
            self.store.all::<Product>(),
            self.store.all::<ProductGroup>(),
            self.store.all::<ProductBarcode>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversion>(),
            self.store.all::<Location>(),
            self.store.all::<ShoppingLocation>(),
        ))
    }
}

bundle! {
    /// Lists of the simple master objects.
    MasterObjectsBundle {
        shopping_locations: ShoppingLocationModel,
        locations: LocationModel,
        product_groups: ProductGroupModel,
        quantity_units: QuantityUnitModel,
        task_categories: TaskCategoryModel,
    }
}

/// Loads [`MasterObjectsBundle`].
#[derive(Clone, Debug)]
pub struct MasterObjectsRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl MasterObjectsRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for MasterObjectsRepository {
    type Bundle = MasterObjectsBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<MasterObjectsBundle>> + Send + 'static {
        join_into((
            self.store.all::<ShoppingLocation>(),
            self.store.all::<Location>(),
            self.store.all::<ProductGroup>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<TaskCategory>(),
        ))
    }
}

bundle! {
    /// Settings: accounts and custom field definitions.
    SettingsBundle {
        users: UserModel,
        userfields: UserfieldModel,
    }
}

/// Loads [`SettingsBundle`].
#[derive(Clone, Debug)]
pub struct SettingsRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl SettingsRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for SettingsRepository {
    type Bundle = SettingsBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<SettingsBundle>> + Send + 'static {
        join_into((self.store.all::<User>(), self.store.all::<Userfield>()))
    }
}
