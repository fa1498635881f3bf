//! Shopping list screens.

use super::ScreenRepository;
use super::write::{submit_delete, submit_insert};
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Product, ProductBarcode, ProductBarcodeModel, ProductGroup, ProductGroupModel, ProductModel,
    QuantityUnit, QuantityUnitConversionResolved, QuantityUnitConversionResolvedModel,
    QuantityUnitModel, ShoppingList, ShoppingListItem, ShoppingListItemModel, ShoppingListModel,
    ShoppingLocation, ShoppingLocationModel, Userfield, UserfieldModel, shopping_list_item,
};
use crate::errors::{Error, Result};
use crate::store::Store;
use std::future::Future;

bundle! {
    /// Shopping list screen: every list with its items and display lookups.
    ShoppingListBundle {
        shopping_lists: ShoppingListModel,
        shopping_list_items: ShoppingListItemModel,
        product_groups: ProductGroupModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        products: ProductModel,
        shopping_locations: ShoppingLocationModel,
        userfields: UserfieldModel,
    }
}

/// Loads [`ShoppingListBundle`] and edits shopping list items.
#[derive(Clone, Debug)]
pub struct ShoppingListRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl ShoppingListRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Adds an item; `on_success` receives its id.
    pub fn insert_item<S, E>(&self, item: shopping_list_item::ActiveModel, on_success: S, on_error: E)
    where
        S: FnOnce(i64) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_insert(
            &self.dispatcher,
            self.store.table::<ShoppingListItem>(),
            item,
            on_success,
            on_error,
        );
    }

    /// Removes an item by id. A missing item is reported through `on_error`.
    pub fn delete_item<S, E>(&self, id: i64, on_success: S, on_error: E)
    where
        S: FnOnce(()) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_delete(
            &self.dispatcher,
            self.store.table::<ShoppingListItem>(),
            id,
            on_success,
            on_error,
        );
    }
}

impl ScreenRepository for ShoppingListRepository {
    type Bundle = ShoppingListBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<ShoppingListBundle>> + Send + 'static {
        join_into((
            self.store.all::<ShoppingList>(),
            self.store.all::<ShoppingListItem>(),
            self.store.all::<ProductGroup>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<Product>(),
            self.store.all::<ShoppingLocation>(),
            self.store.all::<Userfield>(),
        ))
    }
}

bundle! {
    /// Shopping mode: the in-store checklist, with barcodes for scanning items off.
    ShoppingModeBundle {
        shopping_lists: ShoppingListModel,
        shopping_list_items: ShoppingListItemModel,
        product_groups: ProductGroupModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        products: ProductModel,
        product_barcodes: ProductBarcodeModel,
    }
}

/// Loads [`ShoppingModeBundle`].
#[derive(Clone, Debug)]
pub struct ShoppingModeRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl ShoppingModeRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for ShoppingModeRepository {
    type Bundle = ShoppingModeBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<ShoppingModeBundle>> + Send + 'static {
        join_into((
            self.store.all::<ShoppingList>(),
            self.store.all::<ShoppingListItem>(),
            self.store.all::<ProductGroup>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<Product>(),
            self.store.all::<ProductBarcode>(),
        ))
    }
}
