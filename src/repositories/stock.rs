//! Stock screens: overview, entries, consume and transfer.

use super::ScreenRepository;
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Location, LocationModel, Product, ProductBarcode, ProductBarcodeModel, ProductGroup,
    ProductGroupModel, ProductModel, QuantityUnit, QuantityUnitConversionResolved,
    QuantityUnitConversionResolvedModel, QuantityUnitModel, ShoppingListItem,
    ShoppingListItemModel, StockItem, StockItemModel, StockLocation, StockLocationModel,
    Userfield, UserfieldModel,
};
use crate::errors::Result;
use crate::store::Store;
use std::future::Future;

bundle! {
    /// Everything the stock overview shows: stock per product plus the lookups
    /// needed to render, filter and group it.
    StockOverviewBundle {
        product_groups: ProductGroupModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        stock_items: StockItemModel,
        products: ProductModel,
        product_barcodes: ProductBarcodeModel,
        /// Used to mark products that are already on a shopping list
        shopping_list_items: ShoppingListItemModel,
        locations: LocationModel,
        stock_locations: StockLocationModel,
        userfields: UserfieldModel,
    }
}

/// Loads [`StockOverviewBundle`].
#[derive(Clone, Debug)]
pub struct StockOverviewRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl StockOverviewRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for StockOverviewRepository {
    type Bundle = StockOverviewBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<StockOverviewBundle>> + Send + 'static {
        join_into((
            self.store.all::<ProductGroup>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<StockItem>(),
            self.store.all::<Product>(),
            self.store.all::<ProductBarcode>(),
            self.store.all::<ShoppingListItem>(),
            self.store.all::<Location>(),
            self.store.all::<StockLocation>(),
            self.store.all::<Userfield>(),
        ))
    }
}

bundle! {
    /// Stock entries screen.
    StockEntriesBundle {
        products: ProductModel,
        stock_items: StockItemModel,
        locations: LocationModel,
    }
}

/// Loads [`StockEntriesBundle`].
#[derive(Clone, Debug)]
pub struct StockEntriesRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl StockEntriesRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for StockEntriesRepository {
    type Bundle = StockEntriesBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<StockEntriesBundle>> + Send + 'static {
        join_into((
            self.store.all::<Product>(),
            self.store.all::<StockItem>(),
            self.store.all::<Location>(),
        ))
    }
}

bundle! {
    /// Consume screen: resolve a scanned code or picked product to its stock.
    ConsumeBundle {
        products: ProductModel,
        product_barcodes: ProductBarcodeModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        stock_items: StockItemModel,
        stock_locations: StockLocationModel,
    }
}

/// Loads [`ConsumeBundle`].
#[derive(Clone, Debug)]
pub struct ConsumeRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl ConsumeRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for ConsumeRepository {
    type Bundle = ConsumeBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<ConsumeBundle>> + Send + 'static {
        join_into((
            self.store.all::<Product>(),
            self.store.all::<ProductBarcode>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<StockItem>(),
            self.store.all::<StockLocation>(),
        ))
    }
}

bundle! {
    /// Transfer screen: move stock between locations.
    TransferBundle {
        products: ProductModel,
        product_barcodes: ProductBarcodeModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        locations: LocationModel,
        stock_locations: StockLocationModel,
    }
}

/// Loads [`TransferBundle`].
#[derive(Clone, Debug)]
pub struct TransferRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl TransferRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for TransferRepository {
    type Bundle = TransferBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<TransferBundle>> + Send + 'static {
        join_into((
            self.store.all::<Product>(),
            self.store.all::<ProductBarcode>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<Location>(),
            self.store.all::<StockLocation>(),
        ))
    }
}
