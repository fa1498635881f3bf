//! Recipe screens.
//!
//! Fulfillment and nesting come precomputed from the resolved tables; nothing
//! here walks recipe trees or converts units.

use super::ScreenRepository;
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Product, ProductModel, QuantityUnit, QuantityUnitConversionResolved,
    QuantityUnitConversionResolvedModel, QuantityUnitModel, Recipe, RecipeModel,
    RecipeNestingResolved, RecipeNestingResolvedModel, RecipePosition, RecipePositionModel,
    RecipePositionResolved, RecipePositionResolvedModel, ShoppingListItem, ShoppingListItemModel,
    StockItem, StockItemModel, Userfield, UserfieldModel,
};
use crate::errors::Result;
use crate::store::Store;
use std::future::Future;

bundle! {
    /// Recipe list with fulfillment state per ingredient.
    RecipesBundle {
        recipes: RecipeModel,
        /// Ingredient fulfillment, nested recipes already flattened in
        positions_resolved: RecipePositionResolvedModel,
        nestings_resolved: RecipeNestingResolvedModel,
        products: ProductModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        stock_items: StockItemModel,
        shopping_list_items: ShoppingListItemModel,
        userfields: UserfieldModel,
    }
}

/// Loads [`RecipesBundle`].
#[derive(Clone, Debug)]
pub struct RecipesRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl RecipesRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for RecipesRepository {
    type Bundle = RecipesBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<RecipesBundle>> + Send + 'static {
        join_into((
            self.store.all::<Recipe>(),
            self.store.all::<RecipePositionResolved>(),
            self.store.all::<RecipeNestingResolved>(),
            self.store.all::<Product>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<StockItem>(),
            self.store.all::<ShoppingListItem>(),
            self.store.all::<Userfield>(),
        ))
    }
}

bundle! {
    /// Recipe editor: raw positions rather than resolved ones.
    RecipeEditBundle {
        recipes: RecipeModel,
        positions: RecipePositionModel,
        products: ProductModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
    }
}

/// Loads [`RecipeEditBundle`].
#[derive(Clone, Debug)]
pub struct RecipeEditRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl RecipeEditRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for RecipeEditRepository {
    type Bundle = RecipeEditBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<RecipeEditBundle>> + Send + 'static {
        join_into((
            self.store.all::<Recipe>(),
            self.store.all::<RecipePosition>(),
            self.store.all::<Product>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
        ))
    }
}
