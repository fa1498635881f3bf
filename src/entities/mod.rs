//! Entity module - Contains all SeaORM entity definitions for the local cache.
//! One table per server resource, plus the resolved views the writer
//! materializes and the pending-item tables for offline drafted purchases.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod chore;
pub mod chore_entry;
pub mod location;
pub mod pending_product;
pub mod pending_product_barcode;
pub mod product;
pub mod product_barcode;
pub mod product_group;
pub mod quantity_unit;
pub mod quantity_unit_conversion;
pub mod quantity_unit_conversion_resolved;
pub mod recipe;
pub mod recipe_nesting_resolved;
pub mod recipe_position;
pub mod recipe_position_resolved;
pub mod shopping_list;
pub mod shopping_list_item;
pub mod shopping_location;
pub mod stock_item;
pub mod stock_location;
pub mod stored_purchase;
pub mod task;
pub mod task_category;
pub mod user;
pub mod userfield;

// Re-export specific types to avoid conflicts
pub use chore::{Entity as Chore, Model as ChoreModel};
pub use chore_entry::{Entity as ChoreEntry, Model as ChoreEntryModel};
pub use location::{Entity as Location, Model as LocationModel};
pub use pending_product::{Entity as PendingProduct, Model as PendingProductModel};
pub use pending_product_barcode::{
    Entity as PendingProductBarcode, Model as PendingProductBarcodeModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_barcode::{Entity as ProductBarcode, Model as ProductBarcodeModel};
pub use product_group::{Entity as ProductGroup, Model as ProductGroupModel};
pub use quantity_unit::{Entity as QuantityUnit, Model as QuantityUnitModel};
pub use quantity_unit_conversion::{
    Entity as QuantityUnitConversion, Model as QuantityUnitConversionModel,
};
pub use quantity_unit_conversion_resolved::{
    Entity as QuantityUnitConversionResolved, Model as QuantityUnitConversionResolvedModel,
};
pub use recipe::{Entity as Recipe, Model as RecipeModel};
pub use recipe_nesting_resolved::{
    Entity as RecipeNestingResolved, Model as RecipeNestingResolvedModel,
};
pub use recipe_position::{Entity as RecipePosition, Model as RecipePositionModel};
pub use recipe_position_resolved::{
    Entity as RecipePositionResolved, Model as RecipePositionResolvedModel,
};
pub use shopping_list::{Entity as ShoppingList, Model as ShoppingListModel};
pub use shopping_list_item::{Entity as ShoppingListItem, Model as ShoppingListItemModel};
pub use shopping_location::{Entity as ShoppingLocation, Model as ShoppingLocationModel};
pub use stock_item::{Entity as StockItem, Model as StockItemModel};
pub use stock_location::{Entity as StockLocation, Model as StockLocationModel};
pub use stored_purchase::{Entity as StoredPurchase, Model as StoredPurchaseModel};
pub use task::{Entity as Task, Model as TaskModel};
pub use task_category::{Entity as TaskCategory, Model as TaskCategoryModel};
pub use user::{Entity as User, Model as UserModel};
pub use userfield::{Entity as Userfield, Model as UserfieldModel};
