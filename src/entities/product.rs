//! Product entity - A thing the household keeps in stock.
//!
//! Products are synced from the server and carry their default units, default
//! location and minimum stock amount. Stock, barcodes, shopping list items and
//! recipe positions all point back to a product by id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Server id of the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Milk", "Rice")
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Product group used for grouping in lists
    pub product_group_id: Option<i64>,
    /// Default storage location
    pub location_id: Option<i64>,
    /// Default shopping location
    pub shopping_location_id: Option<i64>,
    /// Quantity unit used when purchasing
    pub qu_id_purchase: i64,
    /// Quantity unit stock amounts are kept in
    pub qu_id_stock: i64,
    /// Below this amount the product counts as missing
    pub min_stock_amount: f64,
    /// Days until best-before applied on purchase (-1 means never expires)
    pub default_best_before_days: i32,
    /// Inactive products are hidden from most screens
    pub active: bool,
    /// Picture file name on the server, if any
    pub picture_file_name: Option<String>,
}

/// Products are referenced by id only; the sync writer may deliver tables in any order.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
