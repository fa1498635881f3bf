//! Stock item entity - Current stock summary of one product.
//!
//! There is at most one stock item per product, so the product id is the key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_items")]
pub struct Model {
    /// Product this summary belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    /// Amount in stock, in the product's stock unit
    pub amount: f64,
    /// Amount including sub-products of a parent product
    pub amount_aggregated: f64,
    /// Total value of the stock
    pub value: f64,
    /// Earliest best-before date across all entries
    pub best_before_date: Option<Date>,
    /// Amount already opened
    pub amount_opened: f64,
    /// Whether `amount_aggregated` includes sub-products
    pub is_aggregated_amount: bool,
}

/// `StockItem` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
