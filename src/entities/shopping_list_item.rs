//! Shopping list item entity - One line on a shopping list.
//!
//! An item either references a product or is a free-text note.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping list item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_list_items")]
pub struct Model {
    /// Item id; server id for synced items, generated for local ones
    #[sea_orm(primary_key)]
    pub id: i64,
    /// List the item is on
    pub shopping_list_id: i64,
    /// Product to buy, `None` for free-text items
    pub product_id: Option<i64>,
    /// Free-text note
    pub note: Option<String>,
    /// Amount to buy
    pub amount: f64,
    /// Unit of `amount`
    pub qu_id: Option<i64>,
    /// Checked off while shopping
    pub done: bool,
}

/// `ShoppingListItem` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
