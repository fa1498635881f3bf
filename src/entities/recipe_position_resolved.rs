//! Resolved recipe position - Ingredient fulfillment computed against stock.
//!
//! One row per ingredient of every recipe, including ingredients pulled in
//! through nested recipes. Maintained by the writer; read-only here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Resolved recipe position database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_positions_resolved")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipe_id: i64,
    pub recipe_pos_id: i64,
    pub product_id: i64,
    /// Amount needed for the desired servings, in the stock unit
    pub recipe_amount: f64,
    pub stock_amount: f64,
    pub need_fulfilled: bool,
    pub missing_amount: f64,
    pub amount_on_shopping_list: f64,
    pub need_fulfilled_with_shopping_list: bool,
    pub qu_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
