//! Stock location entity - How much of a product sits at one location.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock location database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product stored
    pub product_id: i64,
    /// Where it is stored
    pub location_id: i64,
    /// Amount at this location, in the product's stock unit
    pub amount: f64,
}

/// `StockLocation` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
