//! Quantity unit conversion entity - A single user-defined conversion factor.
//!
//! A conversion without `product_id` applies to every product. These are the
//! base rows; chains of them are flattened into
//! [`quantity_unit_conversion_resolved`](super::quantity_unit_conversion_resolved).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quantity unit conversion database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quantity_unit_conversions")]
pub struct Model {
    /// Server id of the conversion
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unit converted from
    pub from_qu_id: i64,
    /// Unit converted to
    pub to_qu_id: i64,
    /// Amount in `to_qu_id` per one `from_qu_id`
    pub factor: f64,
    /// Product the conversion is restricted to, if any
    pub product_id: Option<i64>,
}

/// `QuantityUnitConversion` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
