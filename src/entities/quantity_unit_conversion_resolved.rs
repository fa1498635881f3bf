//! Resolved quantity unit conversion - Transitive conversion factors per product.
//!
//! Derived by the writer from the base conversion table; read-only here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Resolved conversion database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quantity_unit_conversions_resolved")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_id: Option<i64>,
    pub from_qu_id: i64,
    pub to_qu_id: i64,
    pub factor: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
