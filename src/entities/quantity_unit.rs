//! Quantity unit entity - Unit amounts are expressed in (e.g., "Piece", "Pack").

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quantity unit database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quantity_units")]
pub struct Model {
    /// Server id of the unit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Singular name
    pub name: String,
    /// Plural name, if it differs
    pub name_plural: Option<String>,
    /// Optional description
    pub description: Option<String>,
}

/// `QuantityUnit` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
