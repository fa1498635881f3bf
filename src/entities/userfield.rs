//! Userfield entity - A custom field definition attached to an entity type.
//!
//! Screens use userfields to decide which extra columns to show.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Userfield database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "userfields")]
pub struct Model {
    /// Server id of the field
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Entity type the field is attached to (e.g., `"products"`)
    pub entity: String,
    /// Technical field name
    pub name: String,
    /// Label shown to the user
    pub caption: String,
    /// Field kind (e.g., `"text-single-line"`, `"checkbox"`)
    pub field_type: String,
    /// Show the field as a column in table views
    pub show_as_column_in_tables: bool,
}

/// `Userfield` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
