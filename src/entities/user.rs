//! User entity - A household member account on the server.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Server id of the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Name shown in assignments
    pub display_name: String,
}

/// `User` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
