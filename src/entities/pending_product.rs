//! Pending product entity - A product drafted offline, not yet created on the server.
//!
//! Pending products are created while scanning unknown barcodes in purchase mode.
//! They stay local until the user confirms them; stored purchases and pending
//! barcodes may reference them in the meantime.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pending product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pending_products")]
pub struct Model {
    /// Locally generated id
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name entered while drafting
    pub name: String,
    /// When the draft was created
    pub created_at: DateTime,
}

/// `PendingProduct` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
