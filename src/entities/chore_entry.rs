//! Chore entry entity - Current schedule state of one chore, keyed by chore id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Chore entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chore_entries")]
pub struct Model {
    /// Chore this entry describes
    #[sea_orm(primary_key, auto_increment = false)]
    pub chore_id: i64,
    /// Denormalized chore name
    pub chore_name: String,
    /// Last time the chore was done
    pub last_tracked_time: Option<DateTime>,
    /// When it is due next
    pub next_estimated_execution_time: Option<DateTime>,
    /// User the next execution is assigned to
    pub next_execution_assigned_to_user_id: Option<i64>,
}

/// `ChoreEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
