//! Pending product barcode entity - A barcode scanned for a product that is
//! still pending, or for an existing product before the code is uploaded.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pending product barcode database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pending_product_barcodes")]
pub struct Model {
    /// Locally generated id
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Pending product the code belongs to, if the product is still a draft
    pub pending_product_id: Option<i64>,
    /// Existing product the code belongs to otherwise
    pub product_id: Option<i64>,
    /// Scanned code
    pub barcode: String,
    /// Pack size booked per scan
    pub amount: Option<f64>,
    /// Unit of `amount`
    pub qu_id: Option<i64>,
    pub note: Option<String>,
}

/// `PendingProductBarcode` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
