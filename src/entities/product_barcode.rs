//! Product barcode entity - A scannable code resolving to a product.
//!
//! A barcode may carry a pack size (`amount` in `qu_id`), so scanning a six-pack
//! can book six units at once.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product barcode database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_barcodes")]
pub struct Model {
    /// Server id of the barcode
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product this barcode resolves to
    pub product_id: i64,
    /// The code itself as scanned
    pub barcode: String,
    /// Quantity unit of the pack size
    pub qu_id: Option<i64>,
    /// Pack size booked per scan
    pub amount: Option<f64>,
    /// Shopping location preselected when purchasing via this code
    pub shopping_location_id: Option<i64>,
    /// Free-form note
    pub note: Option<String>,
}

/// `ProductBarcode` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
