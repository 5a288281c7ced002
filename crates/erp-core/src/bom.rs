//! 用料清單（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用料清單項目：生產一單位產品所需的物料用量
///
/// 一個產品可對應多個物料；同一物料也可出現在多個產品的 BOM 中
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomEntry {
    /// 項目ID
    pub id: Uuid,

    /// 物料ID
    pub component_id: String,

    /// 產品ID
    pub product_id: String,

    /// 每單位產品用量
    pub qty_per_unit: Decimal,
}

impl BomEntry {
    /// 創建新的用料項目
    pub fn new(component_id: String, product_id: String, qty_per_unit: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_id,
            product_id,
            qty_per_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bom_entry() {
        let entry = BomEntry::new(
            "CMP-001".to_string(),
            "PRD-100".to_string(),
            Decimal::from(4),
        );

        assert_eq!(entry.component_id, "CMP-001");
        assert_eq!(entry.product_id, "PRD-100");
        assert_eq!(entry.qty_per_unit, Decimal::from(4));
    }
}
