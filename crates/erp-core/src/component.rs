//! 物料與庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 物料主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// 物料ID（料號）
    pub id: String,

    /// 物料編碼（顯示用）
    pub code: String,

    /// 物料描述
    pub description: String,

    /// 計量單位
    pub unit_of_measure: String,

    /// 物料類別
    pub category: Option<String>,
}

impl Component {
    /// 創建新的物料
    pub fn new(id: String, description: String, unit_of_measure: String) -> Self {
        let code = id.clone();
        Self {
            id,
            code,
            description,
            unit_of_measure,
            category: None,
        }
    }

    /// 建構器模式：設置顯示編碼
    pub fn with_code(mut self, code: String) -> Self {
        self.code = code;
        self
    }

    /// 建構器模式：設置類別
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }
}

/// 庫存紀錄（每個物料一筆）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 物料ID
    pub component_id: String,

    /// 現有庫存
    pub on_hand_qty: Decimal,

    /// 再訂購點（未設置時視為 0）
    pub reorder_level: Option<Decimal>,

    /// 儲位
    pub location: Option<String>,
}

impl InventoryRecord {
    /// 創建新的庫存紀錄
    pub fn new(component_id: String, on_hand_qty: Decimal) -> Self {
        Self {
            component_id,
            on_hand_qty,
            reorder_level: None,
            location: None,
        }
    }

    /// 建構器模式：設置再訂購點
    pub fn with_reorder_level(mut self, reorder_level: Decimal) -> Self {
        self.reorder_level = Some(reorder_level);
        self
    }

    /// 建構器模式：設置儲位
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// 再訂購點（未設置時回傳 0）
    pub fn reorder_level_or_zero(&self) -> Decimal {
        self.reorder_level.unwrap_or(Decimal::ZERO)
    }

    /// 檢查現有庫存是否低於或等於再訂購點
    pub fn is_at_or_below_reorder(&self) -> bool {
        self.on_hand_qty <= self.reorder_level_or_zero()
    }
}

/// 供應商報價（物料 × 供應商）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// 報價ID
    pub id: Uuid,

    /// 物料ID
    pub component_id: String,

    /// 供應商ID
    pub supplier_id: String,

    /// 供應商名稱
    pub supplier_name: String,

    /// 供應商料號
    pub supplier_code: Option<String>,

    /// 單價
    pub unit_price: Decimal,
}

impl SupplierOffer {
    /// 創建新的供應商報價
    pub fn new(
        component_id: String,
        supplier_id: String,
        supplier_name: String,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_id,
            supplier_id,
            supplier_name,
            supplier_code: None,
            unit_price,
        }
    }

    /// 建構器模式：設置供應商料號
    pub fn with_supplier_code(mut self, supplier_code: String) -> Self {
        self.supplier_code = Some(supplier_code);
        self
    }
}
