//! 庫存健康度計算

use erp_core::InventoryRecord;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存健康度分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockHealth {
    /// 無庫存
    Critical,
    /// 庫存加在途仍不足需求
    Insufficient,
    /// 低於再訂購點
    Low,
    /// 庫存偏高但仍有未滿足需求
    HighButNeeded,
    /// 庫存過剩
    Excess,
    /// 正常
    Healthy,
}

impl StockHealth {
    /// 分類顯示名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Insufficient => "insufficient",
            Self::Low => "low",
            Self::HighButNeeded => "highButNeeded",
            Self::Excess => "excess",
            Self::Healthy => "healthy",
        }
    }
}

/// 庫存水位輸入（缺漏值一律以 0 代入）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockPosition {
    /// 現有庫存
    pub on_hand: Decimal,

    /// 再訂購點
    pub reorder_level: Decimal,

    /// 在途數量（未結採購明細的未收數量合計）
    pub on_order: Decimal,

    /// 未結訂單所需數量
    pub required: Decimal,
}

impl StockPosition {
    /// 創建新的庫存水位
    pub fn new(on_hand: Decimal, reorder_level: Decimal, on_order: Decimal, required: Decimal) -> Self {
        Self {
            on_hand,
            reorder_level,
            on_order,
            required,
        }
    }

    /// 從庫存紀錄組合水位（紀錄缺漏時呼叫端代入 zero()）
    pub fn from_record(record: &InventoryRecord, on_order: Decimal, required: Decimal) -> Self {
        Self {
            on_hand: record.on_hand_qty,
            reorder_level: record.reorder_level_or_zero(),
            on_order,
            required,
        }
    }

    /// 全零水位（查無庫存紀錄時使用）
    pub fn zero() -> Self {
        Self {
            on_hand: Decimal::ZERO,
            reorder_level: Decimal::ZERO,
            on_order: Decimal::ZERO,
            required: Decimal::ZERO,
        }
    }
}

/// 庫存健康度評估結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockAssessment {
    /// 健康度分類
    pub health: StockHealth,

    /// 在途到貨後的預計庫存（現有 + 在途 − 需求）
    pub projected_after_orders: Decimal,

    /// 當前缺口（需求 − 現有，下限 0）
    pub current_shortage: Decimal,
}

/// 庫存健康度計算器
pub struct StockHealthCalculator;

impl StockHealthCalculator {
    /// 評估單一物料的庫存健康度
    ///
    /// 分類規則依優先序判定，首個符合者即為結果：
    /// 1. 現有庫存 ≤ 0 → Critical
    /// 2. 現有 + 在途 < 需求 → Insufficient
    /// 3. 現有 ≤ 再訂購點 → Low
    /// 4. 現有 > 再訂購點 × 3 且 需求 > 現有 → HighButNeeded
    /// 5. 現有 > 再訂購點 × 3 → Excess
    /// 6. 其餘 → Healthy
    ///
    /// 再訂購點為 0 時規則 4/5 不成立（未設定再訂購點即無過剩門檻）
    pub fn evaluate(position: &StockPosition) -> StockAssessment {
        let projected_after_orders = position.on_hand + position.on_order - position.required;
        let current_shortage = (position.required - position.on_hand).max(Decimal::ZERO);

        let excess_threshold = position.reorder_level * Decimal::from(3);
        let has_excess_threshold = position.reorder_level > Decimal::ZERO;

        let health = if position.on_hand <= Decimal::ZERO {
            StockHealth::Critical
        } else if position.on_hand + position.on_order < position.required {
            StockHealth::Insufficient
        } else if position.on_hand <= position.reorder_level {
            StockHealth::Low
        } else if has_excess_threshold
            && position.on_hand > excess_threshold
            && position.required > position.on_hand
        {
            StockHealth::HighButNeeded
        } else if has_excess_threshold && position.on_hand > excess_threshold {
            StockHealth::Excess
        } else {
            StockHealth::Healthy
        };

        StockAssessment {
            health,
            projected_after_orders,
            current_shortage,
        }
    }

    /// 批次評估（看板用，物料數量大時平行計算）
    pub fn evaluate_all(positions: &[(String, StockPosition)]) -> Vec<(String, StockAssessment)> {
        positions
            .par_iter()
            .map(|(component_id, position)| (component_id.clone(), Self::evaluate(position)))
            .collect()
    }
}
