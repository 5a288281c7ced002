//! 銷售訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 銷售訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesOrderStatus {
    /// 草稿
    Draft,
    /// 已確認
    Confirmed,
    /// 生產中
    InProduction,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl SalesOrderStatus {
    /// 狀態顯示名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Confirmed => "Confirmed",
            Self::InProduction => "In Production",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// 從儲存的顯示名稱解析（不分大小寫）
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "confirmed" => Some(Self::Confirmed),
            "in production" => Some(Self::InProduction),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// 檢查是否為終結狀態（不再計入需求）
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for SalesOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 銷售訂單明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderLine {
    /// 明細ID
    pub id: Uuid,

    /// 所屬訂單號
    pub order_id: String,

    /// 產品ID
    pub product_id: String,

    /// 訂購數量
    pub quantity: Decimal,

    /// 所屬訂單狀態
    pub order_status: SalesOrderStatus,
}

impl SalesOrderLine {
    /// 創建新的銷售明細
    pub fn new(
        order_id: String,
        product_id: String,
        quantity: Decimal,
        order_status: SalesOrderStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            quantity,
            order_status,
        }
    }

    /// 檢查明細是否計入未結需求
    pub fn counts_toward_demand(&self) -> bool {
        !self.order_status.is_closed()
    }
}
