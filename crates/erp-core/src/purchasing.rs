//! 採購單模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購單狀態（儲存值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    /// 草稿
    Draft,
    /// 待核准
    PendingApproval,
    /// 已核准
    Approved,
    /// 部分收貨
    PartiallyReceived,
    /// 全部收貨
    FullyReceived,
    /// 已取消
    Cancelled,
}

impl PurchaseOrderStatus {
    /// 狀態顯示名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingApproval => "Pending Approval",
            Self::Approved => "Approved",
            Self::PartiallyReceived => "Partially Received",
            Self::FullyReceived => "Fully Received",
            Self::Cancelled => "Cancelled",
        }
    }

    /// 從儲存的顯示名稱解析（不分大小寫）
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "partially received" => Some(Self::PartiallyReceived),
            "fully received" => Some(Self::FullyReceived),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// 檢查是否為進行中狀態（未結案）
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Self::Draft | Self::PendingApproval | Self::Approved | Self::PartiallyReceived
        )
    }

    /// 檢查是否為結案狀態
    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }
}

impl std::fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 採購單明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    /// 明細ID
    pub id: Uuid,

    /// 所屬採購單ID
    pub purchase_order_id: Uuid,

    /// 物料ID
    pub component_id: String,

    /// 供應商名稱（來自報價）
    pub supplier_name: String,

    /// 訂購數量
    pub order_qty: Decimal,

    /// 已收數量（只增不減）
    pub received_qty: Decimal,
}

impl PurchaseOrderLine {
    /// 創建新的採購明細
    pub fn new(
        purchase_order_id: Uuid,
        component_id: String,
        supplier_name: String,
        order_qty: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            purchase_order_id,
            component_id,
            supplier_name,
            order_qty,
            received_qty: Decimal::ZERO,
        }
    }

    /// 從供應商報價建立明細（帶入物料與供應商）
    pub fn from_offer(
        purchase_order_id: Uuid,
        offer: &crate::component::SupplierOffer,
        order_qty: Decimal,
    ) -> Self {
        Self::new(
            purchase_order_id,
            offer.component_id.clone(),
            offer.supplier_name.clone(),
            order_qty,
        )
    }

    /// 建構器模式：設置已收數量
    pub fn with_received_qty(mut self, received_qty: Decimal) -> Self {
        self.received_qty = received_qty;
        self
    }

    /// 未收數量（訂購 − 已收，下限 0）
    ///
    /// 超收明細（已收 > 訂購）回傳 0，不視為錯誤
    pub fn owing(&self) -> Decimal {
        (self.order_qty - self.received_qty).max(Decimal::ZERO)
    }

    /// 檢查是否已全數收貨
    pub fn is_fully_received(&self) -> bool {
        self.received_qty >= self.order_qty
    }

    /// 檢查是否有任何收貨
    pub fn has_receipt(&self) -> bool {
        self.received_qty > Decimal::ZERO
    }

    /// 檢查是否超收（已收 > 訂購）
    pub fn is_over_received(&self) -> bool {
        self.received_qty > self.order_qty
    }

    /// 登記收貨（已收數量只增不減）
    pub fn record_receipt(&mut self, qty: Decimal) {
        if qty > Decimal::ZERO {
            self.received_qty += qty;
        }
    }
}

/// 採購單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 採購單ID
    pub id: Uuid,

    /// 採購單號
    pub code: String,

    /// 儲存狀態
    pub status: PurchaseOrderStatus,

    /// 下單時間
    pub ordered_at: NaiveDateTime,

    /// 預計到貨時間
    pub expected_at: Option<NaiveDateTime>,

    /// 採購明細
    pub lines: Vec<PurchaseOrderLine>,
}

impl PurchaseOrder {
    /// 創建新的採購單
    pub fn new(code: String, status: PurchaseOrderStatus, ordered_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            status,
            ordered_at,
            expected_at: None,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：設置預計到貨時間
    pub fn with_expected_at(mut self, expected_at: NaiveDateTime) -> Self {
        self.expected_at = Some(expected_at);
        self
    }

    /// 建構器模式：添加明細
    pub fn with_line(mut self, mut line: PurchaseOrderLine) -> Self {
        line.purchase_order_id = self.id;
        self.lines.push(line);
        self
    }

    /// 檢查是否有明細
    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }

    /// 全單未收數量
    pub fn total_owing(&self) -> Decimal {
        self.lines.iter().map(|line| line.owing()).sum()
    }
}
