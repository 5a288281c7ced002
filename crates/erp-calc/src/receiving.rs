//! 採購收貨對帳

use erp_core::{PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus};
use rust_decimal::Decimal;

use crate::CalcWarning;

/// 採購單分頁結果：進行中 / 已結案
#[derive(Debug, Clone, Default)]
pub struct OrderPartition {
    pub in_progress: Vec<PurchaseOrder>,
    pub completed: Vec<PurchaseOrder>,
}

/// 收貨對帳計算器
pub struct ReceiptReconciler;

impl ReceiptReconciler {
    /// 導出顯示狀態（覆蓋儲存狀態）
    ///
    /// 僅儲存狀態為 Approved 的單據會被覆蓋：
    /// - 所有明細皆已收足（且至少一筆明細）→ FullyReceived
    /// - 至少一筆明細收了一部分（0 < 已收 < 訂購）→ PartiallyReceived
    /// - 其餘維持 Approved
    ///
    /// 其他儲存狀態一律原樣通過；無明細的單據回傳儲存狀態
    pub fn derived_status(order: &PurchaseOrder) -> PurchaseOrderStatus {
        if !order.has_lines() {
            return order.status;
        }

        if order.status != PurchaseOrderStatus::Approved {
            return order.status;
        }

        if order.lines.iter().all(|line| line.is_fully_received()) {
            return PurchaseOrderStatus::FullyReceived;
        }

        let any_partial = order.lines.iter().any(|line| {
            line.received_qty > Decimal::ZERO && line.received_qty < line.order_qty
        });
        if any_partial {
            return PurchaseOrderStatus::PartiallyReceived;
        }

        PurchaseOrderStatus::Approved
    }

    /// 待收貨明細工作集
    ///
    /// 未收數量 ≤ 0 的明細在此就被剔除，供應商／日期等後續篩選
    /// 不會再看到它們
    pub fn outstanding_lines(order: &PurchaseOrder) -> Vec<&PurchaseOrderLine> {
        order
            .lines
            .iter()
            .filter(|line| line.owing() > Decimal::ZERO)
            .collect()
    }

    /// 依導出狀態將採購單分頁
    ///
    /// 進行中 = {Draft, Pending Approval, Approved, Partially Received}
    /// 已結案 = {Fully Received, Cancelled}
    pub fn partition(orders: &[PurchaseOrder]) -> OrderPartition {
        let mut result = OrderPartition::default();

        for order in orders {
            if Self::derived_status(order).is_open() {
                result.in_progress.push(order.clone());
            } else {
                result.completed.push(order.clone());
            }
        }

        tracing::debug!(
            "採購單分頁：進行中 {} 筆，已結案 {} 筆",
            result.in_progress.len(),
            result.completed.len()
        );

        result
    }

    /// 超收檢查：已收 > 訂購的明細
    ///
    /// 未收數量照常夾限為 0（看板不可因髒資料崩潰），但每筆超收
    /// 另外回報一筆資料品質警告
    pub fn check_over_receipts(orders: &[PurchaseOrder]) -> Vec<CalcWarning> {
        let mut warnings = Vec::new();

        for order in orders {
            for line in &order.lines {
                if line.is_over_received() {
                    tracing::warn!(
                        "採購單 {} 物料 {} 超收：訂購 {}，已收 {}",
                        order.code,
                        line.component_id,
                        line.order_qty,
                        line.received_qty
                    );
                    warnings.push(CalcWarning::warning(
                        order.code.clone(),
                        format!(
                            "物料 {} 超收：訂購 {}，已收 {}",
                            line.component_id, line.order_qty, line.received_qty
                        ),
                    ));
                }
            }
        }

        warnings
    }
}
