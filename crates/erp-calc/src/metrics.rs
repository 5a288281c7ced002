//! 採購看板計數

use erp_core::{PurchaseOrder, PurchaseOrderStatus};

/// 採購看板計數結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchasingMetrics {
    /// 待處理（儲存狀態 Draft / Pending Approval）
    pub pending: usize,

    /// 已核准且尚未全數收貨
    pub approved: usize,

    /// 已核准中至少有一筆明細收過貨者（approved 的子集）
    pub partial_received: usize,
}

/// 看板計數計算器
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// 單次掃描彙總採購看板計數
    ///
    /// 全數收足的單據不計入任何一項
    pub fn purchasing(orders: &[PurchaseOrder]) -> PurchasingMetrics {
        let mut metrics = PurchasingMetrics::default();

        for order in orders {
            match order.status {
                PurchaseOrderStatus::Draft | PurchaseOrderStatus::PendingApproval => {
                    metrics.pending += 1;
                }
                PurchaseOrderStatus::Approved | PurchaseOrderStatus::PartiallyReceived => {
                    let fully_received = order.has_lines()
                        && order.lines.iter().all(|line| line.is_fully_received());
                    if fully_received {
                        continue;
                    }

                    metrics.approved += 1;
                    if order.lines.iter().any(|line| line.has_receipt()) {
                        metrics.partial_received += 1;
                    }
                }
                PurchaseOrderStatus::FullyReceived | PurchaseOrderStatus::Cancelled => {}
            }
        }

        tracing::debug!(
            "採購看板：待處理 {}，已核准 {}，部分收貨 {}",
            metrics.pending,
            metrics.approved,
            metrics.partial_received
        );

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use erp_core::PurchaseOrderLine;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn order_time() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn order(status: PurchaseOrderStatus, received: &[(i64, i64)]) -> PurchaseOrder {
        let mut po = PurchaseOrder::new("PO-TEST".to_string(), status, order_time());
        for &(ordered, recv) in received {
            po = po.with_line(
                PurchaseOrderLine::new(
                    Uuid::nil(),
                    "CMP-001".to_string(),
                    "精準五金".to_string(),
                    Decimal::from(ordered),
                )
                .with_received_qty(Decimal::from(recv)),
            );
        }
        po
    }

    #[test]
    fn test_pending_counts_draft_and_pending_approval() {
        let orders = vec![
            order(PurchaseOrderStatus::Draft, &[(10, 0)]),
            order(PurchaseOrderStatus::PendingApproval, &[(10, 0)]),
        ];

        let metrics = MetricsCalculator::purchasing(&orders);
        assert_eq!(metrics.pending, 2);
        assert_eq!(metrics.approved, 0);
    }

    #[test]
    fn test_partial_received_is_subset_of_approved() {
        let orders = vec![
            order(PurchaseOrderStatus::Approved, &[(10, 0)]), // 已核准、未收
            order(PurchaseOrderStatus::Approved, &[(10, 4)]), // 已核准、收了一部分
        ];

        let metrics = MetricsCalculator::purchasing(&orders);
        assert_eq!(metrics.approved, 2);
        assert_eq!(metrics.partial_received, 1);
    }

    #[test]
    fn test_fully_received_excluded_everywhere() {
        let orders = vec![order(PurchaseOrderStatus::Approved, &[(10, 10), (5, 5)])];

        let metrics = MetricsCalculator::purchasing(&orders);
        assert_eq!(metrics, PurchasingMetrics::default());
    }

    #[test]
    fn test_approved_without_lines_not_fully_received() {
        // 無明細的已核准單：視為未收足，計入 approved
        let orders = vec![order(PurchaseOrderStatus::Approved, &[])];

        let metrics = MetricsCalculator::purchasing(&orders);
        assert_eq!(metrics.approved, 1);
        assert_eq!(metrics.partial_received, 0);
    }

    #[test]
    fn test_cancelled_ignored() {
        let orders = vec![order(PurchaseOrderStatus::Cancelled, &[(10, 2)])];
        assert_eq!(
            MetricsCalculator::purchasing(&orders),
            PurchasingMetrics::default()
        );
    }
}
