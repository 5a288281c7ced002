//! 彙總協調服務
//!
//! 把存取層與純計算器接起來：取齊輸入、呼叫計算、寫回結果。
//! 缺漏資料一律降級為零值輸入，不在此層拋錯

use chrono::NaiveDate;
use erp_calc::{AttendanceCalculator, DemandCalculator, StockAssessment, StockHealthCalculator, StockPosition};
use erp_core::{DailySummary, Result};
use rust_decimal::Decimal;

use crate::store::ErpStore;
use crate::tracking::SummaryTracker;

/// 庫存水位服務
pub struct PositionService;

impl PositionService {
    /// 物料在途數量：未結採購明細的未收數量合計
    pub fn on_order_quantity<S: ErpStore>(store: &S, component_id: &str) -> Result<Decimal> {
        let lines = store.open_purchase_order_lines(component_id)?;
        Ok(lines.iter().map(|line| line.owing()).sum())
    }

    /// 物料未結需求：BOM 項目為空時直接回 0，不再查銷售明細
    pub fn required_quantity<S: ErpStore>(store: &S, component_id: &str) -> Result<Decimal> {
        let bom_entries = store.bom_entries(component_id)?;
        if bom_entries.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let product_ids: Vec<String> = bom_entries
            .iter()
            .map(|entry| entry.product_id.clone())
            .collect();
        let order_lines = store.open_sales_order_lines(&product_ids)?;

        Ok(DemandCalculator::required_for_component(
            component_id,
            &bom_entries,
            &order_lines,
        ))
    }

    /// 評估單一物料的庫存健康度
    ///
    /// 查無庫存紀錄時以全零水位評估（降級為空，不視為錯誤）
    pub fn assess<S: ErpStore>(store: &S, component_id: &str) -> Result<StockAssessment> {
        let on_order = Self::on_order_quantity(store, component_id)?;
        let required = Self::required_quantity(store, component_id)?;

        let position = match store.inventory_record(component_id)? {
            Some(record) => StockPosition::from_record(&record, on_order, required),
            None => {
                tracing::debug!("物料 {} 查無庫存紀錄，以零庫存評估", component_id);
                StockPosition::new(Decimal::ZERO, Decimal::ZERO, on_order, required)
            }
        };

        let assessment = StockHealthCalculator::evaluate(&position);

        tracing::debug!(
            "物料 {} 健康度 {}，預計庫存 {}，缺口 {}",
            component_id,
            assessment.health.as_str(),
            assessment.projected_after_orders,
            assessment.current_shortage
        );

        Ok(assessment)
    }
}

/// 出勤彙總服務
pub struct AttendanceService;

impl AttendanceService {
    /// 重算並寫回某員工某日的出勤彙總
    ///
    /// 整筆覆寫語義：以當前事件與時段重新計算完整彙總，
    /// 再以（員工ID, 日期）為鍵 upsert
    pub fn recompute_daily_summary<S: ErpStore>(
        store: &mut S,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<DailySummary> {
        let events = store.clock_events(staff_id, date)?;
        let segments = store.time_segments(staff_id, date)?;

        let summary =
            AttendanceCalculator::compute_daily_summary(staff_id, date, &events, &segments);
        store.upsert_daily_summary(summary.clone())?;

        Ok(summary)
    }

    /// 重算追蹤器中所有過期的彙總，回傳重算筆數
    pub fn recompute_stale<S: ErpStore>(
        store: &mut S,
        tracker: &mut SummaryTracker,
    ) -> Result<usize> {
        let stale = tracker.take_stale();
        let count = stale.len();

        for (staff_id, date) in stale {
            Self::recompute_daily_summary(store, &staff_id, date)?;
        }

        if count > 0 {
            tracing::info!("重算 {} 筆過期出勤彙總", count);
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::NaiveDateTime;
    use erp_core::{
        BomEntry, ClockEvent, ClockEventType, InventoryRecord, PurchaseOrder, PurchaseOrderLine,
        PurchaseOrderStatus, SalesOrderLine, SalesOrderStatus, SegmentType, TimeSegment,
    };
    use erp_calc::StockHealth;
    use uuid::Uuid;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn open_order(component: &str, ordered: i64, received: i64) -> PurchaseOrder {
        PurchaseOrder::new(
            "PO-001".to_string(),
            PurchaseOrderStatus::Approved,
            at(2, 9, 0),
        )
        .with_line(
            PurchaseOrderLine::new(
                Uuid::nil(),
                component.to_string(),
                "精準五金".to_string(),
                Decimal::from(ordered),
            )
            .with_received_qty(Decimal::from(received)),
        )
    }

    #[test]
    fn test_on_order_sums_owing() {
        let store = MemoryStore::new()
            .with_purchase_order(open_order("CMP-001", 10, 4))
            .with_purchase_order(open_order("CMP-001", 5, 5));

        let on_order = PositionService::on_order_quantity(&store, "CMP-001").unwrap();
        assert_eq!(on_order, Decimal::from(6));
    }

    #[test]
    fn test_required_short_circuits_without_bom() {
        let store = MemoryStore::new().with_sales_line(SalesOrderLine::new(
            "SO-001".to_string(),
            "PRD-100".to_string(),
            Decimal::from(3),
            SalesOrderStatus::Confirmed,
        ));

        let required = PositionService::required_quantity(&store, "CMP-001").unwrap();

        assert_eq!(required, Decimal::ZERO);
        // BOM 為空時不得查詢銷售明細
        assert_eq!(store.sales_query_count(), 0);
    }

    #[test]
    fn test_required_walks_bom() {
        let store = MemoryStore::new()
            .with_bom_entry(BomEntry::new(
                "CMP-001".to_string(),
                "PRD-100".to_string(),
                Decimal::from(4),
            ))
            .with_sales_line(SalesOrderLine::new(
                "SO-001".to_string(),
                "PRD-100".to_string(),
                Decimal::from(3),
                SalesOrderStatus::Confirmed,
            ));

        let required = PositionService::required_quantity(&store, "CMP-001").unwrap();
        assert_eq!(required, Decimal::from(12));
        assert_eq!(store.sales_query_count(), 1);
    }

    #[test]
    fn test_assess_without_inventory_record() {
        // 查無庫存紀錄 → 零庫存評估 → Critical
        let store = MemoryStore::new();
        let assessment = PositionService::assess(&store, "CMP-404").unwrap();
        assert_eq!(assessment.health, StockHealth::Critical);
    }

    #[test]
    fn test_assess_end_to_end() {
        let store = MemoryStore::new()
            .with_inventory(
                InventoryRecord::new("CMP-001".to_string(), Decimal::from(5))
                    .with_reorder_level(Decimal::from(10)),
            )
            .with_purchase_order(open_order("CMP-001", 8, 0));

        let assessment = PositionService::assess(&store, "CMP-001").unwrap();

        // 庫存 5 ≤ 再訂購點 10，無需求 → Low
        assert_eq!(assessment.health, StockHealth::Low);
        assert_eq!(assessment.projected_after_orders, Decimal::from(13));
    }

    #[test]
    fn test_recompute_daily_summary_upserts() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut store = MemoryStore::new()
            .with_clock_event(ClockEvent::new(
                "EMP-01".to_string(),
                at(2, 8, 0),
                ClockEventType::ClockIn,
            ))
            .with_clock_event(ClockEvent::new(
                "EMP-01".to_string(),
                at(2, 16, 30),
                ClockEventType::ClockOut,
            ))
            .with_segment(TimeSegment::new(
                "EMP-01".to_string(),
                at(2, 8, 0),
                at(2, 16, 30),
                SegmentType::Work,
            ));

        let summary = AttendanceService::recompute_daily_summary(&mut store, "EMP-01", date).unwrap();

        assert_eq!(summary.total_work_minutes, 510);
        assert_eq!(summary.overtime_minutes, 30);
        assert!(summary.is_complete);

        let stored = store.daily_summary("EMP-01", date).unwrap().unwrap();
        assert_eq!(stored.total_work_minutes, 510);
    }

    #[test]
    fn test_recompute_stale_drains_tracker() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut store = MemoryStore::new();
        let mut tracker = SummaryTracker::new();
        tracker.mark_stale("EMP-01", date);
        tracker.mark_stale("EMP-02", date);

        let count = AttendanceService::recompute_stale(&mut store, &mut tracker).unwrap();

        assert_eq!(count, 2);
        assert!(tracker.is_empty());
        // 沒有事件的日子也會產生空白彙總（整筆覆寫語義）
        let empty = store.daily_summary("EMP-01", date).unwrap().unwrap();
        assert_eq!(empty.total_work_minutes, 0);
        assert!(!empty.is_complete);
    }
}
