//! 記憶體存取實作（測試與範例用）

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use erp_core::{
    BomEntry, ClockEvent, DailySummary, InventoryRecord, PurchaseOrder, PurchaseOrderLine,
    Result, SalesOrderLine, TimeSegment,
};

use crate::store::ErpStore;

/// 記憶體存取實作
///
/// 以整張採購單為儲存單位；未結明細查詢時再展開，
/// 並記錄銷售明細的查詢次數供短路驗證使用
#[derive(Debug, Default)]
pub struct MemoryStore {
    inventory: HashMap<String, InventoryRecord>,
    purchase_orders: Vec<PurchaseOrder>,
    bom: Vec<BomEntry>,
    sales_lines: Vec<SalesOrderLine>,
    clock_events: Vec<ClockEvent>,
    segments: Vec<TimeSegment>,
    summaries: HashMap<(String, NaiveDate), DailySummary>,
    sales_queries: AtomicUsize,
}

impl MemoryStore {
    /// 創建空的存取實作
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入庫存紀錄
    pub fn with_inventory(mut self, record: InventoryRecord) -> Self {
        self.inventory.insert(record.component_id.clone(), record);
        self
    }

    /// 建構器模式：加入採購單
    pub fn with_purchase_order(mut self, order: PurchaseOrder) -> Self {
        self.purchase_orders.push(order);
        self
    }

    /// 建構器模式：加入 BOM 項目
    pub fn with_bom_entry(mut self, entry: BomEntry) -> Self {
        self.bom.push(entry);
        self
    }

    /// 建構器模式：加入銷售明細
    pub fn with_sales_line(mut self, line: SalesOrderLine) -> Self {
        self.sales_lines.push(line);
        self
    }

    /// 建構器模式：加入打卡事件
    pub fn with_clock_event(mut self, event: ClockEvent) -> Self {
        self.clock_events.push(event);
        self
    }

    /// 建構器模式：加入時段
    pub fn with_segment(mut self, segment: TimeSegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// 所有採購單（看板計算用）
    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    /// 銷售明細查詢次數（驗證 BOM 為空時不查訂單）
    pub fn sales_query_count(&self) -> usize {
        self.sales_queries.load(Ordering::Relaxed)
    }
}

impl ErpStore for MemoryStore {
    fn inventory_record(&self, component_id: &str) -> Result<Option<InventoryRecord>> {
        Ok(self.inventory.get(component_id).cloned())
    }

    fn open_purchase_order_lines(&self, component_id: &str) -> Result<Vec<PurchaseOrderLine>> {
        let lines = self
            .purchase_orders
            .iter()
            .filter(|order| order.status.is_open())
            .flat_map(|order| order.lines.iter())
            .filter(|line| line.component_id == component_id)
            .cloned()
            .collect();
        Ok(lines)
    }

    fn bom_entries(&self, component_id: &str) -> Result<Vec<BomEntry>> {
        let entries = self
            .bom
            .iter()
            .filter(|entry| entry.component_id == component_id)
            .cloned()
            .collect();
        Ok(entries)
    }

    fn open_sales_order_lines(&self, product_ids: &[String]) -> Result<Vec<SalesOrderLine>> {
        self.sales_queries.fetch_add(1, Ordering::Relaxed);

        let lines = self
            .sales_lines
            .iter()
            .filter(|line| product_ids.contains(&line.product_id))
            .filter(|line| !line.order_status.is_closed())
            .cloned()
            .collect();
        Ok(lines)
    }

    fn clock_events(&self, staff_id: &str, date: NaiveDate) -> Result<Vec<ClockEvent>> {
        let mut events: Vec<ClockEvent> = self
            .clock_events
            .iter()
            .filter(|event| event.staff_id == staff_id && event.event_time.date() == date)
            .cloned()
            .collect();
        events.sort_by_key(|event| event.event_time);
        Ok(events)
    }

    fn time_segments(&self, staff_id: &str, date: NaiveDate) -> Result<Vec<TimeSegment>> {
        let segments = self
            .segments
            .iter()
            .filter(|segment| {
                segment.staff_id == staff_id && segment.start_time.date() == date
            })
            .cloned()
            .collect();
        Ok(segments)
    }

    fn upsert_daily_summary(&mut self, summary: DailySummary) -> Result<()> {
        self.summaries.insert(summary.key(), summary);
        Ok(())
    }

    fn daily_summary(&self, staff_id: &str, date: NaiveDate) -> Result<Option<DailySummary>> {
        Ok(self.summaries.get(&(staff_id.to_string(), date)).cloned())
    }
}
