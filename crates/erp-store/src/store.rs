//! 資料存取介面

use chrono::NaiveDate;
use erp_core::{
    BomEntry, ClockEvent, DailySummary, InventoryRecord, PurchaseOrderLine, Result,
    SalesOrderLine, TimeSegment,
};

/// 資料存取介面
///
/// 讀取操作回傳已正規化的資料列（單值一律 `Option`，不混用
/// 單物件與單元素陣列）；取數失敗由實作以 `ErpError` 回報，
/// 計算層永遠不會拿到部分資料
pub trait ErpStore {
    /// 查詢物料庫存紀錄
    fn inventory_record(&self, component_id: &str) -> Result<Option<InventoryRecord>>;

    /// 查詢物料的未結採購明細（僅進行中狀態的採購單）
    fn open_purchase_order_lines(&self, component_id: &str) -> Result<Vec<PurchaseOrderLine>>;

    /// 查詢物料的 BOM 項目
    fn bom_entries(&self, component_id: &str) -> Result<Vec<BomEntry>>;

    /// 查詢多個產品的未結銷售明細（排除 Completed / Cancelled）
    fn open_sales_order_lines(&self, product_ids: &[String]) -> Result<Vec<SalesOrderLine>>;

    /// 查詢員工某日的打卡事件（依時間排序）
    fn clock_events(&self, staff_id: &str, date: NaiveDate) -> Result<Vec<ClockEvent>>;

    /// 查詢員工某日的時段
    fn time_segments(&self, staff_id: &str, date: NaiveDate) -> Result<Vec<TimeSegment>>;

    /// 寫入每日彙總（冪等 upsert，鍵為（員工ID, 日期））
    fn upsert_daily_summary(&mut self, summary: DailySummary) -> Result<()>;

    /// 讀回每日彙總
    fn daily_summary(&self, staff_id: &str, date: NaiveDate) -> Result<Option<DailySummary>>;
}
