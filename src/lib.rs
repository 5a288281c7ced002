//! # ERP Reconciliation Engine
//!
//! 後台對帳引擎門面：重新匯出核心模型、純計算器與存取層

pub use erp_calc::{
    AttendanceCalculator, CalcWarning, DemandCalculator, MetricsCalculator, OrderFilter,
    OrderPartition, PurchasingMetrics, ReceiptReconciler, StockAssessment, StockHealth,
    StockHealthCalculator, StockPosition, WarningSeverity,
};
pub use erp_core::{
    BomEntry, BreakType, ClockEvent, ClockEventType, Component, DailySummary, ErpError,
    InventoryRecord, PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus, Result,
    SalesOrderLine, SalesOrderStatus, SegmentType, SupplierOffer, TimeSegment,
    VerificationMethod,
};
pub use erp_store::{AttendanceService, ErpStore, MemoryStore, PositionService, SummaryTracker};
