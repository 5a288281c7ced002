//! # ERP Core
//!
//! 核心資料模型與類型定義

pub mod attendance;
pub mod bom;
pub mod component;
pub mod purchasing;
pub mod sales;

// Re-export 主要類型
pub use attendance::{
    BreakType, ClockEvent, ClockEventType, DailySummary, SegmentType, TimeSegment,
    VerificationMethod,
};
pub use bom::BomEntry;
pub use component::{Component, InventoryRecord, SupplierOffer};
pub use purchasing::{PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus};
pub use sales::{SalesOrderLine, SalesOrderStatus};

/// ERP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ErpError {
    #[error("找不到物料: {0}")]
    ComponentNotFound(String),

    #[error("找不到員工: {0}")]
    StaffNotFound(String),

    #[error("無效的單據狀態: {0}")]
    InvalidStatus(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("資料存取錯誤: {0}")]
    StorageError(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ErpError>;
