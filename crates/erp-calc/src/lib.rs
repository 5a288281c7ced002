//! # ERP Calculation Engine
//!
//! 純計算模組：庫存健康度、採購收貨對帳、需求彙總、出勤彙總
//!
//! 所有計算器皆為無狀態純函數：輸入為已取回的資料列，缺漏輸入一律以
//! 零值處理，不在計算層拋出錯誤

pub mod attendance;
pub mod demand;
pub mod filters;
pub mod metrics;
pub mod receiving;
pub mod stock_health;

// Re-export 主要類型
pub use attendance::AttendanceCalculator;
pub use demand::DemandCalculator;
pub use filters::OrderFilter;
pub use metrics::{MetricsCalculator, PurchasingMetrics};
pub use receiving::{OrderPartition, ReceiptReconciler};
pub use stock_health::{StockAssessment, StockHealth, StockHealthCalculator, StockPosition};

/// 計算過程中發現的資料品質警告
#[derive(Debug, Clone)]
pub struct CalcWarning {
    /// 相關單據或物料的參考
    pub source_ref: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CalcWarning {
    pub fn new(source_ref: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            source_ref,
            message,
            severity,
        }
    }

    pub fn info(source_ref: String, message: String) -> Self {
        Self::new(source_ref, message, WarningSeverity::Info)
    }

    pub fn warning(source_ref: String, message: String) -> Self {
        Self::new(source_ref, message, WarningSeverity::Warning)
    }

    pub fn error(source_ref: String, message: String) -> Self {
        Self::new(source_ref, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
