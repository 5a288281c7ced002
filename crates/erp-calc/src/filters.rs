//! 採購單篩選

use chrono::NaiveDate;
use erp_core::{PurchaseOrder, PurchaseOrderStatus};

use crate::receiving::ReceiptReconciler;

/// 採購單篩選條件（不可變值物件，AND 組合）
///
/// 所有欄位皆為選填，缺省即不設限；狀態比對使用導出狀態
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// 狀態
    status: Option<PurchaseOrderStatus>,

    /// 單號關鍵字（不分大小寫子字串）
    code_query: Option<String>,

    /// 供應商名稱（任一明細的供應商符合即可）
    supplier: Option<String>,

    /// 日期區間起日（含當日 00:00 起）
    date_from: Option<NaiveDate>,

    /// 日期區間迄日（含當日 23:59:59 止）
    date_to: Option<NaiveDate>,
}

impl OrderFilter {
    /// 無任何限制的篩選條件
    pub fn none() -> Self {
        Self::default()
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: PurchaseOrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// 建構器模式：設置單號關鍵字
    pub fn with_code_query(mut self, query: String) -> Self {
        self.code_query = Some(query);
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// 建構器模式：設置日期區間（含首尾兩日）
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// 檢查單筆採購單是否通過所有條件
    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        if let Some(status) = self.status {
            if ReceiptReconciler::derived_status(order) != status {
                return false;
            }
        }

        if let Some(query) = &self.code_query {
            let haystack = order.code.to_ascii_lowercase();
            if !haystack.contains(&query.to_ascii_lowercase()) {
                return false;
            }
        }

        if let Some(supplier) = &self.supplier {
            let any_line_matches = order
                .lines
                .iter()
                .any(|line| line.supplier_name.eq_ignore_ascii_case(supplier));
            if !any_line_matches {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            let start = from.and_hms_opt(0, 0, 0).expect("日期溢出");
            if order.ordered_at < start {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            let end = to.and_hms_opt(23, 59, 59).expect("日期溢出");
            if order.ordered_at > end {
                return false;
            }
        }

        true
    }

    /// 套用篩選
    pub fn apply(&self, orders: &[PurchaseOrder]) -> Vec<PurchaseOrder> {
        orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }
}
