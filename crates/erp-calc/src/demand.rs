//! 需求彙總

use erp_core::{BomEntry, SalesOrderLine};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// 需求彙總計算器
pub struct DemandCalculator;

impl DemandCalculator {
    /// 計算指定物料在所有未結訂單下的需求總量
    ///
    /// 輸入為該物料的 BOM 項目與這些產品的銷售明細；
    /// 每筆明細貢獻 `明細數量 × 該物料的單位用量`。
    /// 終結狀態（Completed / Cancelled）的訂單貢獻 0；
    /// 明細的產品查不到該物料的 BOM 項目時同樣貢獻 0，不視為錯誤
    pub fn required_for_component(
        component_id: &str,
        bom_entries: &[BomEntry],
        order_lines: &[SalesOrderLine],
    ) -> Decimal {
        if bom_entries.is_empty() {
            return Decimal::ZERO;
        }

        // 同一產品可能掛多個物料的 BOM 項目，先縮到本物料的用量表
        let per_unit: HashMap<&str, Decimal> = bom_entries
            .iter()
            .filter(|entry| entry.component_id == component_id)
            .map(|entry| (entry.product_id.as_str(), entry.qty_per_unit))
            .collect();

        let required = order_lines
            .iter()
            .filter(|line| line.counts_toward_demand())
            .map(|line| {
                per_unit
                    .get(line.product_id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO)
                    * line.quantity
            })
            .sum();

        tracing::debug!("物料 {} 未結需求：{}", component_id, required);

        required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_core::SalesOrderStatus;

    fn entry(component: &str, product: &str, per_unit: i64) -> BomEntry {
        BomEntry::new(
            component.to_string(),
            product.to_string(),
            Decimal::from(per_unit),
        )
    }

    fn sales_line(order: &str, product: &str, qty: i64, status: SalesOrderStatus) -> SalesOrderLine {
        SalesOrderLine::new(
            order.to_string(),
            product.to_string(),
            Decimal::from(qty),
            status,
        )
    }

    #[test]
    fn test_no_bom_entries_zero_demand() {
        let lines = vec![sales_line("SO-001", "PRD-100", 5, SalesOrderStatus::Confirmed)];
        let required = DemandCalculator::required_for_component("CMP-001", &[], &lines);
        assert_eq!(required, Decimal::ZERO);
    }

    #[test]
    fn test_additive_over_products_and_lines() {
        // CMP-001 用於兩個產品：PRD-100 每台 4 個、PRD-200 每台 2 個
        let bom = vec![entry("CMP-001", "PRD-100", 4), entry("CMP-001", "PRD-200", 2)];
        let lines = vec![
            sales_line("SO-001", "PRD-100", 3, SalesOrderStatus::Confirmed), // 12
            sales_line("SO-002", "PRD-100", 1, SalesOrderStatus::InProduction), // 4
            sales_line("SO-003", "PRD-200", 5, SalesOrderStatus::Confirmed), // 10
        ];

        let required = DemandCalculator::required_for_component("CMP-001", &bom, &lines);
        assert_eq!(required, Decimal::from(26));
    }

    #[test]
    fn test_closed_orders_contribute_zero() {
        let bom = vec![entry("CMP-001", "PRD-100", 4)];
        let lines = vec![
            sales_line("SO-001", "PRD-100", 3, SalesOrderStatus::Completed),
            sales_line("SO-002", "PRD-100", 2, SalesOrderStatus::Cancelled),
            sales_line("SO-003", "PRD-100", 1, SalesOrderStatus::Confirmed),
        ];

        let required = DemandCalculator::required_for_component("CMP-001", &bom, &lines);
        assert_eq!(required, Decimal::from(4));
    }

    #[test]
    fn test_other_components_bom_rows_ignored() {
        // 傳入的 BOM 集合混入其他物料的項目時，只取本物料的用量
        let bom = vec![entry("CMP-001", "PRD-100", 4), entry("CMP-999", "PRD-100", 7)];
        let lines = vec![sales_line("SO-001", "PRD-100", 2, SalesOrderStatus::Confirmed)];

        let required = DemandCalculator::required_for_component("CMP-001", &bom, &lines);
        assert_eq!(required, Decimal::from(8));
    }

    #[test]
    fn test_line_without_bom_row_contributes_zero() {
        // 防禦性處理：明細產品沒有本物料的 BOM 項目 → 貢獻 0
        let bom = vec![entry("CMP-001", "PRD-100", 4)];
        let lines = vec![
            sales_line("SO-001", "PRD-100", 2, SalesOrderStatus::Confirmed),
            sales_line("SO-002", "PRD-300", 9, SalesOrderStatus::Confirmed),
        ];

        let required = DemandCalculator::required_for_component("CMP-001", &bom, &lines);
        assert_eq!(required, Decimal::from(8));
    }
}
