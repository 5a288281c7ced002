//! 庫存看板範例
//!
//! 展示從庫存／採購／銷售資料到健康度分類與採購看板的完整流程

use chrono::NaiveDate;
use erp_calc::{MetricsCalculator, OrderFilter, ReceiptReconciler};
use erp_core::*;
use erp_store::{MemoryStore, PositionService};
use rust_decimal::Decimal;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("===== Stock Dashboard Example =====\n");

    // 步驟 1: 建立資料（正常情況下來自資料庫）
    println!("[1] Seed Store");
    let store = seed_store();
    println!("    3 components, 3 purchase orders\n");

    // 步驟 2: 逐物料評估庫存健康度
    println!("[2] Assess Stock Health");
    for component_id in ["CMP-001", "CMP-002", "CMP-003"] {
        let assessment = PositionService::assess(&store, component_id)?;
        println!(
            "    {}: {} (projected {}, shortage {})",
            component_id,
            assessment.health.as_str(),
            assessment.projected_after_orders,
            assessment.current_shortage
        );
    }
    println!();

    // 步驟 3: 採購單分頁與看板計數
    println!("[3] Purchasing Dashboard");
    let orders = store.purchase_orders();

    let partition = ReceiptReconciler::partition(orders);
    println!(
        "    In progress: {}, Completed: {}",
        partition.in_progress.len(),
        partition.completed.len()
    );

    let metrics = MetricsCalculator::purchasing(orders);
    println!(
        "    Pending: {}, Approved: {}, Partially received: {}\n",
        metrics.pending, metrics.approved, metrics.partial_received
    );

    // 步驟 4: 供應商篩選
    println!("[4] Filter by Supplier");
    let filtered = OrderFilter::none()
        .with_supplier("精準五金".to_string())
        .apply(orders);
    for order in &filtered {
        println!(
            "    {} [{}] owing {}",
            order.code,
            ReceiptReconciler::derived_status(order),
            order.total_owing()
        );
    }
    println!();

    // 步驟 5: 資料品質檢查
    println!("[5] Data Quality");
    let warnings = ReceiptReconciler::check_over_receipts(orders);
    if warnings.is_empty() {
        println!("    No over-received lines");
    }
    for warning in &warnings {
        println!("    {}: {}", warning.source_ref, warning.message);
    }

    Ok(())
}

/// 建立範例資料
fn seed_store() -> MemoryStore {
    let at = |day: u32, hour: u32| {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    };

    let line = |component: &str, supplier: &str, ordered: i64, received: i64| {
        PurchaseOrderLine::new(
            Uuid::nil(),
            component.to_string(),
            supplier.to_string(),
            Decimal::from(ordered),
        )
        .with_received_qty(Decimal::from(received))
    };

    MemoryStore::new()
        // 庫存：CMP-001 無庫存、CMP-002 低於再訂購點、CMP-003 充足
        .with_inventory(
            InventoryRecord::new("CMP-001".to_string(), Decimal::ZERO)
                .with_reorder_level(Decimal::from(20)),
        )
        .with_inventory(
            InventoryRecord::new("CMP-002".to_string(), Decimal::from(8))
                .with_reorder_level(Decimal::from(10)),
        )
        .with_inventory(
            InventoryRecord::new("CMP-003".to_string(), Decimal::from(50))
                .with_reorder_level(Decimal::from(30)),
        )
        // 採購：一張部分收貨、一張未收、一張超收
        .with_purchase_order(
            PurchaseOrder::new(
                "PO-2025-0101".to_string(),
                PurchaseOrderStatus::Approved,
                at(2, 9),
            )
            .with_line(line("CMP-001", "精準五金", 40, 15)),
        )
        .with_purchase_order(
            PurchaseOrder::new(
                "PO-2025-0102".to_string(),
                PurchaseOrderStatus::PendingApproval,
                at(3, 10),
            )
            .with_line(PurchaseOrderLine::from_offer(
                Uuid::nil(),
                &SupplierOffer::new(
                    "CMP-002".to_string(),
                    "SUP-02".to_string(),
                    "大成鋼材".to_string(),
                    Decimal::new(880, 2),
                ),
                Decimal::from(20),
            )),
        )
        .with_purchase_order(
            PurchaseOrder::new(
                "PO-2025-0103".to_string(),
                PurchaseOrderStatus::Approved,
                at(4, 11),
            )
            .with_line(line("CMP-003", "精準五金", 10, 12)),
        )
        // BOM 與銷售：CMP-001 用於 PRD-100，每台 2 件
        .with_bom_entry(BomEntry::new(
            "CMP-001".to_string(),
            "PRD-100".to_string(),
            Decimal::from(2),
        ))
        .with_sales_line(SalesOrderLine::new(
            "SO-001".to_string(),
            "PRD-100".to_string(),
            Decimal::from(12),
            SalesOrderStatus::Confirmed,
        ))
}
