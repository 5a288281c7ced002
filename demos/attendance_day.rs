//! 出勤彙總範例
//!
//! 展示從打卡事件與時段到每日彙總的重算流程

use chrono::NaiveDate;
use erp_calc::AttendanceCalculator;
use erp_core::*;
use erp_store::{AttendanceService, ErpStore, MemoryStore, SummaryTracker};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("===== Attendance Day Example =====\n");

    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let at = |hour: u32, minute: u32| date.and_hms_opt(hour, minute, 0).unwrap();

    // 步驟 1: 一天的打卡事件與時段
    println!("[1] Seed Clock Events and Segments");
    let mut store = MemoryStore::new()
        .with_clock_event(ClockEvent::new(
            "EMP-01".to_string(),
            at(8, 0),
            ClockEventType::ClockIn,
        ))
        .with_clock_event(
            ClockEvent::new("EMP-01".to_string(), at(12, 0), ClockEventType::BreakStart)
                .with_break_type(BreakType::Lunch),
        )
        .with_clock_event(
            ClockEvent::new("EMP-01".to_string(), at(13, 0), ClockEventType::BreakEnd)
                .with_break_type(BreakType::Lunch),
        )
        .with_clock_event(ClockEvent::new(
            "EMP-01".to_string(),
            at(18, 30),
            ClockEventType::ClockOut,
        ))
        .with_segment(TimeSegment::new(
            "EMP-01".to_string(),
            at(8, 0),
            at(12, 0),
            SegmentType::Work,
        ))
        .with_segment(
            TimeSegment::new("EMP-01".to_string(), at(12, 0), at(13, 0), SegmentType::Break)
                .with_break_type(BreakType::Lunch),
        )
        .with_segment(TimeSegment::new(
            "EMP-01".to_string(),
            at(13, 0),
            at(18, 30),
            SegmentType::Work,
        ));
    println!("    4 events, 3 segments\n");

    // 步驟 2: 缺卡檢查
    println!("[2] Missing Clock-Out Check");
    let events = store.clock_events("EMP-01", date)?;
    println!(
        "    Missing clock-out: {}\n",
        AttendanceCalculator::missing_clock_out(&events)
    );

    // 步驟 3: 重算每日彙總
    println!("[3] Recompute Daily Summary");
    let mut tracker = SummaryTracker::new();
    tracker.mark_stale("EMP-01", date);
    AttendanceService::recompute_stale(&mut store, &mut tracker)?;

    let summary = store
        .daily_summary("EMP-01", date)?
        .expect("summary was upserted");

    println!("    Work minutes:     {}", summary.total_work_minutes);
    println!("    Lunch break:      {}", summary.lunch_break_minutes);
    println!("    Regular minutes:  {}", summary.regular_minutes);
    println!("    Overtime minutes: {}", summary.overtime_minutes);
    println!("    Complete:         {}", summary.is_complete);

    Ok(())
}
