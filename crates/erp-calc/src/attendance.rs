//! 出勤彙總計算

use chrono::NaiveDate;
use erp_core::{BreakType, ClockEvent, ClockEventType, DailySummary, SegmentType, TimeSegment};

/// 一日正常工時上限（8 小時）
pub const REGULAR_MINUTES_PER_DAY: i64 = 480;

/// 出勤彙總計算器
pub struct AttendanceCalculator;

impl AttendanceCalculator {
    /// 檢查是否缺下班卡：當日時間順序上最後一筆事件為上班打卡
    ///
    /// 僅作為提示，不是錯誤；尾端為休息事件時不視為缺卡
    pub fn missing_clock_out(events: &[ClockEvent]) -> bool {
        let mut ordered: Vec<&ClockEvent> = events.iter().collect();
        ordered.sort_by_key(|event| event.event_time);

        matches!(
            ordered.last().map(|event| event.event_type),
            Some(ClockEventType::ClockIn)
        )
    }

    /// 有效時段：長度必須為正，其餘靜默丟棄
    pub fn valid_segments(segments: &[TimeSegment]) -> Vec<&TimeSegment> {
        let valid: Vec<&TimeSegment> = segments.iter().filter(|s| s.is_valid()).collect();

        let dropped = segments.len() - valid.len();
        if dropped > 0 {
            tracing::debug!("丟棄 {} 筆非正長度時段", dropped);
        }

        valid
    }

    /// 顯示用總分鐘數：所有有效時段合計（沿用舊版顯示口徑，休息也計入）
    ///
    /// 彙總紀錄的工時欄位不用此口徑，見 `compute_daily_summary`
    pub fn display_minutes(segments: &[TimeSegment]) -> i64 {
        Self::valid_segments(segments)
            .iter()
            .map(|s| s.duration_minutes())
            .sum()
    }

    /// 正常／加班工時拆分：正常 = min(總分鐘, 480)，加班 = 超出部分
    pub fn split_regular_overtime(total_minutes: i64) -> (i64, i64) {
        let regular = total_minutes.min(REGULAR_MINUTES_PER_DAY);
        let overtime = (total_minutes - REGULAR_MINUTES_PER_DAY).max(0);
        (regular, overtime)
    }

    /// 重算每日出勤彙總（純函數，整筆覆寫式）
    ///
    /// 工作與休息分鐘數分開累計；正常／加班由工作分鐘數拆分。
    /// 打卡事件被編輯或刪除時，呼叫端以本函數的結果 upsert 覆蓋
    /// 既有彙總，鍵為（員工ID, 日期）
    pub fn compute_daily_summary(
        staff_id: &str,
        date_worked: NaiveDate,
        events: &[ClockEvent],
        segments: &[TimeSegment],
    ) -> DailySummary {
        let mut summary = DailySummary::empty(staff_id.to_string(), date_worked);

        for segment in Self::valid_segments(segments) {
            let minutes = segment.duration_minutes();
            match segment.segment_type {
                SegmentType::Work => summary.total_work_minutes += minutes,
                SegmentType::Break => match segment.break_type {
                    Some(BreakType::Lunch) => summary.lunch_break_minutes += minutes,
                    Some(BreakType::Other) | None => summary.other_break_minutes += minutes,
                },
            }
        }

        let (regular, overtime) = Self::split_regular_overtime(summary.total_work_minutes);
        summary.regular_minutes = regular;
        summary.overtime_minutes = overtime;

        summary.first_clock_in = events
            .iter()
            .filter(|e| e.event_type == ClockEventType::ClockIn)
            .map(|e| e.event_time)
            .min();
        summary.last_clock_out = events
            .iter()
            .filter(|e| e.event_type == ClockEventType::ClockOut)
            .map(|e| e.event_time)
            .max();

        // 完整性：最後一筆上班打卡之後必須存在下班打卡
        let last_clock_in = events
            .iter()
            .filter(|e| e.event_type == ClockEventType::ClockIn)
            .map(|e| e.event_time)
            .max();
        summary.is_complete = match last_clock_in {
            Some(clock_in) => summary
                .last_clock_out
                .map(|clock_out| clock_out > clock_in)
                .unwrap_or(false),
            None => false,
        };

        tracing::debug!(
            "員工 {} {} 彙總：工作 {} 分，休息 {} 分，加班 {} 分",
            staff_id,
            date_worked,
            summary.total_work_minutes,
            summary.total_break_minutes(),
            summary.overtime_minutes
        );

        summary
    }
}
