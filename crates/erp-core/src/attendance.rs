//! 出勤打卡模型

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 打卡事件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockEventType {
    /// 上班打卡
    ClockIn,
    /// 下班打卡
    ClockOut,
    /// 休息開始
    BreakStart,
    /// 休息結束
    BreakEnd,
}

/// 休息類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakType {
    /// 午休
    Lunch,
    /// 其他休息
    Other,
}

/// 打卡驗證方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMethod {
    /// 人工登錄
    Manual,
    /// 感應卡
    Card,
    /// 生物辨識
    Biometric,
}

/// 打卡事件（依時間排序）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEvent {
    /// 事件ID
    pub id: Uuid,

    /// 員工ID
    pub staff_id: String,

    /// 事件時間
    pub event_time: NaiveDateTime,

    /// 事件類型
    pub event_type: ClockEventType,

    /// 休息類型（僅休息事件）
    pub break_type: Option<BreakType>,

    /// 驗證方式
    pub verification_method: VerificationMethod,
}

impl ClockEvent {
    /// 創建新的打卡事件
    pub fn new(staff_id: String, event_time: NaiveDateTime, event_type: ClockEventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id,
            event_time,
            event_type,
            break_type: None,
            verification_method: VerificationMethod::Card,
        }
    }

    /// 建構器模式：設置休息類型
    pub fn with_break_type(mut self, break_type: BreakType) -> Self {
        self.break_type = Some(break_type);
        self
    }

    /// 建構器模式：設置驗證方式
    pub fn with_verification(mut self, method: VerificationMethod) -> Self {
        self.verification_method = method;
        self
    }
}

/// 時段類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentType {
    /// 工作時段
    Work,
    /// 休息時段
    Break,
}

/// 時段：由成對打卡事件導出的連續區間
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSegment {
    /// 員工ID
    pub staff_id: String,

    /// 開始時間
    pub start_time: NaiveDateTime,

    /// 結束時間
    pub end_time: NaiveDateTime,

    /// 時段類型
    pub segment_type: SegmentType,

    /// 休息類型（僅休息時段）
    pub break_type: Option<BreakType>,
}

impl TimeSegment {
    /// 創建新的時段
    pub fn new(
        staff_id: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        segment_type: SegmentType,
    ) -> Self {
        Self {
            staff_id,
            start_time,
            end_time,
            segment_type,
            break_type: None,
        }
    }

    /// 建構器模式：設置休息類型
    pub fn with_break_type(mut self, break_type: BreakType) -> Self {
        self.break_type = Some(break_type);
        self
    }

    /// 時段長度（分鐘）
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// 有效時段：結束時間必須晚於開始時間
    ///
    /// 零長度或負長度時段（時鐘偏移、重複事件）一律丟棄
    pub fn is_valid(&self) -> bool {
        self.end_time > self.start_time
    }
}

/// 每日出勤彙總（每員工每日一筆，重算時整筆覆寫）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// 員工ID
    pub staff_id: String,

    /// 出勤日期
    pub date_worked: NaiveDate,

    /// 工作分鐘數
    pub total_work_minutes: i64,

    /// 午休分鐘數
    pub lunch_break_minutes: i64,

    /// 其他休息分鐘數
    pub other_break_minutes: i64,

    /// 正常工時（分鐘）
    pub regular_minutes: i64,

    /// 加班工時（分鐘）
    pub overtime_minutes: i64,

    /// 當日第一筆上班打卡
    pub first_clock_in: Option<NaiveDateTime>,

    /// 當日最後一筆下班打卡
    pub last_clock_out: Option<NaiveDateTime>,

    /// 是否完整（最後一筆上班打卡之後存在下班打卡）
    pub is_complete: bool,
}

impl DailySummary {
    /// 空白彙總
    pub fn empty(staff_id: String, date_worked: NaiveDate) -> Self {
        Self {
            staff_id,
            date_worked,
            total_work_minutes: 0,
            lunch_break_minutes: 0,
            other_break_minutes: 0,
            regular_minutes: 0,
            overtime_minutes: 0,
            first_clock_in: None,
            last_clock_out: None,
            is_complete: false,
        }
    }

    /// upsert 用的自然鍵（員工ID, 日期）
    pub fn key(&self) -> (String, NaiveDate) {
        (self.staff_id.clone(), self.date_worked)
    }

    /// 總休息分鐘數
    pub fn total_break_minutes(&self) -> i64 {
        self.lunch_break_minutes + self.other_break_minutes
    }
}
