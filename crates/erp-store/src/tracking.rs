//! 過期彙總追蹤

use chrono::NaiveDate;
use std::collections::HashSet;

/// 過期彙總追蹤器
///
/// 打卡事件被新增／編輯／刪除後，對應（員工, 日期）的每日彙總
/// 即為過期，待下次觸發時整筆重算
#[derive(Debug, Default)]
pub struct SummaryTracker {
    stale: HashSet<(String, NaiveDate)>,
}

impl SummaryTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記彙總為過期
    pub fn mark_stale(&mut self, staff_id: &str, date: NaiveDate) {
        self.stale.insert((staff_id.to_string(), date));
    }

    /// 檢查彙總是否過期
    pub fn is_stale(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.stale.contains(&(staff_id.to_string(), date))
    }

    /// 取走所有過期鍵（清空追蹤器）
    pub fn take_stale(&mut self) -> Vec<(String, NaiveDate)> {
        self.stale.drain().collect()
    }

    /// 過期筆數
    pub fn len(&self) -> usize {
        self.stale.len()
    }

    /// 是否沒有待重算項目
    pub fn is_empty(&self) -> bool {
        self.stale.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_mark_and_check() {
        let mut tracker = SummaryTracker::new();
        tracker.mark_stale("EMP-01", date(2));

        assert!(tracker.is_stale("EMP-01", date(2)));
        assert!(!tracker.is_stale("EMP-01", date(3)));
        assert!(!tracker.is_stale("EMP-02", date(2)));
    }

    #[test]
    fn test_mark_same_key_twice_counts_once() {
        let mut tracker = SummaryTracker::new();
        tracker.mark_stale("EMP-01", date(2));
        tracker.mark_stale("EMP-01", date(2));

        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_take_stale_drains() {
        let mut tracker = SummaryTracker::new();
        tracker.mark_stale("EMP-01", date(2));
        tracker.mark_stale("EMP-02", date(3));

        let taken = tracker.take_stale();
        assert_eq!(taken.len(), 2);
        assert!(tracker.is_empty());
    }
}
