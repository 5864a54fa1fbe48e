//! Timeline layout for the Gantt view.
//!
//! Every task becomes a bar on a shared day-indexed timeline. Positions are
//! in terminal cells: a day is `DAY_WIDTH` cells wide, a bar's offset is the
//! number of days between the start of the range and the task's start.
//! Tasks without a due date get an estimated length from their priority.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::DAY_WIDTH;
use crate::models::dates::local_date;
use crate::models::Task;

#[derive(Debug, Clone)]
pub struct GanttBar<'a> {
    pub task: &'a Task,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
    pub offset: usize,
    pub width: usize,
    /// The end date came from the priority fallback, not a due date.
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpan {
    pub label: String,
    pub start_index: usize,
    pub days: usize,
}

impl MonthSpan {
    pub fn offset(&self) -> usize {
        self.start_index * DAY_WIDTH
    }

    pub fn width(&self) -> usize {
        self.days * DAY_WIDTH
    }
}

#[derive(Debug, Clone, Default)]
pub struct GanttLayout<'a> {
    pub days: Vec<NaiveDate>,
    pub months: Vec<MonthSpan>,
    pub bars: Vec<GanttBar<'a>>,
    pub today_offset: Option<usize>,
}

/// Start, end and whether the end was estimated.
pub fn task_span(task: &Task, today: NaiveDate) -> (NaiveDate, NaiveDate, bool) {
    let start = task.created_at.map(local_date).unwrap_or(today);

    let (end, estimated) = match task.due_date {
        Some(due) => (local_date(due), false),
        None => (start + Duration::days(task.priority.fallback_days()), true),
    };

    (start, end.max(start), estimated)
}

impl<'a> GanttLayout<'a> {
    pub fn compute(tasks: &'a [Task], today: NaiveDate) -> Self {
        if tasks.is_empty() {
            return Self::default();
        }

        let spans: Vec<(&Task, NaiveDate, i64, bool)> = tasks
            .iter()
            .map(|task| {
                let (start, end, estimated) = task_span(task, today);
                let duration = (end - start).num_days().max(1);
                (task, start, duration, estimated)
            })
            .collect();

        let range_start = spans.iter().map(|(_, start, _, _)| *start).min().unwrap_or(today);
        let range_end = spans
            .iter()
            .map(|(_, start, duration, _)| *start + Duration::days(*duration))
            .max()
            .unwrap_or(today);

        let days: Vec<NaiveDate> = range_start
            .iter_days()
            .take_while(|d| *d <= range_end)
            .collect();

        let bars = spans
            .into_iter()
            .map(|(task, start, duration, estimated)| {
                let offset = (start - range_start).num_days() as usize * DAY_WIDTH;
                GanttBar {
                    task,
                    start,
                    end: start + Duration::days(duration),
                    duration_days: duration,
                    offset,
                    width: duration as usize * DAY_WIDTH,
                    estimated,
                }
            })
            .collect();

        let today_offset = if today >= range_start && today <= range_end {
            Some((today - range_start).num_days() as usize * DAY_WIDTH)
        } else {
            None
        };

        Self {
            months: group_months(&days),
            days,
            bars,
            today_offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }

    pub fn total_width(&self) -> usize {
        self.days.len() * DAY_WIDTH
    }
}

/// Consecutive runs of days falling in the same calendar month.
pub fn group_months(days: &[NaiveDate]) -> Vec<MonthSpan> {
    let mut months: Vec<MonthSpan> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for (index, day) in days.iter().enumerate() {
        let key = (day.year(), day.month());
        if current == Some(key) {
            if let Some(last) = months.last_mut() {
                last.days += 1;
            }
        } else {
            current = Some(key);
            months.push(MonthSpan {
                label: day.format("%b %Y").to_string(),
                start_index: index,
                days: 1,
            });
        }
    }

    months
}
