use chrono::NaiveDate;
use serde_json::json;

use taskboard_cli::constants::DAY_WIDTH;
use taskboard_cli::formatting::gantt::{render_gantt, TITLE_WIDTH};
use taskboard_cli::gantt::{group_months, GanttLayout};
use taskboard_cli::Task;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn task(value: serde_json::Value) -> Task {
    serde_json::from_value(value).unwrap()
}

#[test]
fn undated_tasks_use_priority_fallback() {
    let today = day(10, 16);
    let tasks = vec![
        task(json!({"_id": "h", "title": "Hotfix", "priority": "high"})),
        task(json!({"_id": "l", "title": "Cleanup", "priority": "low"})),
    ];

    let layout = GanttLayout::compute(&tasks, today);
    assert_eq!(layout.bars[0].width, 3 * DAY_WIDTH);
    assert!(layout.bars[0].estimated);
    assert_eq!(layout.bars[1].width, 14 * DAY_WIDTH);
    assert_eq!(layout.range(), Some((today, day(10, 30))));
}

#[test]
fn offsets_are_relative_to_earliest_start() {
    let today = day(10, 16);
    let tasks = vec![
        task(json!({"_id": "a", "title": "Design", "createdAt": "2026-10-10", "dueDate": "2026-10-14"})),
        task(json!({"_id": "b", "title": "Build", "createdAt": "2026-10-12T12:00:00Z", "dueDate": "2026-10-20"})),
    ];

    let layout = GanttLayout::compute(&tasks, today);
    assert_eq!(layout.bars[0].offset, 0);
    assert_eq!(layout.bars[0].width, 4 * DAY_WIDTH);
    assert!(!layout.bars[0].estimated);
    assert_eq!(layout.bars[1].offset, 2 * DAY_WIDTH);
    assert_eq!(layout.today_offset, Some(6 * DAY_WIDTH));
}

#[test]
fn due_before_creation_still_gets_one_day() {
    let tasks = vec![task(json!({
        "_id": "x", "title": "Odd", "createdAt": "2026-10-10", "dueDate": "2026-10-01"
    }))];

    let layout = GanttLayout::compute(&tasks, day(10, 16));
    assert_eq!(layout.bars[0].duration_days, 1);
    assert_eq!(layout.bars[0].width, DAY_WIDTH);
}

#[test]
fn months_split_at_boundaries() {
    let days: Vec<NaiveDate> = day(10, 30).iter_days().take(4).collect();
    let months = group_months(&days);

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].label, "Oct 2026");
    assert_eq!(months[0].days, 2);
    assert_eq!(months[1].start_index, 2);
    assert_eq!(months[1].offset(), 2 * DAY_WIDTH);
}

#[test]
fn empty_chart() {
    let layout = GanttLayout::compute(&[], day(10, 16));
    assert!(layout.is_empty());
    assert_eq!(render_gantt(&layout, day(10, 16), false), vec!["No tasks to chart."]);
}

#[test]
fn plain_render_places_bars() {
    let today = day(10, 16);
    let tasks = vec![
        task(json!({"_id": "a", "title": "Design", "createdAt": "2026-10-16", "dueDate": "2026-10-18"})),
        task(json!({"_id": "b", "title": "Review", "priority": "high", "createdAt": "2026-10-17"})),
    ];

    let layout = GanttLayout::compute(&tasks, today);
    let lines = render_gantt(&layout, today, false);
    assert_eq!(lines.len(), 3 + tasks.len());

    let row: Vec<char> = lines[4].chars().collect();
    let chart_start = TITLE_WIDTH + 2;
    // Today sits before the bar and is marked in the lead
    assert_eq!(row[chart_start], '┊');
    assert_eq!(row[chart_start + DAY_WIDTH], '▒');

    let dated: Vec<char> = lines[3].chars().collect();
    assert_eq!(dated[chart_start], '█');
}
