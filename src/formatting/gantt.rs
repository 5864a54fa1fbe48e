use colored::*;
use chrono::{Datelike, NaiveDate};

use super::theme::helpers::status_color;
use super::theme::{theme_color, SemanticColor};
use super::utils::fit;
use crate::constants::DAY_WIDTH;
use crate::gantt::{GanttBar, GanttLayout};

pub const TITLE_WIDTH: usize = 24;

const DATED_GLYPH: char = '█';
const ESTIMATED_GLYPH: char = '▒';

/// Renders the chart as text lines. With `color` off the output is plain,
/// which keeps column positions easy to assert on.
pub fn render_gantt(layout: &GanttLayout, today: NaiveDate, color: bool) -> Vec<String> {
    if layout.is_empty() {
        return vec!["No tasks to chart.".to_string()];
    }

    let gutter = format!("{} │", " ".repeat(TITLE_WIDTH));
    let mut lines = Vec::with_capacity(layout.bars.len() + 3);

    let mut month_row = String::new();
    for month in &layout.months {
        month_row.push_str(&fit(&month.label, month.width()));
    }
    lines.push(format!("{}{}", gutter, paint(&month_row, SemanticColor::Header, color, true)));

    let mut day_row = String::new();
    for day in &layout.days {
        let cell = format!("{:<width$}", day.day(), width = DAY_WIDTH);
        if *day == today {
            day_row.push_str(&paint(&cell, SemanticColor::Today, color, true));
        } else {
            day_row.push_str(&paint(&cell, SemanticColor::Muted, color, false));
        }
    }
    lines.push(format!("{}{}", gutter, day_row));
    lines.push(format!("{}┼{}", "─".repeat(TITLE_WIDTH + 1), "─".repeat(layout.total_width())));

    for bar in &layout.bars {
        lines.push(render_bar_row(bar, layout, color));
    }

    lines
}

fn render_bar_row(bar: &GanttBar, layout: &GanttLayout, color: bool) -> String {
    let glyph = if bar.estimated { ESTIMATED_GLYPH } else { DATED_GLYPH };
    let body: String = std::iter::repeat(glyph).take(bar.width).collect();
    let tail = layout.total_width().saturating_sub(bar.offset + bar.width);

    let mut lead: String = " ".repeat(bar.offset);
    if let Some(today) = layout.today_offset {
        if today < bar.offset {
            lead.replace_range(today..today + 1, "┊");
        }
    }

    format!(
        "{} │{}{}{}",
        fit(&bar.task.title, TITLE_WIDTH),
        lead,
        paint(&body, status_color(bar.task.status), color, false),
        " ".repeat(tail)
    )
}

fn paint(text: &str, semantic: SemanticColor, color: bool, bold: bool) -> String {
    if !color {
        return text.to_string();
    }
    let colored = text.color(theme_color(semantic));
    if bold {
        colored.bold().to_string()
    } else {
        colored.to_string()
    }
}

pub fn print_gantt(layout: &GanttLayout, today: NaiveDate) {
    for line in render_gantt(layout, today, true) {
        println!("{}", line);
    }

    if let Some((start, end)) = layout.range() {
        println!(
            "\n{} {} → {}   {} dated   {} estimated from priority",
            "Range:".dimmed(),
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            DATED_GLYPH,
            ESTIMATED_GLYPH
        );
    }
}
