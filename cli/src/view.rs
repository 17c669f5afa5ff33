//! Boss table rendering

use bosswatch_core::{BossEntry, TimerState, format_remaining};
use chrono::NaiveDateTime;

use crate::region::Region;

const IDLE_COUNTDOWN: &str = "--:--:--";
const EXPIRED_COUNTDOWN: &str = "0:00:00";
const EDIT_LABEL: &str = "edit";

pub fn selection_mark(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

/// Countdown column text for an entry
pub fn countdown_text(entry: &BossEntry, now: NaiveDateTime) -> String {
    match (entry.state(now), entry.countdown(now)) {
        (TimerState::Running, Some(delta)) => format_remaining(delta),
        (TimerState::Expired, _) => EXPIRED_COUNTDOWN.to_string(),
        _ => IDLE_COUNTDOWN.to_string(),
    }
}

fn cell(entry: &BossEntry, region: Region, now: NaiveDateTime) -> String {
    match region {
        Region::Selection => selection_mark(entry.is_selected()).to_string(),
        Region::MapName => entry.map().to_string(),
        Region::Level => entry.level().to_string(),
        Region::Interval => entry.refresh_interval().to_string(),
        Region::Countdown => countdown_text(entry, now),
        Region::EditAction => EDIT_LABEL.to_string(),
    }
}

/// Render entries in the given order as a fixed-width table.
pub fn render_table(entries: &[BossEntry], now: NaiveDateTime) -> String {
    if entries.is_empty() {
        return "No bosses tracked. Use `add <map> <level> <interval>`.".to_string();
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(entries.len() + 1);
    let mut header = vec!["ID".to_string()];
    header.extend(Region::ALL.iter().map(|r| r.heading().to_string()));
    rows.push(header);

    for entry in entries {
        let mut row = vec![entry.id().to_string()];
        row.extend(Region::ALL.iter().map(|r| cell(entry, *r, now)));
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = *width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
        if i == 0 {
            let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }
    out.push_str(&format!("\nTotal: {} bosses", entries.len()));
    out
}
