//! Text rendering of a month view.
//!
//! Stands in for the web UI: a weekday header row, one block per week, each
//! day showing its number (parenthesized for padding days borrowed from
//! adjacent months) and the names of its events.

use roomme_core::calendar::{DayCell, MonthView, DAYS_OF_WEEK};

/// Renders the view as a fixed-width text grid.
pub fn render_month(view: &MonthView, cell_width: usize) -> String {
    let row_width = (cell_width + 1) * 7 + 1;
    let rule = "-".repeat(row_width);
    let mut out = String::new();

    out.push_str(&center(&view.title, row_width));
    out.push('\n');

    out.push('|');
    for label in DAYS_OF_WEEK {
        out.push_str(&pad(label, cell_width));
        out.push('|');
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for week in &view.weeks {
        out.push('|');
        for cell in week {
            let number = if cell.day.is_current_month {
                cell.day.day_of_month.to_string()
            } else {
                format!("({})", cell.day.day_of_month)
            };
            out.push_str(&pad(&number, cell_width));
            out.push('|');
        }
        out.push('\n');

        // One extra line per event slot used by the busiest day this week.
        let slots = week.iter().map(DayCell::event_count).max().unwrap_or(0);
        for slot in 0..slots {
            out.push('|');
            for cell in week {
                let name = cell
                    .events
                    .get(slot)
                    .map(|event| event.name.as_str())
                    .unwrap_or("");
                out.push_str(&pad(name, cell_width));
                out.push('|');
            }
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
    }

    out
}

/// Left-aligns `text` into `width` columns, truncating if necessary.
fn pad(text: &str, width: usize) -> String {
    let mut padded: String = text.chars().take(width).collect();
    while padded.chars().count() < width {
        padded.push(' ');
    }
    padded
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(left), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomme_core::calendar::{build_month_view, generate_seed_events};

    #[test]
    fn test_render_month() {
        let events = generate_seed_events(2024, 5, 1);
        let outcome = build_month_view(2024, 5, &events).unwrap();

        let text = render_month(&outcome.view, 18);

        assert!(text.contains("June 2024"));
        assert!(text.contains("Sun"));
        assert!(text.contains("Sat"));
        // June 2024 leads with padding days from May.
        assert!(text.contains("(26)"));
        assert!(text.contains("Team standup"));
        assert!(text.contains("Gym session"));
    }

    #[test]
    fn test_render_rows_have_uniform_width() {
        let outcome = build_month_view(2024, 5, &[]).unwrap();
        let text = render_month(&outcome.view, 12);

        let width = (12 + 1) * 7 + 1;
        for line in text.lines().skip(1) {
            assert_eq!(line.chars().count(), width, "line: {line:?}");
        }
    }

    #[test]
    fn test_pad_truncates_long_names() {
        assert_eq!(pad("A very long event name", 8), "A very l");
        assert_eq!(pad("ok", 4), "ok  ");
    }
}
