//! Render availability results as text lines or JSON.

use std::io::{self, Write};

use crate::error::Result;
use crate::merger::MergedRange;
use crate::planner::DayAvailability;

pub const REPORT_TITLE: &str = "Availability";
pub const REPORT_RULE: &str = "-----------------------";

/// `YYYY-MM-DD HH:MM - HH:MM`, dated by the range's start.
pub fn format_range(range: &MergedRange) -> String {
    format!(
        "{} {} - {}",
        range.start.format("%F"),
        range.start.format("%H:%M"),
        range.end.format("%H:%M")
    )
}

/// One line per range, then a blank separator line.
pub fn write_day<W: Write>(writer: &mut W, day: &DayAvailability) -> io::Result<()> {
    for range in &day.ranges {
        writeln!(writer, "{}", format_range(range))?;
    }
    writeln!(writer)
}

/// Title, rule, and every day's lines.
pub fn write_text_report<W: Write>(writer: &mut W, days: &[DayAvailability]) -> io::Result<()> {
    writeln!(writer, "{REPORT_TITLE}")?;
    writeln!(writer, "{REPORT_RULE}")?;
    for day in days {
        write_day(writer, day)?;
    }
    Ok(())
}

/// Pretty-printed JSON array of `{ date, ranges: [{ start, end }] }`.
pub fn write_json_report<W: Write>(writer: &mut W, days: &[DayAvailability]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, days)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}
