//! Best-effort extraction of work shifts from pasted schedule emails.
//!
//! Line-oriented single pass: a `MON:`-style header sets the current-day
//! cursor, time-range tokens like `08:30pm-02:00am` become shifts, and the
//! literal `OFF` marks a day without a shift. Lines matching nothing are
//! skipped, so the extractor never fails; empty input yields an empty list.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::day::Day;
use crate::time::{Meridiem, TimeOfDay};

/// One shift pulled out of pasted text. Transient: it only becomes a
/// schedule entry if the user accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedShift {
    pub day: Day,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// The time-range token exactly as it appeared in the text.
    pub raw_range: String,
}

/// `MON:` .. `SUN:` at the start of a line.
static DAY_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(mon|tue|wed|thu|fri|sat|sun)\s*:").unwrap());

/// `H[:MM] am|pm - H[:MM] am|pm`, hyphen or en-dash, minutes optional.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})(?::(\d{2}))?\s*(am|pm)\s*[-\u{2013}]\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)")
        .unwrap()
});

/// A weekday name or abbreviation mentioned mid-line.
static DAY_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|wed|thu|fri|sat|sun)\b",
    )
    .unwrap()
});

static OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bOFF\b").unwrap());

/// Extract shift records from free-form text.
///
/// Day resolution per line: a day mentioned on the line itself wins, then
/// the current-day cursor from the last `MON:`-style header, then Monday as
/// the documented last resort for text with no day context at all.
pub fn extract_shifts(text: &str) -> Vec<ExtractedShift> {
    let lines: Vec<&str> = text.lines().collect();
    let mut shifts = Vec::new();
    let mut current_day: Option<Day> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(day) = header_day(line) {
            current_day = Some(day);

            if OFF.is_match(line) {
                i += 1;
                continue;
            }
            // Range on the header line itself, otherwise on the line below.
            // A consumed follow-up line is not re-scanned.
            if push_ranges(line, day, &mut shifts) {
                i += 1;
                continue;
            }
            // A day header below starts its own day; never consume it.
            if let Some(next) = lines.get(i + 1).filter(|l| header_day(l).is_none()) {
                if OFF.is_match(next) {
                    i += 2;
                    continue;
                }
                if push_ranges(next, day, &mut shifts) {
                    i += 2;
                    continue;
                }
            }
            i += 1;
            continue;
        }

        if !OFF.is_match(line) {
            let day = mentioned_day(line)
                .or(current_day)
                .unwrap_or(Day::Monday);
            push_ranges(line, day, &mut shifts);
        }
        i += 1;
    }

    shifts
}

fn header_day(line: &str) -> Option<Day> {
    let caps = DAY_HEADER.captures(line)?;
    caps[1].parse().ok()
}

fn mentioned_day(line: &str) -> Option<Day> {
    let found = DAY_MENTION.find(line)?;
    found.as_str().parse().ok()
}

/// Append a shift for every time-range token on the line. Returns whether
/// any was found.
fn push_ranges(line: &str, day: Day, shifts: &mut Vec<ExtractedShift>) -> bool {
    let mut found = false;
    for caps in TIME_RANGE.captures_iter(line) {
        let (Some(start), Some(end)) = (endpoint(&caps, 1), endpoint(&caps, 4)) else {
            continue;
        };
        shifts.push(ExtractedShift {
            day,
            start,
            end,
            raw_range: caps[0].to_string(),
        });
        found = true;
    }
    found
}

/// Normalize one 12-hour endpoint starting at the given capture group
/// (hour, optional minutes, meridiem).
fn endpoint(caps: &Captures, group: usize) -> Option<TimeOfDay> {
    let hour: u8 = caps[group].parse().ok()?;
    let minute: u8 = caps
        .get(group + 1)
        .map_or(Ok(0), |m| m.as_str().parse())
        .ok()?;
    let meridiem = if caps[group + 2].eq_ignore_ascii_case("pm") {
        Meridiem::Pm
    } else {
        Meridiem::Am
    };
    TimeOfDay::from_12h(hour, minute, meridiem).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_three_day_sample_with_off() {
        let text = "MON:\n\
                    07/07     08:30pm-02:00am\n\
                    TUE:\n\
                    07/08     03:30pm-09:15pm\n\
                    WED:\n\
                    07/09     OFF\n";

        let shifts = extract_shifts(text);
        assert_eq!(shifts.len(), 2);

        assert_eq!(shifts[0].day, Day::Monday);
        assert_eq!(shifts[0].start, time("20:30"));
        assert_eq!(shifts[0].end, time("02:00"));

        assert_eq!(shifts[1].day, Day::Tuesday);
        assert_eq!(shifts[1].start, time("15:30"));
        assert_eq!(shifts[1].end, time("21:15"));
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(extract_shifts("").is_empty());
    }

    #[test]
    fn test_range_on_the_header_line_itself() {
        let shifts = extract_shifts("FRI: 9am-5pm");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Friday);
        assert_eq!(shifts[0].start, time("09:00"));
        assert_eq!(shifts[0].end, time("17:00"));
    }

    #[test]
    fn test_day_mentioned_on_the_line_overrides_cursor() {
        let text = "MON:\n\
                    8:00am-4:00pm\n\
                    Saturday 10:00am-2:00pm\n";

        let shifts = extract_shifts(text);
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].day, Day::Monday);
        assert_eq!(shifts[1].day, Day::Saturday);
    }

    #[test]
    fn test_adjacent_headers_keep_their_own_days() {
        // An empty day directly above must not swallow the next header's
        // range or leave the cursor pointing at the wrong day.
        let shifts = extract_shifts("MON:\nTUE: 03:30pm-09:15pm\n");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Tuesday);

        let shifts = extract_shifts("MON:\nTUE:\n9am-5pm\n");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Tuesday);
    }

    #[test]
    fn test_no_day_context_defaults_to_monday() {
        let shifts = extract_shifts("shift: 10am-6pm");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Monday);
    }

    #[test]
    fn test_en_dash_separator() {
        let shifts = extract_shifts("TUE: 9:00am\u{2013}5:30pm");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start, time("09:00"));
        assert_eq!(shifts[0].end, time("17:30"));
    }

    #[test]
    fn test_off_on_header_line_emits_nothing_for_that_day() {
        let text = "WED: OFF\n\
                    THU:\n\
                    9am-5pm\n";

        let shifts = extract_shifts(text);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Thursday);
    }

    #[test]
    fn test_midnight_and_noon_normalization() {
        let shifts = extract_shifts("SAT: 12:15am-12:45pm");
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start, time("00:15"));
        assert_eq!(shifts[0].end, time("12:45"));
    }

    #[test]
    fn test_unparsable_lines_are_skipped() {
        let text = "Hi team,\n\
                    here is next week's rota:\n\
                    MON:\n\
                    covering for Sam\n\
                    TUE: 7am-3pm\n\
                    Thanks!\n";

        let shifts = extract_shifts(text);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].day, Day::Tuesday);
    }

    #[test]
    fn test_raw_range_preserves_source_text() {
        let shifts = extract_shifts("MON: 08:30pm-02:00am");
        assert_eq!(shifts[0].raw_range, "08:30pm-02:00am");
    }
}
