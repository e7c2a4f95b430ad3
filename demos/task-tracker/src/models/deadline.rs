// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Conversions between stored deadlines and the text the user sees or types.
//!
//! Deadlines are stored in UTC and shown in the local time zone. Every
//! function has an `_in` variant taking the zone explicitly.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

/// Layout of the deadline text field, e.g. `2024-01-01 10:00`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Placeholder shown in the empty deadline text field.
pub const INPUT_PLACEHOLDER: &str = "YYYY-MM-DD HH:MM";

/// Formats a deadline for a task row, e.g. `Jan 1, 10:00 a.m.`
pub fn format_deadline(deadline: &DateTime<Utc>) -> String {
    format_deadline_in(deadline, &Local)
}

pub fn format_deadline_in<Tz: TimeZone>(deadline: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = deadline.with_timezone(tz);
    let meridiem = if local.hour() < 12 { "a.m." } else { "p.m." };

    capitalize_first(&format!(
        "{} {}, {} {}",
        local.format("%b"),
        local.day(),
        local.format("%I:%M"),
        meridiem
    ))
}

/// Parses the deadline text field. Returns `None` for anything that is not a
/// complete date and time.
pub fn parse_deadline_input(input: &str) -> Option<DateTime<Utc>> {
    parse_deadline_input_in(input, &Local)
}

pub fn parse_deadline_input_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), INPUT_FORMAT).ok()?;
    // ambiguous local times resolve to the earlier instant, skipped ones to None
    tz.from_local_datetime(&naive).earliest().map(|deadline| deadline.with_timezone(&Utc))
}

pub fn deadline_input_text(deadline: &DateTime<Utc>) -> String {
    deadline_input_text_in(deadline, &Local)
}

pub fn deadline_input_text_in<Tz: TimeZone>(deadline: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    deadline.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// Returns the text the deadline field must be reset to, or `None` when the
/// current text already agrees with the draft deadline.
///
/// Half-typed input parses to `None` and therefore agrees with an unset
/// draft, so it is left alone.
pub fn deadline_input_update(input: &str, draft: Option<&DateTime<Utc>>) -> Option<String> {
    deadline_input_update_in(input, draft, &Local)
}

pub fn deadline_input_update_in<Tz: TimeZone>(
    input: &str,
    draft: Option<&DateTime<Utc>>,
    tz: &Tz,
) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    if parse_deadline_input_in(input, tz).as_ref() == draft {
        return None;
    }

    Some(draft.map(|deadline| deadline_input_text_in(deadline, tz)).unwrap_or_default())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
