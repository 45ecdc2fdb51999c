//! Display formatting for experience periods and skill levels.

use chrono::{Datelike, NaiveDate};

use crate::i18n::Locale;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Short month and year, e.g. `Jan 2021`, `jan. de 2021`, `ene 2021`.
pub fn format_month_year(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::En => format!("{} {}", MONTHS_EN[month], date.year()),
        Locale::PtBr => format!("{}. de {}", MONTHS_PT[month], date.year()),
        Locale::Es => format!("{} {}", MONTHS_ES[month], date.year()),
    }
}

/// `"<start> - <end or current label>"` in the given locale.
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>, locale: Locale) -> String {
    let start = format_month_year(start, locale);
    let end = match end {
        Some(end) => format_month_year(end, locale),
        None => locale.translations().experience.current.to_string(),
    };
    format!("{start} - {end}")
}

/// Same as [`format_period`] but takes a raw locale code.
pub fn format_period_for_code(start: NaiveDate, end: Option<NaiveDate>, code: &str) -> String {
    format_period(start, end, Locale::for_display(code))
}

/// Bar width for a skill level: `level / 5 * 100`, except levels 3 and 4
/// which are boosted to 65 and 80. Out-of-range levels are not clamped.
pub fn skill_percentage(level: u8) -> u16 {
    match level {
        3 => 65,
        4 => 80,
        other => u16::from(other) * 100 / 5,
    }
}

/// Splits a description into bullet sentences on `.` followed by whitespace.
pub fn description_sentences(description: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = description.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' && chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            push_sentence(&mut sentences, &mut current);
        } else {
            current.push(c);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Whole months between `start` and `end` (or `today` when still running).
pub fn duration_months(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let end = end.unwrap_or(today);
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}
