//! Indonesian (id-ID) date and currency formatting.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Western Indonesia Time (WIB), UTC+07:00.
const WIB_OFFSET_SECONDS: i32 = 7 * 3600;

/// Formatting rules for the id-ID locale in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    offset: FixedOffset,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(WIB_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix()),
        }
    }
}

impl Locale {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from an offset in minutes east of UTC. Out-of-range offsets
    /// fall back to the default (WIB) with a warning.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        match minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
        {
            Some(offset) => Self { offset },
            None => {
                tracing::warn!(minutes, "utc offset out of range, using WIB");
                Self::default()
            }
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Long-form date, e.g. `18 Oktober 2026`.
    pub fn format_date(&self, at: &DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);
        format!(
            "{} {} {}",
            local.day(),
            MONTHS[local.month0() as usize],
            local.year()
        )
    }

    /// Rupiah amount, e.g. `Rp 1.250.000` or `Rp 9.999,5`.
    pub fn format_price(&self, amount: f64) -> String {
        format!("Rp {}", format_number(amount))
    }
}

/// id-ID number grouping: `.` between thousands, `,` before at most three
/// fraction digits.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let scaled = (value.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    if value < 0.0 && scaled > 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        out.push(',');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}
