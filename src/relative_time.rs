//! Human-readable elapsed time in Brazilian Portuguese ("há 3 dias", "em uma hora").

use chrono::{DateTime, Datelike, Months, Utc};

// Only used when a calendar anchor falls outside chrono's range
const SECONDS_PER_MONTH: f64 = 30.436875 * 86_400.0;

/// Render `then` relative to `now`.
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let delta_ms = (then - now).num_milliseconds();
    let seconds = delta_ms.unsigned_abs() as f64 / 1000.0;
    let months = month_diff(now, then)
        .unwrap_or(seconds / SECONDS_PER_MONTH)
        .abs();
    let phrase = duration_phrase(seconds, months);

    if delta_ms > 0 {
        format!("em {}", phrase)
    } else {
        format!("há {}", phrase)
    }
}

/// Check-in column text: relative time, or a fixed label when absent
pub fn check_in_label(now: DateTime<Utc>, checked_in_at: Option<DateTime<Utc>>) -> String {
    match checked_in_at {
        Some(at) => relative_time(now, at),
        None => NOT_CHECKED_IN.to_string(),
    }
}

pub const NOT_CHECKED_IN: &str = "Não fez check-in";

fn add_months(at: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        at.checked_add_months(step)
    } else {
        at.checked_sub_months(step)
    }
}

/// Signed calendar months from `from` to `to`: whole months plus the elapsed
/// fraction of the month that follows the anchor.
fn month_diff(from: DateTime<Utc>, to: DateTime<Utc>) -> Option<f64> {
    let whole = i64::from(to.year() - from.year()) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    let anchor = add_months(from, whole)?;
    let step = if to < anchor { -1 } else { 1 };
    let neighbour = add_months(from, whole + step)?;

    let span = (neighbour - anchor).num_milliseconds().abs() as f64;
    if span == 0.0 {
        return Some(whole as f64);
    }
    Some(whole as f64 + (to - anchor).num_milliseconds() as f64 / span)
}

// Each unit is rounded before comparing against its threshold.
fn duration_phrase(seconds: f64, months: f64) -> String {
    let secs = seconds.round();
    if secs <= 44.0 {
        return "poucos segundos".to_string();
    }
    if secs <= 89.0 {
        return "um minuto".to_string();
    }

    let minutes = (seconds / 60.0).round();
    if minutes <= 44.0 {
        return format!("{} minutos", minutes as u64);
    }
    if minutes <= 89.0 {
        return "uma hora".to_string();
    }

    let hours = (seconds / 3_600.0).round();
    if hours <= 21.0 {
        return format!("{} horas", hours as u64);
    }
    if hours <= 35.0 {
        return "um dia".to_string();
    }

    let days = (seconds / 86_400.0).round();
    if days <= 25.0 {
        return format!("{} dias", days as u64);
    }
    if days <= 45.0 {
        return "um mês".to_string();
    }

    let months = months.round();
    if months <= 10.0 {
        return format!("{} meses", months as u64);
    }
    if months <= 17.0 {
        return "um ano".to_string();
    }

    let years = (months / 12.0).round();
    format!("{} anos", years as u64)
}
