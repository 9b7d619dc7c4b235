use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::label_format::{TickLabelFormat, format_tick_label};
use crate::core::primitives::seconds_between;

/// Every axis shows at least this many ticks.
pub const MIN_TICK_COUNT: usize = 2;
/// Upper bound on requested tick counts.
pub const MAX_TICK_COUNT: usize = 1_000;

/// A labeled reference mark at a data-space value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Calendar date the tick stands for on date axes.
    pub date: Option<DateTime<Utc>>,
}

/// Calendar unit date ticks are aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSpan {
    Second,
    Minute,
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl DateSpan {
    /// Nominal length in seconds, used only to pick a step multiple.
    #[must_use]
    pub fn nominal_seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Week => 604_800.0,
            Self::Month => 2_629_746.0,
            Self::Year => 31_556_952.0,
        }
    }

    /// Start of the span containing `time`. Weeks start on Monday.
    #[must_use]
    pub fn floor(self, time: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = |t: DateTime<Utc>| {
            Utc.with_ymd_and_hms(t.year(), t.month(), t.day(), 0, 0, 0)
                .single()
                .unwrap_or(t)
        };
        match self {
            Self::Second => time.with_nanosecond(0).unwrap_or(time),
            Self::Minute => Utc
                .with_ymd_and_hms(
                    time.year(),
                    time.month(),
                    time.day(),
                    time.hour(),
                    time.minute(),
                    0,
                )
                .single()
                .unwrap_or(time),
            Self::Hour => Utc
                .with_ymd_and_hms(time.year(), time.month(), time.day(), time.hour(), 0, 0)
                .single()
                .unwrap_or(time),
            Self::Day => midnight(time),
            Self::Week => {
                let back = i64::from(time.weekday().num_days_from_monday());
                midnight(time) - Duration::days(back)
            }
            Self::Month => Utc
                .with_ymd_and_hms(time.year(), time.month(), 1, 0, 0, 0)
                .single()
                .unwrap_or(time),
            Self::Year => Utc
                .with_ymd_and_hms(time.year(), 1, 1, 0, 0, 0)
                .single()
                .unwrap_or(time),
        }
    }

    /// Advances `time` by `count` whole spans.
    #[must_use]
    pub fn advance(self, time: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
        let count_i64 = i64::from(count);
        match self {
            Self::Second => time.checked_add_signed(Duration::seconds(count_i64)),
            Self::Minute => time.checked_add_signed(Duration::minutes(count_i64)),
            Self::Hour => time.checked_add_signed(Duration::hours(count_i64)),
            Self::Day => time.checked_add_signed(Duration::days(count_i64)),
            Self::Week => time.checked_add_signed(Duration::weeks(count_i64)),
            Self::Month => time.checked_add_months(Months::new(count)),
            Self::Year => time.checked_add_months(Months::new(count.saturating_mul(12))),
        }
    }
}

/// Number of y ticks for a plot of `plot_height` pixels aiming at one tick
/// every `vertical_tick_spacing` pixels.
#[must_use]
pub fn y_tick_count(plot_height: f64, vertical_tick_spacing: f64) -> usize {
    if !plot_height.is_finite()
        || plot_height <= 0.0
        || !vertical_tick_spacing.is_finite()
        || vertical_tick_spacing <= 0.0
    {
        return MIN_TICK_COUNT;
    }
    let raw = (plot_height / vertical_tick_spacing).floor();
    if raw >= MAX_TICK_COUNT as f64 {
        return MAX_TICK_COUNT;
    }
    (raw as usize).max(MIN_TICK_COUNT)
}

/// Round-number tick values (1, 2 or 5 times a power of ten) inside the domain.
///
/// Always returns at least [`MIN_TICK_COUNT`] ascending values; when no
/// round step fits, the domain endpoints are returned.
#[must_use]
pub fn nice_tick_values(domain: (f64, f64), approx_count: usize) -> Vec<f64> {
    let (start, stop) = if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    };
    let endpoints = vec![start, stop];
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return endpoints;
    }

    let count = approx_count.clamp(1, MAX_TICK_COUNT) as f64;
    let raw_step = (stop - start) / count;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers divide by an integer increment to avoid drift such as 0.30000000000000004.
    let (first, last, to_value): (f64, f64, Box<dyn Fn(i64) -> f64>) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        ((start * inc).ceil(), (stop * inc).floor(), Box::new(move |i: i64| i as f64 / inc))
    } else {
        let step = 10f64.powf(power) * factor;
        ((start / step).ceil(), (stop / step).floor(), Box::new(move |i: i64| i as f64 * step))
    };

    let max_steps = (MAX_TICK_COUNT * 10) as f64;
    if !first.is_finite()
        || !last.is_finite()
        || last - first + 1.0 < MIN_TICK_COUNT as f64
        || last - first > max_steps
    {
        return endpoints;
    }
    (first as i64..=last as i64).map(to_value).collect()
}

/// Numeric ticks for `scale`, labeled with `format`.
#[must_use]
pub fn numeric_ticks(
    scale: LinearScale,
    approx_count: usize,
    format: &TickLabelFormat,
) -> Vec<Tick> {
    nice_tick_values(scale.domain(), approx_count)
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_tick_label(value, None, format),
            date: None,
        })
        .collect()
}

/// Calendar-aligned ticks between `first` and `last`.
///
/// Ticks sit on span boundaries, stepping by a whole number of spans so at
/// most `max(approx_count, 2)` ticks are produced. Tick values are seconds
/// from `first`. When fewer than [`MIN_TICK_COUNT`] boundaries fit, `first`
/// and `last` themselves are used.
#[must_use]
pub fn date_ticks(
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    span: DateSpan,
    approx_count: usize,
    format: &TickLabelFormat,
) -> Vec<Tick> {
    let (first, last) = if first <= last { (first, last) } else { (last, first) };
    let approx_count = approx_count.clamp(1, MAX_TICK_COUNT);
    let make_tick = |date: DateTime<Utc>| {
        let value = seconds_between(first, date);
        Tick {
            value,
            label: format_tick_label(value, Some(date), format),
            date: Some(date),
        }
    };

    let total_spans = seconds_between(first, last) / span.nominal_seconds();
    let multiple = (total_spans / approx_count as f64)
        .ceil()
        .clamp(1.0, f64::from(u32::MAX)) as u32;

    let mut cursor = span.floor(first);
    if cursor < first {
        cursor = span.advance(cursor, 1).unwrap_or(last);
    }

    let limit = approx_count.max(MIN_TICK_COUNT);
    let mut ticks = Vec::with_capacity(limit);
    while cursor <= last && ticks.len() < limit {
        ticks.push(make_tick(cursor));
        match span.advance(cursor, multiple) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    if ticks.len() < MIN_TICK_COUNT {
        return vec![make_tick(first), make_tick(last)];
    }
    ticks
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::DateSpan;

    #[test]
    fn week_floor_lands_on_monday_midnight() {
        // 2024-03-07 is a Thursday.
        let time = Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap();
        let floored = DateSpan::Week.floor(time);
        assert_eq!(floored, Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_advance_keeps_first_of_month() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let next = DateSpan::Month.advance(time, 2).expect("advance");
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn year_floor_truncates_to_january_first() {
        let time = Utc.with_ymd_and_hms(2023, 8, 19, 4, 5, 6).unwrap();
        assert_eq!(
            DateSpan::Year.floor(time),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
