use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ColumnSource;

const UNFORMATTED_PRECISION: usize = 4;

/// One `display name: formatted value` line of a tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

/// Tooltip payload of one row: plotted value, then target, then second target.
pub type Tooltip = SmallVec<[TooltipItem; 3]>;

/// Host number formatting collaborator.
pub trait ValueFormatter {
    fn format_value(&self, value: f64, format: Option<&str>) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64, Option<&str>) -> String,
{
    fn format_value(&self, value: f64, format: Option<&str>) -> String {
        self(value, format)
    }
}

/// Formatter understanding the common numeric format strings
/// (`0`, `0.00`, `#,0.0`, `0%`, with literal prefix/suffix such as `$#,0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValueFormatter;

impl ValueFormatter for DefaultValueFormatter {
    fn format_value(&self, value: f64, format: Option<&str>) -> String {
        if !value.is_finite() {
            return String::new();
        }
        match format.and_then(NumberPattern::parse) {
            Some(pattern) => pattern.apply(value),
            None => trim_decimal(format!("{value:.UNFORMATTED_PRECISION$}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NumberPattern {
    prefix: String,
    suffix: String,
    decimals: usize,
    grouping: bool,
    percent: bool,
}

impl NumberPattern {
    /// Returns `None` when the format has no `0`/`#` digit placeholder.
    fn parse(format: &str) -> Option<Self> {
        let is_digit_slot = |ch: char| matches!(ch, '0' | '#' | ',' | '.');
        let body_start = format.find(is_digit_slot).unwrap_or(format.len());
        let body_end = format
            .rfind(is_digit_slot)
            .map_or(body_start, |index| index + 1);
        let body = &format[body_start..body_end.max(body_start)];
        if !body.contains(['0', '#']) {
            return None;
        }

        let decimals = body
            .split_once('.')
            .map_or(0, |(_, fraction)| {
                fraction.chars().filter(|ch| matches!(ch, '0' | '#')).count()
            });

        Some(Self {
            prefix: format[..body_start].to_owned(),
            suffix: format[body_end.max(body_start)..].to_owned(),
            decimals,
            grouping: body.contains(','),
            percent: format.contains('%'),
        })
    }

    fn apply(&self, value: f64) -> String {
        let scaled = if self.percent { value * 100.0 } else { value };
        let decimals = self.decimals;
        let mut text = strip_negative_zero(format!("{scaled:.decimals$}"));
        if self.grouping {
            text = group_thousands(&text);
        }
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    strip_negative_zero(text)
}

/// Drops the sign of a value that rounded to zero (`-0`, `-0.00`).
fn strip_negative_zero(mut text: String) -> String {
    if text.starts_with('-') && text[1..].chars().all(|ch| matches!(ch, '0' | '.')) {
        text.remove(0);
    }
    text
}

pub(super) fn tooltip_item(
    source: &ColumnSource,
    value: f64,
    formatter: &dyn ValueFormatter,
) -> TooltipItem {
    TooltipItem {
        display_name: source.display_name.clone(),
        value: formatter.format_value(value, source.format.as_deref()),
    }
}
