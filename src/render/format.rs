//! Locale-aware number formatting
//!
//! Amounts are rendered in whole currency units with en-IN digit grouping:
//! the last three digits form one group, every group before that has two
//! digits (1234567 -> "12,34,567").

/// Currency prefix shown before every formatted amount.
pub const CURRENCY_PREFIX: &str = "Ksh";

/// Formats an amount as a currency string, e.g. `Ksh 1,50,000`.
///
/// The amount is rounded to whole units. Negative amounts keep the sign
/// inside the number group: `Ksh -500`.
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = group_indian(rounded.abs());
    if rounded < 0.0 {
        format!("{} -{}", CURRENCY_PREFIX, digits)
    } else {
        format!("{} {}", CURRENCY_PREFIX, digits)
    }
}

/// Formats an amount with an explicit leading `+` when non-negative.
///
/// Used for deltas such as the decision simulator's monthly impact.
pub fn signed_currency(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{}", currency(amount))
    } else {
        currency(amount)
    }
}

/// Maps a wire category key to its display label (`dining_out` -> `dining out`).
pub fn category_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Renders a number without a trailing `.0` for whole values.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn group_indian(amount: f64) -> String {
    let digits = format!("{}", amount as u64);
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
