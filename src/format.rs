// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for display formatting.

/// Placeholder for recent-play values when the user has no recent play.
pub const NONE_PLACEHOLDER: &str = "None";

/// Placeholder for optional numbers the API may omit.
pub const NA_PLACEHOLDER: &str = "N/A";

/// Format an integer with `,` thousands separators.
pub fn with_comma(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a leaderboard rank as `#n`, or `#-` when unranked.
pub fn rank(rank: Option<u32>) -> String {
    match rank {
        Some(n) => format!("#{}", n),
        None => "#-".to_string(),
    }
}

/// Format a float without a trailing `.0` for whole numbers.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
