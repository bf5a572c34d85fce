// SPDX-License-Identifier: PMPL-1.0-or-later

//! Number formatting for money figures.

use crate::i18n::Lang;

const NBSP: char = '\u{a0}';

/// Format a EUR amount with zero decimals in the conventions of `lang`.
///
/// English: `€1,500,000`. Portuguese: `1 500 000 €` with non-breaking
/// spaces, and no grouping below five digits (`9500 €`). Non-finite input
/// yields `None` so callers fall back to their placeholder.
pub fn fmt_eur(value: f64, lang: Lang) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = (rounded.abs() as u64).to_string();

    let formatted = match lang {
        Lang::En => format!("{}€{}", sign, group_digits(&digits, ',')),
        Lang::Pt => {
            let body = if digits.len() > 4 {
                group_digits(&digits, NBSP)
            } else {
                digits
            };
            format!("{}{}{}€", sign, body, NBSP)
        }
    };
    Some(formatted)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
