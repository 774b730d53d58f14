// src/format.rs

/// US dollars, no cents: `31750.0` → `$31,750`. Non-finite input shows as `$0`.
pub fn currency(n: f64) -> String {
    let n = if n.is_finite() { n.round() } else { 0.0 };
    let neg = n < 0.0;
    let digits = format!("{:.0}", n.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if neg { join!("-$", &grouped) } else { join!("$", &grouped) }
}

/// Deduction line: `-$500`. Zero shows as `-$0`.
pub fn deduction(n: f64) -> String {
    join!("-", &currency(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(999.0), "$999");
        assert_eq!(currency(1000.0), "$1,000");
        assert_eq!(currency(31_750.0), "$31,750");
        assert_eq!(currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(currency(1499.5), "$1,500");
        assert_eq!(currency(2.4), "$2");
        assert_eq!(currency(-2.5), "-$3");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(currency(1e20), "$100,000,000,000,000,000,000");
        assert_eq!(currency(-1e19), "-$10,000,000,000,000,000,000");
    }

    #[test]
    fn nan_shows_zero() {
        assert_eq!(currency(f64::NAN), "$0");
        assert_eq!(currency(f64::INFINITY), "$0");
    }
}
