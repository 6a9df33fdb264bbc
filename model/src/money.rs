use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount in Rwandan francs, e.g. `RWF 5,000`.
///
/// The franc has no minor unit in practice, so amounts are rounded to whole
/// francs.
pub fn format_rwf(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .abs()
        .trunc()
        .to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount.is_sign_negative() && !grouped.chars().all(|c| c == '0') {
        format!("-RWF {grouped}")
    } else {
        format!("RWF {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rwf(dec!(5000)), "RWF 5,000");
        assert_eq!(format_rwf(dec!(125000)), "RWF 125,000");
        assert_eq!(format_rwf(dec!(1234567)), "RWF 1,234,567");
        assert_eq!(format_rwf(dec!(999)), "RWF 999");
        assert_eq!(format_rwf(dec!(0)), "RWF 0");
    }

    #[test]
    fn rounds_to_whole_francs() {
        assert_eq!(format_rwf(dec!(4999.5)), "RWF 5,000");
        assert_eq!(format_rwf(dec!(-2500)), "-RWF 2,500");
    }
}
