use jiff::{Timestamp, Zoned, tz};

/// Current time in the browser's timezone.
pub fn now_local() -> Zoned {
    Timestamp::now().to_zoned(tz::TimeZone::system())
}

/// Short day label used in payment history, e.g. `Nov 2`.
pub fn short_date(zoned: &Zoned) -> String {
    zoned.strftime("%b %-d").to_string()
}

/// Clock label used in chat, e.g. `09:05`.
pub fn clock_time(zoned: &Zoned) -> String {
    zoned.strftime("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Zoned {
        // 2024-11-02 09:05:00 UTC
        Timestamp::from_second(1_730_538_300)
            .unwrap()
            .to_zoned(tz::TimeZone::UTC)
    }

    #[test]
    fn short_date_drops_padding() {
        assert_eq!(short_date(&sample()), "Nov 2");
    }

    #[test]
    fn clock_time_is_zero_padded() {
        assert_eq!(clock_time(&sample()), "09:05");
    }
}
