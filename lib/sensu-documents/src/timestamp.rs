use chrono::{DateTime, SecondsFormat, Utc};
use snafu::{OptionExt as _, ResultExt as _};

use crate::{OutOfRange, Parse, TimestampError};

/// Number of leading characters of a rendered epoch value that are treated as seconds.
///
/// Seconds since the Unix epoch stay at ten digits from September 2001 through November 2286.
pub const EPOCH_SECONDS_DIGITS: usize = 10;

/// Reduces an epoch value of unknown precision to its seconds-precision digits.
///
/// Producers do not declare whether they report seconds, milliseconds, or nanoseconds. Rather than guessing a unit
/// and dividing, the decimal rendering of the value is cut to its first [`EPOCH_SECONDS_DIGITS`] characters, which
/// discards any sub-second digits for values from the current epoch range. Shorter values are returned unchanged.
///
/// The cut is applied to the rendered string, so a leading minus sign counts as one of the characters. Values that
/// are already in seconds but fall outside the ten-digit range are cut as well; they come out wrong rather than being
/// rejected.
pub fn truncate_epoch_digits(epoch: i64) -> String {
    let mut digits = epoch.to_string();
    digits.truncate(EPOCH_SECONDS_DIGITS);
    digits
}

/// Formats epoch seconds, given as decimal digits, as an RFC 3339 timestamp.
///
/// The result is in UTC, with second precision and a `Z` suffix, such as `2019-03-30T12:20:45Z`.
///
/// # Errors
///
/// If `digits` is not a valid integer, or the value is outside the range of representable dates, an error is
/// returned.
pub fn format_epoch_seconds(digits: &str) -> Result<String, TimestampError> {
    let seconds = digits.parse::<i64>().context(Parse { digits })?;
    let datetime = DateTime::<Utc>::from_timestamp(seconds, 0).context(OutOfRange { seconds })?;

    Ok(datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Normalizes an epoch value of unknown precision to an RFC 3339 timestamp with second precision.
///
/// # Errors
///
/// If the truncated digits cannot be parsed or formatted, an error is returned. Neither happens for values produced
/// by [`truncate_epoch_digits`], but both are reported rather than assumed away.
pub fn normalize_timestamp(epoch: i64) -> Result<String, TimestampError> {
    format_epoch_seconds(&truncate_epoch_digits(epoch))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn seconds_are_formatted_directly() {
        assert_eq!(normalize_timestamp(1553948445).unwrap(), "2019-03-30T12:20:45Z");
        assert_eq!(normalize_timestamp(9999999999).unwrap(), "2286-11-20T17:46:39Z");
    }

    #[test]
    fn sub_second_digits_are_discarded() {
        // Milliseconds, microseconds, nanoseconds.
        assert_eq!(normalize_timestamp(1553948445123).unwrap(), "2019-03-30T12:20:45Z");
        assert_eq!(normalize_timestamp(1553948445123456).unwrap(), "2019-03-30T12:20:45Z");
        assert_eq!(normalize_timestamp(1553948445123456789).unwrap(), "2019-03-30T12:20:45Z");
    }

    #[test]
    fn short_and_non_positive_values_pass_through() {
        assert_eq!(truncate_epoch_digits(0), "0");
        assert_eq!(normalize_timestamp(0).unwrap(), "1970-01-01T00:00:00Z");
        assert_eq!(normalize_timestamp(-1).unwrap(), "1969-12-31T23:59:59Z");
        assert_eq!(normalize_timestamp(999999999).unwrap(), "2001-09-09T01:46:39Z");
    }

    #[test]
    fn minus_sign_counts_toward_digit_limit() {
        assert_eq!(truncate_epoch_digits(-1553948445123), "-155394844");
        assert_eq!(normalize_timestamp(-1553948445123).unwrap(), "1965-01-28T10:45:56Z");
        assert_eq!(truncate_epoch_digits(i64::MIN), "-922337203");
    }

    #[test]
    fn unparseable_digits() {
        let err = format_epoch_seconds("15539a8445").unwrap_err();
        assert!(matches!(err, TimestampError::Parse { ref digits, .. } if digits == "15539a8445"));

        let err = format_epoch_seconds("").unwrap_err();
        assert!(matches!(err, TimestampError::Parse { .. }));
    }

    #[test]
    fn out_of_range_seconds() {
        let err = format_epoch_seconds(&i64::MAX.to_string()).unwrap_err();
        assert!(matches!(err, TimestampError::OutOfRange { seconds } if seconds == i64::MAX));
    }

    proptest! {
        #[test]
        fn property_test_short_values_are_not_truncated(epoch in -999_999_999i64..=9_999_999_999i64) {
            let expected = DateTime::<Utc>::from_timestamp(epoch, 0)
                .unwrap()
                .to_rfc3339_opts(SecondsFormat::Secs, true);

            prop_assert_eq!(truncate_epoch_digits(epoch), epoch.to_string());
            prop_assert_eq!(normalize_timestamp(epoch).unwrap(), expected);
        }

        #[test]
        fn property_test_long_values_keep_leading_digits(epoch in 10_000_000_000i64..) {
            let rendered = epoch.to_string();
            let truncated = truncate_epoch_digits(epoch);

            prop_assert_eq!(truncated.len(), EPOCH_SECONDS_DIGITS);
            prop_assert!(rendered.starts_with(&truncated));
            prop_assert_eq!(normalize_timestamp(epoch).unwrap(), format_epoch_seconds(&truncated).unwrap());
        }

        #[test]
        fn property_test_normalization_never_fails(epoch in any::<i64>()) {
            prop_assert!(normalize_timestamp(epoch).is_ok());
        }
    }
}
