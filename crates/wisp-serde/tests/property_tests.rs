//! Property tests for the tagged rich-value encoding.

use proptest::prelude::*;
use wisp_serde::rich::{Rich, decode_rich, encode_rich};

proptest! {
    /// Arbitrary byte payloads survive the base64 round trip.
    #[test]
    fn prop_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode_rich(&Rich::Bytes(bytes.clone()));
        prop_assert_eq!(decode_rich(&encoded), Ok(Rich::Bytes(bytes)));
    }

    /// Any non-degenerate range round-trips exactly.
    #[test]
    fn prop_range_round_trip(start: i64, stop: i64, step in prop_oneof![i64::MIN..0, 1..=i64::MAX]) {
        let range = Rich::Range { start, stop, step };
        prop_assert_eq!(decode_rich(&encode_rich(&range)), Ok(range));
    }

    /// Decimal strings are carried verbatim.
    #[test]
    fn prop_decimal_round_trip(digits in "-?[0-9]{1,20}(\\.[0-9]{1,20})?") {
        let decimal = Rich::Decimal(digits);
        prop_assert_eq!(decode_rich(&encode_rich(&decimal)), Ok(decimal.clone()));
    }

    /// Durations round-trip as long as nanos stay subsecond.
    #[test]
    fn prop_duration_round_trip(secs in -1_000_000i64..1_000_000, nanos in 0i64..1_000_000_000) {
        let nanos = if secs < 0 { -nanos } else { nanos };
        let delta = chrono::TimeDelta::try_seconds(secs).unwrap()
            + chrono::TimeDelta::nanoseconds(nanos);
        let duration = Rich::Duration(delta);
        prop_assert_eq!(decode_rich(&encode_rich(&duration)), Ok(duration.clone()));
    }
}
