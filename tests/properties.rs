// ============================================================================
// Property Tests
// Round-trip, canonical-form and robustness properties
// ============================================================================

use chinese_numerals::prelude::*;
use proptest::prelude::*;
use quickcheck::quickcheck;
use rust_decimal::Decimal;

const LIMIT: i64 = 100_000_000;

proptest! {
    #[test]
    fn round_trip_traditional(n in -LIMIT..=LIMIT) {
        let text = to_words(n).unwrap();
        prop_assert_eq!(from_words(&text).unwrap(), Decimal::from(n));
    }

    #[test]
    fn round_trip_simplified(n in -LIMIT..=LIMIT) {
        let options = ConversionOptions::simplified();
        let text = to_words_with(n, &options).unwrap();
        prop_assert_eq!(
            from_words_with(&text, Vocabulary::simplified()).unwrap(),
            Decimal::from(n)
        );
    }

    #[test]
    fn round_trip_cheque(n in 0..=LIMIT) {
        let options = ConversionOptions::cheque();
        let text = to_words_with(n, &options).unwrap();
        prop_assert_eq!(from_words(&text).unwrap(), Decimal::from(n));
    }

    #[test]
    fn round_trip_large_magnitudes(n in 0..=i64::MAX) {
        let text = to_words(n).unwrap();
        prop_assert_eq!(from_words(&text).unwrap(), Decimal::from(n));
    }

    #[test]
    fn round_trip_fractions(integer in -9_999_i64..=9_999, fraction in 1_u32..=9_999) {
        let value = Decimal::from(integer) + Decimal::new(i64::from(fraction), 4);
        let text = to_words(value).unwrap();
        prop_assert_eq!(from_words(&text).unwrap(), value);
    }

    #[test]
    fn decoding_never_panics(text in "[零一二三四五六七八九〇十百千萬億點負第.0-9a-]{0,24}") {
        let _ = from_words(&text);
    }

    #[test]
    fn plain_digits_decode_directly(n in any::<i64>()) {
        prop_assert_eq!(from_words(&n.to_string()).unwrap(), Decimal::from(n));
    }
}

fn sanitize_is_idempotent(n: u64) -> bool {
    let vocabulary = Vocabulary::traditional();
    let options = ConversionOptions::cheque();
    let canonical = to_words_with(n, &options).unwrap();
    sanitize(&canonical, vocabulary) == canonical
}

fn zero_never_encodes_empty(negative: bool) -> bool {
    let zero = if negative { Decimal::NEGATIVE_ONE * Decimal::ZERO } else { Decimal::ZERO };
    to_words(zero).unwrap() == "零"
}

fn ordinal_prefixes_cardinal(n: i32) -> bool {
    to_words_ordinal(n).unwrap() == format!("第{}", to_words(n).unwrap())
}

#[test]
fn quickcheck_properties() {
    quickcheck(sanitize_is_idempotent as fn(u64) -> bool);
    quickcheck(zero_never_encodes_empty as fn(bool) -> bool);
    quickcheck(ordinal_prefixes_cardinal as fn(i32) -> bool);
}
