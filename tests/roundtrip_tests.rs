use std::sync::Arc;

use chrono::FixedOffset;
use numdate::epoch::{MAX_MILLIS, MIN_MILLIS};
use numdate::{DateStyle, Locale, NumberDateFormat, NumberFormat, Zone};

const SAMPLES: [i64; 8] = [
    0,
    -1,
    1_767_971_045_060,
    -14_182_940_000,
    951_782_400_000,
    -2_208_988_800_000,
    4_102_444_799_999,
    -30_610_224_000_000,
];

fn locales() -> Vec<Locale> {
    vec![
        Locale::invariant(),
        Locale::en_us(),
        Locale::en_gb(),
        Locale::de_de(),
        Locale::fr_fr(),
    ]
}

fn assert_stable(fmt: &NumberDateFormat, millis: i64) {
    let rendered = fmt.format_i64(millis).unwrap();
    let parsed = fmt
        .parse_millis(&rendered)
        .unwrap_or_else(|err| panic!("'{rendered}' under {}: {err}", fmt.pattern()));
    assert_eq!(fmt.format_i64(parsed).unwrap(), rendered, "pattern {}", fmt.pattern());
}

#[test]
fn test_styles_round_trip_in_utc() {
    for locale in locales() {
        let convention = Arc::new(locale);
        for date in DateStyle::ALL {
            for time in DateStyle::ALL {
                let fmt = NumberDateFormat::with_styles(date, time, convention.clone())
                    .unwrap()
                    .with_time_zone(Zone::Utc);
                for millis in SAMPLES {
                    assert_stable(&fmt, millis);
                }
            }
        }
    }
}

#[test]
fn test_styles_round_trip_in_fixed_zone() {
    let india = Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
    for locale in locales() {
        let fmt = NumberDateFormat::with_styles(DateStyle::Medium, DateStyle::Medium, Arc::new(locale))
            .unwrap()
            .with_time_zone(india);
        for millis in SAMPLES {
            assert_stable(&fmt, millis);
        }
    }
}

#[test]
fn test_exact_pattern_round_trips_to_the_millisecond() {
    let fmt = NumberDateFormat::with_pattern("yyyy-MM-ddTHH:mm:ss.fffzzz", Arc::new(Locale::invariant()))
        .unwrap()
        .with_time_zone(Zone::Fixed(FixedOffset::west_opt(8 * 3600).unwrap()));
    for millis in SAMPLES {
        let rendered = fmt.format_i64(millis).unwrap();
        assert_eq!(fmt.parse_millis(&rendered).unwrap(), millis, "{rendered}");
    }
}

#[test]
fn test_short_designator_and_era_round_trip() {
    for pattern in ["M/d/yyyy h:mm t", "M/d/yyyy g", "M/d/yyyy g h:mm:ss t"] {
        let fmt = NumberDateFormat::with_pattern(pattern, Arc::new(Locale::en_us()))
            .unwrap()
            .with_time_zone(Zone::Utc);
        for millis in SAMPLES {
            assert_stable(&fmt, millis);
        }
    }
    let fmt = NumberDateFormat::with_pattern("M/d/yyyy h:mm t", Arc::new(Locale::en_us()))
        .unwrap()
        .with_time_zone(Zone::Utc);
    assert_eq!(fmt.format_i64(1_767_971_045_060).unwrap(), "1/9/2026 3:04 P");
    assert_eq!(fmt.parse_millis("1/9/2026 3:04 P").unwrap(), 1_767_971_040_000);
}

#[test]
fn test_era_round_trips_in_every_locale() {
    for locale in locales() {
        let convention = Arc::new(locale);
        for pattern in ["yyyy-MM-dd g", "yyyy-MM-dd g HH:mm", "dddd d MMMM yyyy g HH:mm"] {
            let fmt = NumberDateFormat::with_pattern(pattern, convention.clone())
                .unwrap()
                .with_time_zone(Zone::Utc);
            for millis in SAMPLES {
                assert_stable(&fmt, millis);
            }
        }
    }
}

#[test]
fn test_range_ends_round_trip() {
    let fmt = NumberDateFormat::with_pattern("yyyy-MM-dd HH:mm:ss.fff", Arc::new(Locale::invariant()))
        .unwrap()
        .with_time_zone(Zone::Utc);
    for millis in [MIN_MILLIS, MAX_MILLIS] {
        let rendered = fmt.format_i64(millis).unwrap();
        assert_eq!(fmt.parse_millis(&rendered).unwrap(), millis);
    }
}

#[test]
fn test_epoch_renders_1970_everywhere() {
    for locale in locales() {
        let convention = Arc::new(locale);
        for date in DateStyle::ALL {
            let fmt = NumberDateFormat::with_styles(date, DateStyle::Short, convention.clone())
                .unwrap()
                .with_time_zone(Zone::Utc);
            assert!(fmt.date_pattern().has_full_year());
            assert!(fmt.format_i64(0).unwrap().contains("1970"), "{}", fmt.pattern());
        }
    }
}
