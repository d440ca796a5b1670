use numdate::{FormatError, Locale, LocaleNumberFormat, Number, NumberFormat};

#[test]
fn test_number_conversions() {
    assert_eq!(Number::from(42i32), Number::Int(42));
    assert_eq!(Number::from(42u32), Number::Int(42));
    assert_eq!(Number::from(1.5f32), Number::Float(1.5));
    assert_eq!(Number::Int(3).as_f64(), 3.0);
    assert_eq!(Number::Float(2.5).type_name(), "float");
}

#[test]
fn test_to_millis_truncates_toward_zero() {
    assert_eq!(Number::Float(1.9).to_millis(), Ok(1));
    assert_eq!(Number::Float(-1.9).to_millis(), Ok(-1));
    assert_eq!(Number::Int(-7).to_millis(), Ok(-7));
}

#[test]
fn test_format_en_us() {
    let fmt = LocaleNumberFormat::new(&Locale::en_us());
    assert_eq!(fmt.format_i64(1_234_567).unwrap(), "1,234,567");
    assert_eq!(fmt.format_f64(-1234.25).unwrap(), "-1,234.25");
}

#[test]
fn test_format_de_de() {
    let fmt = LocaleNumberFormat::new(&Locale::de_de());
    assert_eq!(fmt.format_i64(1_234_567).unwrap(), "1.234.567");
    assert_eq!(fmt.format_f64(1234.5).unwrap(), "1.234,5");
}

#[test]
fn test_format_without_grouping() {
    let fmt = LocaleNumberFormat::default().with_grouping(false);
    assert_eq!(fmt.format_i64(1_234_567).unwrap(), "1234567");
}

#[test]
fn test_parse_back() {
    let fmt = LocaleNumberFormat::new(&Locale::de_de());
    assert_eq!(fmt.parse("1.234.567").unwrap(), Number::Int(1_234_567));
    assert_eq!(fmt.parse("-1.234,5").unwrap(), Number::Float(-1234.5));

    let fmt = LocaleNumberFormat::default();
    for value in [0i64, -1, 999, 1_000, i64::MAX, i64::MIN] {
        let text = fmt.format_i64(value).unwrap();
        assert_eq!(fmt.parse(&text).unwrap(), Number::Int(value), "{text}");
    }
}

#[test]
fn test_parse_rejects_garbage() {
    let fmt = LocaleNumberFormat::default();
    for text in ["", "abc", "1-2", "--", "1.2.3"] {
        assert_eq!(
            fmt.parse(text),
            Err(FormatError::InvalidNumber {
                text: text.to_string()
            })
        );
    }
}
