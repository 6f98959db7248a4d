use basalt_datum::{
    Datum, MemArena, datum_from_string, datum_from_string_with_info, datum_to_string,
    datum_to_string_with_info,
};
use basalt_result::Error;
use basalt_types::{DecimalValue, LogicalType, TypeInfo};

/* ----------------------------- Fixed points ----------------------------- */

#[test]
fn parses_the_canonical_examples() {
    let arena = MemArena::new();
    assert_eq!(
        datum_from_string(LogicalType::Int, "42", &arena).unwrap(),
        Datum::Int32(42)
    );
    assert!(matches!(
        datum_from_string(LogicalType::Int, "abc", &arena),
        Err(Error::ParseError { target: "INT", .. })
    ));
}

#[test]
fn decimal_v2_render_preserves_scale() {
    let value = DecimalValue::new(12345, 2).unwrap();
    let rendered = datum_to_string(&Datum::DecimalV2(value), LogicalType::DecimalV2).unwrap();
    assert_eq!(rendered, "123.45");
}

/* ------------------------------ Round trips ----------------------------- */

fn roundtrip(ty: LogicalType, text: &str) {
    let arena = MemArena::new();
    let datum = datum_from_string(ty, text, &arena)
        .unwrap_or_else(|err| panic!("{ty} failed to parse '{text}': {err}"));
    let rendered = datum_to_string(&datum, ty).unwrap();
    let reparsed = datum_from_string(ty, &rendered, &arena).unwrap();
    assert_eq!(reparsed, datum, "{ty}: '{text}' -> '{rendered}'");
}

#[test]
fn integer_kinds_roundtrip_at_their_bounds() {
    roundtrip(LogicalType::TinyInt, "-128");
    roundtrip(LogicalType::TinyInt, "127");
    roundtrip(LogicalType::UnsignedTinyInt, "255");
    roundtrip(LogicalType::SmallInt, "-32768");
    roundtrip(LogicalType::UnsignedSmallInt, "65535");
    roundtrip(LogicalType::Int, "-2147483648");
    roundtrip(LogicalType::UnsignedInt, "4294967295");
    roundtrip(LogicalType::BigInt, "-9223372036854775808");
    roundtrip(LogicalType::UnsignedBigInt, "18446744073709551615");
    roundtrip(LogicalType::LargeInt, "-170141183460469231731687303715884105728");
    roundtrip(LogicalType::LargeInt, "170141183460469231731687303715884105727");
}

#[test]
fn float_kinds_roundtrip() {
    for text in ["0", "-0.5", "3.25", "1e-10", "12345678.5"] {
        roundtrip(LogicalType::Float, text);
        roundtrip(LogicalType::Double, text);
    }
}

#[test]
fn boolean_roundtrips_and_accepts_word_forms() {
    let arena = MemArena::new();
    roundtrip(LogicalType::Boolean, "1");
    roundtrip(LogicalType::Boolean, "0");
    assert_eq!(
        datum_from_string(LogicalType::Boolean, "true", &arena).unwrap(),
        Datum::Boolean(true)
    );
    assert_eq!(
        datum_from_string(LogicalType::Boolean, "false", &arena).unwrap(),
        Datum::Boolean(false)
    );
    // Rendering is the numeric form, which is itself parseable.
    assert_eq!(
        datum_to_string(&Datum::Boolean(true), LogicalType::Boolean).unwrap(),
        "1"
    );
}

#[test]
fn calendar_kinds_roundtrip_in_both_generations() {
    roundtrip(LogicalType::DateV1, "2021-03-07");
    roundtrip(LogicalType::DateV1, "2020-02-29");
    roundtrip(LogicalType::Date, "2021-03-07");
    roundtrip(LogicalType::Date, "1969-12-31");
    roundtrip(LogicalType::DatetimeV1, "2021-03-07 14:30:05");
    roundtrip(LogicalType::Datetime, "2021-03-07 14:30:05");
    roundtrip(LogicalType::Datetime, "2021-03-07 14:30:05.000123");
}

#[test]
fn decimal_kinds_roundtrip_with_scale_intact() {
    roundtrip(LogicalType::Decimal, "123.45");
    roundtrip(LogicalType::Decimal, "-0.000000001");
    roundtrip(LogicalType::DecimalV2, "123.450");
    roundtrip(LogicalType::DecimalV2, "-123.45");
    roundtrip(LogicalType::Decimal32, "1234567.89");
    roundtrip(LogicalType::Decimal64, "-1234567890.123456");
    roundtrip(LogicalType::Decimal128, "12345678901234567890.123456789");
    roundtrip(LogicalType::Decimal128, "0.00000000000000000000000000000000000001");
}

#[test]
fn varlen_kinds_copy_into_the_arena() {
    let arena = MemArena::new();
    let datum = datum_from_string(LogicalType::Varchar, "hello basalt", &arena).unwrap();
    assert_eq!(datum.as_str(), Some("hello basalt"));
    assert_eq!(
        datum_to_string(&datum, LogicalType::Varchar).unwrap(),
        "hello basalt"
    );

    let bin = datum_from_string(LogicalType::Varbinary, "raw", &arena).unwrap();
    assert_eq!(bin.as_bytes(), Some(&b"raw"[..]));
    assert_eq!(arena.allocated_bytes(), "hello basalt".len() + "raw".len());
}

#[test]
fn parsed_strings_live_as_long_as_the_arena() {
    let arena = MemArena::new();
    let first = datum_from_string(LogicalType::Char, "pinned", &arena).unwrap();
    // Pile further allocations on top; the earlier borrow must stay valid.
    for _ in 0..64 {
        datum_from_string(LogicalType::Varchar, "filler", &arena).unwrap();
    }
    assert_eq!(first.as_str(), Some("pinned"));
}

/* ------------------------------ Rejections ------------------------------ */

#[test]
fn out_of_range_and_malformed_numerics_fail() {
    let arena = MemArena::new();
    for (ty, text) in [
        (LogicalType::TinyInt, "128"),
        (LogicalType::UnsignedTinyInt, "-1"),
        (LogicalType::SmallInt, "40000"),
        (LogicalType::Int, "abc"),
        (LogicalType::Int, "12.5"),
        (LogicalType::BigInt, ""),
        (LogicalType::Double, "inf"),
        (LogicalType::Double, "nan"),
        (LogicalType::Boolean, "TRUE"),
        (LogicalType::Boolean, "yes"),
    ] {
        let err = datum_from_string(ty, text, &arena).unwrap_err();
        assert!(
            matches!(err, Error::ParseError { .. }),
            "{ty} '{text}' -> {err}"
        );
    }
}

#[test]
fn invalid_calendar_values_fail() {
    let arena = MemArena::new();
    for (ty, text) in [
        (LogicalType::DateV1, "2021-06-31"),
        (LogicalType::Date, "2021-02-29"),
        (LogicalType::Date, "2021-13-01"),
        (LogicalType::DatetimeV1, "2021-03-07 25:00:00"),
        (LogicalType::Datetime, "2021-03-07"),
    ] {
        assert!(
            datum_from_string(ty, text, &arena).is_err(),
            "{ty} accepted '{text}'"
        );
    }
}

#[test]
fn decimals_exceeding_their_kind_fail() {
    let arena = MemArena::new();
    // Ten significant digits cannot be a DECIMAL32.
    assert!(datum_from_string(LogicalType::Decimal32, "12345678.90", &arena).is_err());
    // The legacy representations cap fractions at nine digits.
    assert!(datum_from_string(LogicalType::Decimal, "1.0000000001", &arena).is_err());
    assert!(datum_from_string(LogicalType::DecimalV2, "1.0000000001", &arena).is_err());
    // 39 significant digits overflow even DECIMAL128.
    let wide = format!("{}.0", "9".repeat(38));
    assert!(datum_from_string(LogicalType::Decimal128, &wide, &arena).is_err());
}

#[test]
fn structured_and_internal_kinds_are_unsupported() {
    let arena = MemArena::new();
    for ty in [
        LogicalType::Struct,
        LogicalType::Array,
        LogicalType::Map,
        LogicalType::Hll,
        LogicalType::Object,
        LogicalType::Percentile,
        LogicalType::Unknown,
        LogicalType::None,
        LogicalType::Null,
        LogicalType::Function,
        LogicalType::Time,
        LogicalType::DiscreteDouble,
        LogicalType::MaxValue,
    ] {
        assert!(matches!(
            datum_from_string(ty, "x", &arena),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            datum_to_string(&Datum::Int32(1), ty),
            Err(Error::Unsupported(_))
        ));
    }
}

#[test]
fn tag_type_disagreement_is_internal() {
    assert!(matches!(
        datum_to_string(&Datum::Int64(1), LogicalType::Int),
        Err(Error::Internal(_))
    ));
    assert!(matches!(
        datum_to_string(&Datum::Null, LogicalType::Int),
        Err(Error::Internal(_))
    ));
}

/* --------------------------- Descriptor paths --------------------------- */

#[test]
fn descriptor_enforces_declared_scale() {
    let arena = MemArena::new();
    let info = TypeInfo::decimal(LogicalType::Decimal64, 18, 4).unwrap();

    let datum = datum_from_string_with_info(&info, "12.5", &arena).unwrap();
    assert_eq!(
        datum,
        Datum::Decimal64(DecimalValue::new(125_000, 4).unwrap())
    );
    assert_eq!(
        datum_to_string_with_info(&info, &datum).unwrap(),
        "12.5000"
    );

    // More fractional digits than declared cannot be represented exactly.
    assert!(datum_from_string_with_info(&info, "12.12345", &arena).is_err());
    // Fifteen integer digits no longer fit 18-digit precision at scale 4.
    assert!(datum_from_string_with_info(&info, "123456789012345", &arena).is_err());
}

#[test]
fn descriptor_path_matches_plain_path_for_non_decimals() {
    let arena = MemArena::new();
    let info = TypeInfo::new(LogicalType::BigInt);
    assert_eq!(
        datum_from_string_with_info(&info, "-77", &arena).unwrap(),
        datum_from_string(LogicalType::BigInt, "-77", &arena).unwrap()
    );
}

#[test]
fn whitespace_around_numerics_is_tolerated() {
    let arena = MemArena::new();
    assert_eq!(
        datum_from_string(LogicalType::Int, "  42 ", &arena).unwrap(),
        Datum::Int32(42)
    );
    // Strings are copied verbatim, whitespace included.
    let s = datum_from_string(LogicalType::Varchar, "  padded  ", &arena).unwrap();
    assert_eq!(s.as_str(), Some("  padded  "));
}

#[test]
fn parse_error_names_literal_and_target() {
    let arena = MemArena::new();
    let err = datum_from_string(LogicalType::SmallInt, "99999", &arena).unwrap_err();
    assert_eq!(err.to_string(), "cannot parse '99999' as SMALLINT");
}
