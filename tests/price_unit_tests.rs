use std::thread;

use vroong::{Decimal, Locale, PriceUnit, PriceUnitError};

fn dollar() -> PriceUnit {
    PriceUnit::new(Some(Locale::us())).expect("dollar unit")
}

fn won() -> PriceUnit {
    PriceUnit::new(Some(Locale::korea())).expect("won unit")
}

#[test]
fn dollar_unit_formats_with_cents() {
    let unit = dollar();
    assert_eq!(unit.format(Some(Decimal::new(102, 1))), "$10.20");
    assert_eq!(unit.format(None), "$0.00");
}

#[test]
fn won_unit_has_no_minor_digits() {
    assert_eq!(won().format(Some(Decimal::from(1_000))), "₩1,000");
}

#[test]
fn constructing_without_locale_names_the_argument() {
    let err = PriceUnit::new(None).expect_err("absent locale");
    match err {
        PriceUnitError::InvalidArgument(message) => assert!(message.contains("locale")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_succeeds_for_supported_and_generic_locales() {
    vroong::init();
    for tag in ["en-US", "ko-KR", "de-DE", "pt-BR", "sw"] {
        let locale: Locale = tag.parse().expect("locale");
        let unit = PriceUnit::new(Some(locale)).expect("unit");
        assert!(unit.validate().is_ok(), "{tag}");
    }
}

#[test]
fn validate_reports_invariant_breakage() {
    let unit: PriceUnit = serde_json::from_str(r#"{"locale":null}"#).expect("deserialize");
    assert!(matches!(
        unit.validate(),
        Err(PriceUnitError::InvalidState(_))
    ));
}

#[test]
fn large_precision_amounts_are_rounded_not_truncated() {
    let amount: Decimal = "1234567890.123456789".parse().expect("decimal");
    assert_eq!(dollar().format(Some(amount)), "$1,234,567,890.12");
    assert_eq!(won().format(Some(amount)), "₩1,234,567,890");
}

#[test]
fn shared_unit_is_consistent_across_threads() {
    let unit = dollar();
    let expected = unit.format(Some(Decimal::new(123456, 2)));
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..200)
                        .map(|_| unit.format(Some(Decimal::new(123456, 2))))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let outputs = handle.join().expect("thread");
            assert!(outputs.iter().all(|out| out == &expected));
        }
    });
    assert_eq!(expected, "$1,234.56");
}
