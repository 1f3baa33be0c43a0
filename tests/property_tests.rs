use cnb_rates::bulletin::error::{BulletinError, ErrorKind};
use cnb_rates::bulletin::parser::BulletinParser;
use cnb_rates::core::currency::{Currency, CurrencyCatalog};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CODES: &[&str] = &["AUD", "EUR", "GBP", "JPY", "USD", "CHF", "PLN", "HUF"];

/// One bulletin data line: code, amount, rate mantissa with 3 decimals.
#[derive(Debug, Clone)]
struct Line {
    code: &'static str,
    amount: i64,
    mantissa: i64,
}

impl Line {
    fn render(&self) -> String {
        format!(
            "Country|name|{}|{}|{},{:03}",
            self.amount,
            self.code,
            self.mantissa / 1000,
            self.mantissa % 1000
        )
    }

    fn expected_rate(&self) -> Decimal {
        Decimal::new(self.mantissa, 3) / Decimal::from(self.amount)
    }
}

/// Generate data lines with distinct currency codes.
fn arb_lines() -> impl Strategy<Value = Vec<Line>> {
    prop::sample::subsequence(CODES.to_vec(), 1..=CODES.len()).prop_flat_map(|codes| {
        let n = codes.len();
        (
            Just(codes),
            prop::collection::vec(prop::sample::select(vec![1i64, 100, 1000]), n),
            prop::collection::vec(1i64..100_000_000i64, n),
        )
            .prop_map(|(codes, amounts, mantissas)| {
                codes
                    .into_iter()
                    .zip(amounts)
                    .zip(mantissas)
                    .map(|((code, amount), mantissa)| Line {
                        code,
                        amount,
                        mantissa,
                    })
                    .collect()
            })
    })
}

/// Generate a requested catalog that always contains CZK.
fn arb_catalog() -> impl Strategy<Value = CurrencyCatalog> {
    prop::sample::subsequence(CODES.to_vec(), 0..=CODES.len()).prop_map(|codes| {
        codes
            .into_iter()
            .map(Currency::new)
            .chain(std::iter::once(Currency::base()))
            .collect()
    })
}

fn render(lines: &[Line]) -> String {
    let mut text = String::from("17.10.2026 #201\nzemě|měna|množství|kód|kurz\n");
    for line in lines {
        text.push_str(&line.render());
        text.push('\n');
    }
    text
}

proptest! {
    // A catalog without the base currency is rejected whatever the text.
    #[test]
    fn missing_base_always_rejected(text in ".*", codes in prop::sample::subsequence(CODES.to_vec(), 0..=CODES.len())) {
        let catalog: CurrencyCatalog = codes.into_iter().map(Currency::new).collect();
        let err = BulletinParser::parse(&text, &catalog).unwrap_err();
        prop_assert!(matches!(err, BulletinError::MissingBaseCurrency { .. }), "expected MissingBaseCurrency, got {:?}", err);
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // Whitespace-only text is an invalid argument.
    #[test]
    fn whitespace_text_rejected(text in "[ \t\r\n]*", catalog in arb_catalog()) {
        let err = BulletinParser::parse(&text, &catalog).unwrap_err();
        prop_assert!(matches!(err, BulletinError::EmptyBulletin));
    }

    // Fewer than three lines is malformed and reports the real count.
    #[test]
    fn short_text_reports_line_count(lines in prop::collection::vec("[a-z]{1,10}", 1..=2), catalog in arb_catalog()) {
        let text = lines.join("\n");
        let err = BulletinParser::parse(&text, &catalog).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedInput);
        let is_expected = matches!(
            err,
            BulletinError::TooFewLines { expected: 3, actual } if actual == lines.len()
        );
        prop_assert!(is_expected);
    }

    // Every produced rate is the quoted rate divided by its amount, in bulletin order.
    #[test]
    fn rates_are_normalized_per_unit(lines in arb_lines(), catalog in arb_catalog()) {
        let rates = BulletinParser::parse(&render(&lines), &catalog).unwrap();
        let expected: Vec<&Line> = lines.iter().filter(|l| catalog.contains(l.code)).collect();

        prop_assert_eq!(rates.len(), expected.len());
        for (rate, line) in rates.iter().zip(expected) {
            prop_assert_eq!(rate.source_currency().code(), line.code);
            prop_assert!(rate.target_currency().is_base());
            prop_assert_eq!(rate.rate(), line.expected_rate());
            prop_assert!(rate.rate() > Decimal::ZERO);
        }
    }

    // Unrequested currencies never show up in the result.
    #[test]
    fn result_is_subset_of_catalog(lines in arb_lines(), catalog in arb_catalog()) {
        let rates = BulletinParser::parse(&render(&lines), &catalog).unwrap();
        for rate in &rates {
            prop_assert!(catalog.contains(rate.source_currency().code()));
            prop_assert!(!rate.source_currency().is_base());
        }
    }

    // Parsing the same input twice gives the same rates in the same order.
    #[test]
    fn parsing_is_deterministic(lines in arb_lines(), catalog in arb_catalog()) {
        let text = render(&lines);
        let first = BulletinParser::parse(&text, &catalog).unwrap();
        let second = BulletinParser::parse(&text, &catalog).unwrap();
        prop_assert_eq!(first, second);
    }

    // Blank lines between data lines change nothing.
    #[test]
    fn blank_lines_are_ignored(
        lines in arb_lines(),
        catalog in arb_catalog(),
        blanks in prop::collection::vec(prop::sample::select(vec!["", "   ", "\t"]), 8),
    ) {
        let plain = BulletinParser::parse(&render(&lines), &catalog).unwrap();

        let mut padded = String::from("17.10.2026 #201\nzemě|měna|množství|kód|kurz\n");
        for (line, blank) in lines.iter().zip(blanks.iter().cycle()) {
            padded.push_str(blank);
            padded.push('\n');
            padded.push_str(&line.render());
            padded.push('\n');
        }
        let with_blanks = BulletinParser::parse(&padded, &catalog).unwrap();

        prop_assert_eq!(plain, with_blanks);
    }

    // A data line with the wrong number of fields is always rejected, requested or not.
    #[test]
    fn wrong_field_count_rejected(lines in arb_lines(), catalog in arb_catalog(), extra in prop::bool::ANY) {
        let mut text = render(&lines);
        let bad = if extra { "A|b|1|XXX|1,0|tail" } else { "A|b|1|XXX" };
        text.push_str(bad);

        let err = BulletinParser::parse(&text, &catalog).unwrap_err();
        prop_assert_eq!(err.line_number(), Some(lines.len() + 3));
        let is_expected = matches!(&err, BulletinError::MalformedLine { content, .. } if content == bad);
        prop_assert!(is_expected);
    }
}
