use proptest::prelude::*;
use xtract_match::{compile, Key, Map, Scalar, Value};

const SEPARATORS: &[&str] = &[", ", " | ", ";", "/", " -> "];

proptest! {
    #[test]
    fn naked_tags_recover_substituted_values(
        values in prop::collection::vec("[a-zA-Z0-9_.]{1,8}", 1..6),
        seps in prop::collection::vec(prop::sample::select(SEPARATORS), 5),
        prefix in prop::sample::select(vec!["", "> ", "id:"]),
    ) {
        let mut template = prefix.to_string();
        let mut input = prefix.to_string();
        let mut expected = Map::new();

        for (i, value) in values.iter().enumerate() {
            template.push_str(&format!("{{{{ k{} }}}}", i));
            input.push_str(value);
            if i + 1 < values.len() {
                template.push_str(seps[i]);
                input.push_str(seps[i]);
            }
            expected.insert(Key::from(format!("k{}", i).as_str()), Value::Scalar(Scalar::cast(value)));
        }

        let extractor = compile(&template).unwrap();
        prop_assert_eq!(extractor.extract(&input), Some(expected));
    }

    #[test]
    fn extraction_is_deterministic(input in "\\PC{0,24}") {
        let extractor = compile("{{ a }}-{{ b: 2d }}.{{ c.d }}").unwrap();
        prop_assert_eq!(extractor.extract(&input), extractor.extract(&input));
    }

    #[test]
    fn integer_tags_only_yield_integers_or_text(digits in "[0-9]{1,12}") {
        let extractor = compile("n={{ n: d }}").unwrap();
        let values = extractor.extract(&format!("n={}", digits)).unwrap();
        match &values[&Key::from("n")] {
            Value::Scalar(Scalar::Integer(n)) => prop_assert_eq!(n.to_string(), digits),
            Value::Scalar(Scalar::Text(text)) => {
                prop_assert!(digits.starts_with('0') && digits.len() > 1);
                prop_assert_eq!(text, &digits);
            }
            other => prop_assert!(false, "unexpected value {:?}", other),
        }
    }
}
