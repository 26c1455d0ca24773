use crate::formatting::{pluralize, PluralCategory, PluralForm, RUBLE_FORMS};
use proptest::prelude::*;

fn fixture_forms() -> PluralForm {
    PluralForm::new("one", "few", "many")
}

proptest! {
    #[test]
    fn teens_always_take_many(hundreds in 0_i64..10_000_000, teen in 11_i64..=19) {
        let forms = fixture_forms();
        let n = hundreds * 100 + teen;
        prop_assert_eq!(pluralize(n, &forms), "many");
        prop_assert_eq!(pluralize(-n, &forms), "many");
    }

    #[test]
    fn matches_the_reference_rule(n in any::<i64>()) {
        let m = n.unsigned_abs();
        let expected = if m % 10 == 1 && m % 100 != 11 {
            "one"
        } else if (2..=4).contains(&(m % 10)) && !(12..=14).contains(&(m % 100)) {
            "few"
        } else {
            "many"
        };
        let forms = fixture_forms();
        prop_assert_eq!(pluralize(n, &forms), expected);
    }

    #[test]
    fn category_depends_only_on_last_two_digits(n in 0_i64..1_000_000, k in 0_i64..1_000) {
        prop_assert_eq!(PluralCategory::of(n), PluralCategory::of(n % 100 + 100 * k));
    }
}

#[test]
fn concrete_ruble_forms() {
    assert_eq!(pluralize(1, &RUBLE_FORMS), "рубль");
    assert_eq!(pluralize(2, &RUBLE_FORMS), "рубля");
    assert_eq!(pluralize(5, &RUBLE_FORMS), "рублей");
    assert_eq!(pluralize(11, &RUBLE_FORMS), "рублей");
    assert_eq!(pluralize(21, &RUBLE_FORMS), "рубль");
}
