use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn status(mask: &str, text: &str) -> MatchStatus {
    compile(mask).unwrap().check(text).status
}

#[rstest]
#[case("ABC", "ABC", MatchStatus::Ok)]
#[case("ABC", "AB", MatchStatus::OkSoFar)]
#[case("ABC", "ABD", MatchStatus::NotOk)]
#[case("###", "123", MatchStatus::Ok)]
#[case("###", "12", MatchStatus::OkSoFar)]
#[case("###", "12a", MatchStatus::NotOk)]
#[case("{?,##}", "5", MatchStatus::OkSoFar)]
#[case("A[B]C", "AC", MatchStatus::Ok)]
#[case("A[B]C", "ABC", MatchStatus::Ok)]
#[case("A[B]C", "AXC", MatchStatus::NotOk)]
#[case("*#", "", MatchStatus::Ok)]
#[case("*#", "1", MatchStatus::Ok)]
#[case("*#", "123456", MatchStatus::Ok)]
#[case("*#", "1a", MatchStatus::NotOk)]
#[case("*3#", "123", MatchStatus::Ok)]
#[case("*3#", "12", MatchStatus::OkSoFar)]
#[case("*3#", "1x", MatchStatus::NotOk)]
#[case(";#", "#", MatchStatus::Ok)]
#[case(";#", "1", MatchStatus::NotOk)]
fn basic_shapes(#[case] mask: &str, #[case] text: &str, #[case] expected: MatchStatus) {
    assert_eq!(status(mask, text), expected, "mask {mask:?} text {text:?}");
}

// Masks of the kind hosts actually configure.
#[rstest]
#[case("(###) ###-####", "(555) 123-4567", MatchStatus::Ok)]
#[case("(###) ###-####", "(555", MatchStatus::OkSoFar)]
#[case("(###) ###-####", "555-1234", MatchStatus::NotOk)]
#[case("#[#][#]{;.,:}#[#]", "12.5", MatchStatus::Ok)]
#[case("#[#][#]{;.,:}#[#]", "123:45", MatchStatus::Ok)]
#[case("#[#][#]{;.,:}#[#]", "12,5", MatchStatus::NotOk)]
#[case("&*?", "John", MatchStatus::Ok)]
#[case("&*?", "J0hn", MatchStatus::NotOk)]
#[case("{Y,N,y,n}", "y", MatchStatus::Ok)]
#[case("{Y,N,y,n}", "x", MatchStatus::NotOk)]
#[case("*2#/*2#/*4#", "12/31/1999", MatchStatus::Ok)]
#[case("*2#/*2#/*4#", "12/3", MatchStatus::OkSoFar)]
#[case("*2#/*2#/*4#", "1/31/1999", MatchStatus::NotOk)]
#[case("[+,-]*#", "-42", MatchStatus::Ok)]
#[case("[+,-]*#", "42", MatchStatus::Ok)]
#[case("[+,-]*#", "", MatchStatus::Ok)]
fn realistic_masks(#[case] mask: &str, #[case] text: &str, #[case] expected: MatchStatus) {
    assert_eq!(status(mask, text), expected, "mask {mask:?} text {text:?}");
}

#[test]
fn typing_a_date_keystroke_by_keystroke() {
    let mask = compile("*2#/*2#/*4#").unwrap();
    let full = "07/04/1776";
    for end in 0..full.len() {
        let prefix = &full[..end];
        assert_eq!(
            mask.check(prefix).status,
            MatchStatus::OkSoFar,
            "prefix {prefix:?}"
        );
    }
    assert_eq!(mask.check(full).status, MatchStatus::Ok);
}

#[test]
fn mask_from_str() {
    let mask: Mask = "*3#".parse().unwrap();
    assert_eq!(mask.to_string(), "*3#");
    assert_eq!(mask.nodes.len(), 1);
    assert!("{a".parse::<Mask>().is_err());
}

#[test]
fn deepest_allowed_mask_matches_and_dumps() {
    let levels = parser::MAX_NESTING;
    let mask = compile(&format!("{}a{}", "[".repeat(levels), "]".repeat(levels))).unwrap();
    assert_eq!(mask.check("a").status, MatchStatus::Ok);
    assert_eq!(mask.check("").status, MatchStatus::Ok);
    assert_eq!(mask.check("b").status, MatchStatus::NotOk);
    // Root, then an Optional and a Group line per level, then the literal.
    assert_eq!(mask.dump().lines().count(), 2 * levels + 2);

    let stars = compile(&format!("{}#", "*".repeat(levels))).unwrap();
    assert_eq!(stars.check("123").status, MatchStatus::Ok);
    assert_eq!(stars.check("12a").status, MatchStatus::NotOk);
}

const MASKS: &[&str] = &[
    "*#",
    "###",
    "*3#",
    "#[#]a",
    "{#a,a#}*#",
    "[a,#]*{a,#}",
    "*2{#,[a]}a",
    "a[#,aa]#",
];

fn text_strategy() -> impl Strategy<Value = String> {
    "[a#0-9]{0,8}"
}

proptest! {
    #[test]
    fn check_is_deterministic(mask in prop::sample::select(MASKS), text in text_strategy()) {
        let m = compile(mask).unwrap();
        prop_assert_eq!(m.check(&text), m.check(&text));
    }

    #[test]
    fn conforming_prefixes_stay_conforming(
        mask in prop::sample::select(MASKS),
        text in text_strategy(),
    ) {
        let m = compile(mask).unwrap();
        if m.check(&text).status == MatchStatus::Ok {
            for end in 0..text.len() {
                let prefix = &text[..end];
                prop_assert!(
                    m.check(prefix).status.is_acceptable(),
                    "mask {:?}: {:?} is Ok but prefix {:?} is not",
                    mask, text, prefix
                );
            }
        }
    }

    #[test]
    fn index_never_passes_text_end(
        mask in prop::sample::select(MASKS),
        text in text_strategy(),
    ) {
        let m = compile(mask).unwrap();
        prop_assert!(m.check(&text).index <= text.chars().count());
    }

    #[test]
    fn compile_never_panics(mask in ".{0,12}") {
        let _ = compile(&mask);
    }
}
