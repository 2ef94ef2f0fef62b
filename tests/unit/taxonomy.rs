use super::*;

#[test]
fn sash_prefix_grammar_table() {
    let cases = [
        ("one-sash-door", Some(SashPrefix::One)),
        ("one-half-sash-door", Some(SashPrefix::OneHalf)),
        ("two-sash-frame", Some(SashPrefix::Two)),
        ("three-sash-crown", Some(SashPrefix::Three)),
        ("four-sash-trim", Some(SashPrefix::Four)),
        // Prefix must anchor at the start.
        ("big-one-sash-door", None),
        ("five-sash-door", None),
        ("one-sash", Some(SashPrefix::One)),
        ("", None),
        ("one", None),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_sash_prefix(input), expected, "input: {input:?}");
    }
}

#[test]
fn one_half_wins_over_one() {
    // "one-half-sash" must not be misread as the "one" prefix.
    assert_eq!(parse_sash_prefix("one-half-sash-frame"), Some(SashPrefix::OneHalf));
    assert_eq!(parse_sash_prefix("one-sash-frame"), Some(SashPrefix::One));
}

#[test]
fn part_slot_suffix_table() {
    let cases = [
        ("one-sash-door", Some(PartSlot::Door)),
        ("one-sash-frame", Some(PartSlot::Frame)),
        ("one-sash-crown", Some(PartSlot::Crown)),
        ("one-sash-transom", Some(PartSlot::Transom)),
        ("one-sash-up-frame", Some(PartSlot::UpFrame)),
        ("one-sash-under-frame", Some(PartSlot::UnderFrame)),
        ("one-sash-trim", Some(PartSlot::Trim)),
        ("one-sash-window", None),
        ("", None),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_part_slot(input), expected, "input: {input:?}");
    }
}

#[test]
fn specific_frame_suffixes_win_over_general() {
    // Without the ordering rule these would both fall into Frame.
    assert_eq!(parse_part_slot("two-sash-up-frame"), Some(PartSlot::UpFrame));
    assert_eq!(
        parse_part_slot("two-sash-under-frame"),
        Some(PartSlot::UnderFrame)
    );
    assert_eq!(parse_part_slot("two-sash-frame"), Some(PartSlot::Frame));
}

#[test]
fn parsers_never_panic_on_odd_input() {
    for input in ["---", "sash", "äöü-sash-door", "one-sash-", "-door"] {
        let _ = parse_sash_prefix(input);
        let _ = parse_part_slot(input);
    }
}
