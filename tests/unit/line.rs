//! Behavior tests for line-terminator stripping.

use capsa::{strip_leading_line_terminator, Slice};

/// Every recognized terminator encoding with its consumed byte count.
const TERMINATORS: &[(&[u8], usize)] = &[
    (b"\n\r", 2),
    (b"\n", 1),
    (b"\x0B", 1),
    (b"\x0C", 1),
    (b"\r", 1),
    (b"\xC2\x85", 2),
    (b"\xE2\x80\xA8", 3),
    (b"\xE2\x80\xA9", 3),
];

#[test]
fn every_terminator_is_consumed_exactly_once() {
    for (terminator, consumed) in TERMINATORS {
        let mut input = terminator.to_vec();
        input.extend_from_slice(b"line body");
        let out = strip_leading_line_terminator(Slice::new(&input));
        assert_eq!(
            out.as_bytes(),
            &input[*consumed..],
            "terminator {:02X?}",
            terminator
        );
    }
}

#[test]
fn bare_terminators_strip_to_empty() {
    for (terminator, consumed) in TERMINATORS {
        // "\n\r" with nothing after it consumes both bytes.
        let out = strip_leading_line_terminator(Slice::new(terminator));
        assert_eq!(out.len(), terminator.len() - consumed);
    }
}

#[test]
fn terminators_in_the_middle_are_untouched() {
    let input = b"a\nb\rc";
    let out = strip_leading_line_terminator(Slice::new(input));
    assert_eq!(out.as_bytes(), input);
}

#[test]
fn repeated_stripping_peels_one_terminator_per_call() {
    let input = b"\r\x0B\x0Cbody".to_vec();
    let mut rest = Slice::new(&input[..]);
    let mut rounds = 0;
    loop {
        let next = strip_leading_line_terminator(rest);
        if next.len() == rest.len() {
            break;
        }
        rest = next;
        rounds += 1;
    }
    assert_eq!(rounds, 3);
    assert_eq!(rest.as_bytes(), b"body");
}

#[test]
fn nel_first_byte_without_second_is_ordinary_text() {
    let input = b"\xC2\xA9 copyright";
    let out = strip_leading_line_terminator(Slice::new(input));
    assert_eq!(out.as_bytes(), input);
}

#[test]
fn separator_prefix_with_wrong_tail_is_ordinary_text() {
    // E2 80 94 is an em dash, not a separator.
    let input = b"\xE2\x80\x94dash";
    let out = strip_leading_line_terminator(Slice::new(input));
    assert_eq!(out.as_bytes(), input);
}

#[test]
fn stripping_composes_with_subwindows() {
    let input = b"xx\n\rtail";
    let windowed = Slice::new(&input[..]).slice_from(2);
    let out = strip_leading_line_terminator(windowed);
    assert_eq!(out.as_bytes(), b"tail");
}
