use crate::decoder::{decode_indices, decode_next};

fn decode_all(bytes: &[u8]) -> Vec<(usize, usize, char)> {
    decode_indices(bytes).collect()
}

#[test]
fn test_decode_well_formed_boundaries() {
    let test_string = "\u{0000}\u{0001}\u{007f}\u{0080}\u{07ff}\u{0800}\u{d7ff}\u{e000}\
                       \u{ffff}\u{10000}\u{10ffff}";
    let mut it = decode_indices(test_string.as_bytes());

    // 1 byte
    assert_eq!(Some((0, 1, '\u{0000}')), it.next());
    assert_eq!(Some((1, 2, '\u{0001}')), it.next());
    assert_eq!(Some((2, 3, '\u{007f}')), it.next());

    // 2 bytes
    assert_eq!(Some((3, 5, '\u{0080}')), it.next());
    assert_eq!(Some((5, 7, '\u{07ff}')), it.next());

    // 3 bytes
    assert_eq!(Some((7, 10, '\u{0800}')), it.next());
    assert_eq!(Some((10, 13, '\u{d7ff}')), it.next());
    assert_eq!(Some((13, 16, '\u{e000}')), it.next());
    assert_eq!(Some((16, 19, '\u{ffff}')), it.next());

    // 4 bytes
    assert_eq!(Some((19, 23, '\u{10000}')), it.next());
    assert_eq!(Some((23, 27, '\u{10ffff}')), it.next());

    // end of iterator
    assert_eq!(None, it.next());
    assert_eq!(None, it.next());
}

#[test]
fn test_decode_matches_char_indices() {
    let text = "Grüße, 世界! 🐎 done";
    let expected: Vec<_> = text
        .char_indices()
        .map(|(i, c)| (i, i + c.len_utf8(), c))
        .collect();
    assert_eq!(expected, decode_all(text.as_bytes()));
}

#[test]
fn test_decode_stray_continuation() {
    assert_eq!(vec![(1, 2, 'a'), (2, 3, 'b')], decode_all(b"\x80ab"));
    assert_eq!(vec![(0, 1, 'a'), (3, 4, 'b')], decode_all(b"a\x80\xbfb"));
}

#[test]
fn test_decode_bad_continuation_resynchronizes() {
    // The byte after the lead is re-read as a new lead.
    assert_eq!(vec![(1, 2, '('), (2, 3, 'x')], decode_all(b"\xc3(x"));
    assert_eq!(vec![(1, 3, 'é')], decode_all(b"\xe2\xc3\xa9"));
}

#[test]
fn test_decode_truncated_sequence() {
    assert_eq!(vec![(0, 1, 'a')], decode_all(b"a\xe2\x82"));
    assert_eq!(Vec::<(usize, usize, char)>::new(), decode_all(b"\xf0\x9f\x90"));
}

#[test]
fn test_decode_invalid_leads() {
    for lead in [0xc0u8, 0xc1, 0xf5, 0xf8, 0xfe, 0xff] {
        assert_eq!(
            vec![(1, 2, 'z')],
            decode_all(&[lead, b'z']),
            "lead {lead:#x}"
        );
    }
}

#[test]
fn test_decode_overlong_and_surrogate() {
    // Overlong "/".
    assert_eq!(vec!['x'], chars(b"\xe0\x80\xafx"));
    // U+D800.
    assert_eq!(vec!['x'], chars(b"\xed\xa0\x80x"));
    // U+110000.
    assert_eq!(vec!['x'], chars(b"\xf4\x90\x80\x80x"));
}

#[test]
fn test_decode_noncharacter_is_well_formed() {
    assert_eq!(vec![(0, 3, '\u{fffe}')], decode_all("\u{fffe}".as_bytes()));
}

fn chars(bytes: &[u8]) -> Vec<char> {
    decode_all(bytes).into_iter().map(|(_, _, c)| c).collect()
}

#[test]
fn test_decode_next_cursor() {
    let bytes = "é\u{ff}".as_bytes();
    let mut pos = 0;
    assert_eq!(Some('é'), decode_next(bytes, &mut pos));
    assert_eq!(2, pos);
    assert_eq!(Some('\u{ff}'), decode_next(bytes, &mut pos));
    assert_eq!(4, pos);
    assert_eq!(None, decode_next(bytes, &mut pos));
    assert_eq!(4, pos);

    let mut pos = 10;
    assert_eq!(None, decode_next(bytes, &mut pos));
}

#[test]
fn test_decode_next_skips_to_end() {
    let bytes = b"\xff\x80\xc3";
    let mut pos = 0;
    assert_eq!(None, decode_next(bytes, &mut pos));
    assert_eq!(3, pos);
}
