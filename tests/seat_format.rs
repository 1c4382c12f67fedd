use boxoffice::types::{Seat, SeatFormatError, event_key, ticket_key};

#[test]
fn accepts_every_section_and_the_number_bounds() {
    for raw in ["a1", "h500", "C149", "e42", "B007"] {
        let seat = Seat::parse(raw).unwrap();
        assert_eq!(seat.as_str(), raw);
    }
}

#[test]
fn rejects_bad_length() {
    assert_eq!(Seat::parse("a"), Err(SeatFormatError::Length(1)));
    assert_eq!(Seat::parse("a1000"), Err(SeatFormatError::Length(5)));
    assert_eq!(Seat::parse(""), Err(SeatFormatError::Length(0)));
}

#[test]
fn rejects_sections_outside_a_to_h() {
    assert_eq!(Seat::parse("i10"), Err(SeatFormatError::Section('i')));
    assert_eq!(Seat::parse("110"), Err(SeatFormatError::Section('1')));
}

#[test]
fn rejects_numbers_out_of_range_or_not_numeric() {
    assert_eq!(Seat::parse("a0"), Err(SeatFormatError::Number("0".to_string())));
    assert_eq!(Seat::parse("a501"), Err(SeatFormatError::Number("501".to_string())));
    assert_eq!(Seat::parse("a1x"), Err(SeatFormatError::Number("1x".to_string())));
    assert_eq!(Seat::parse("a-1"), Err(SeatFormatError::Number("-1".to_string())));
}

#[test]
fn key_encoding_has_no_padding() {
    assert_eq!(event_key(7), "E_7");
    assert_eq!(ticket_key(7, "a01"), "T_7_a01");
    assert!(event_key(10) < event_key(2));
    assert!(event_key(u32::MAX) < ticket_key(0, "a1"));
}
