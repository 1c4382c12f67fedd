use boxoffice::{
    core::catalog::{Catalog, CatalogError},
    record::{EventData, TicketDraft},
    types::Seat,
};

fn event(code: u32, title: &str) -> EventData {
    EventData {
        code,
        title: title.to_string(),
        date: "01/01/2025".to_string(),
        time: "10:00".to_string(),
    }
}

fn draft(seat: &str, first: &str) -> TicketDraft {
    TicketDraft {
        seat: Seat::parse(seat).unwrap(),
        tax_id: "123456789".to_string(),
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
    }
}

#[test]
fn yoga_scenario_cascades_ticket_with_event() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(101, "Yoga")).unwrap();
    catalog.add_ticket(101, draft("c149", "Ann")).unwrap();

    let err = catalog.add_ticket(101, draft("c149", "Bob")).unwrap_err();
    assert_eq!(
        err,
        CatalogError::SeatTaken {
            event_code: 101,
            seat: "c149".to_string()
        }
    );
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_ticket(101, "c149").unwrap().first_name, "Ann");

    catalog.remove_event(101).unwrap();
    assert!(catalog.tree().search("E_101").is_none());
    assert!(catalog.tree().search("T_101_c149").is_none());
    assert!(catalog.is_empty());
}

#[test]
fn duplicate_event_is_rejected_and_first_wins() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(5, "Pilates")).unwrap();

    assert_eq!(catalog.add_event(event(5, "Boxing")), Err(CatalogError::DuplicateKey(5)));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_event(5).unwrap().title, "Pilates");
}

#[test]
fn ticket_for_unknown_event_leaves_index_untouched() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "Spin")).unwrap();
    catalog.add_ticket(1, draft("a1", "Ann")).unwrap();
    let before = catalog.len();

    assert_eq!(catalog.add_ticket(2, draft("a1", "Bob")), Err(CatalogError::UnknownEvent(2)));
    assert_eq!(catalog.len(), before);
    assert!(catalog.find_ticket(2, "a1").is_none());
}

#[test]
fn removing_event_spares_other_events_tickets() {
    let mut catalog = Catalog::new();
    for code in [20, 3, 7] {
        catalog.add_event(event(code, "Class")).unwrap();
    }
    for seat in ["a1", "b20", "h500", "C7"] {
        catalog.add_ticket(3, draft(seat, "Three")).unwrap();
        catalog.add_ticket(7, draft(seat, "Seven")).unwrap();
    }
    catalog.add_ticket(20, draft("d4", "Twenty")).unwrap();

    let removed = catalog.remove_event(3).unwrap();
    assert_eq!(removed.event.code, 3);
    let seats: Vec<&str> = removed.tickets.iter().map(|t| t.seat.as_str()).collect();
    assert_eq!(seats, vec!["C7", "a1", "b20", "h500"]);

    assert!(catalog.find_event(3).is_none());
    for seat in ["a1", "b20", "h500", "C7"] {
        assert!(catalog.find_ticket(3, seat).is_none());
        assert_eq!(catalog.find_ticket(7, seat).unwrap().first_name, "Seven");
    }
    assert_eq!(catalog.find_ticket(20, "d4").unwrap().first_name, "Twenty");
    assert_eq!(catalog.event_count(), 2);
    assert_eq!(catalog.ticket_count(), 5);
}

#[test]
fn event_codes_prefixed_by_another_code_are_not_cascaded() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "One")).unwrap();
    catalog.add_event(event(10, "Ten")).unwrap();
    catalog.add_ticket(1, draft("a1", "Ann")).unwrap();
    catalog.add_ticket(10, draft("a1", "Bob")).unwrap();

    let removed = catalog.remove_event(1).unwrap();
    assert_eq!(removed.tickets.len(), 1);
    assert_eq!(catalog.find_ticket(10, "a1").unwrap().first_name, "Bob");
}

#[test]
fn unknown_event_removal_and_listing_fail() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "One")).unwrap();

    assert_eq!(catalog.remove_event(9).unwrap_err(), CatalogError::UnknownEvent(9));
    assert!(matches!(
        catalog.list_tickets_for_event(9),
        Err(CatalogError::UnknownEvent(9))
    ));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn events_list_in_lexicographic_key_order() {
    let mut catalog = Catalog::new();
    for code in [2, 101, 10, 1] {
        catalog.add_event(event(code, "Class")).unwrap();
    }
    catalog.add_ticket(2, draft("a1", "Ann")).unwrap();

    let codes: Vec<u32> = catalog.list_events().map(|e| e.code).collect();
    assert_eq!(codes, vec![1, 10, 101, 2]);
}

#[test]
fn tickets_for_event_are_filtered_and_ordered() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(4, "Four")).unwrap();
    catalog.add_event(event(5, "Five")).unwrap();
    catalog.add_ticket(4, draft("b2", "Ann")).unwrap();
    catalog.add_ticket(5, draft("a1", "Bob")).unwrap();
    catalog.add_ticket(4, draft("a10", "Cid")).unwrap();

    let seats: Vec<String> = catalog
        .list_tickets_for_event(4)
        .unwrap()
        .map(|t| t.seat.clone())
        .collect();
    assert_eq!(seats, vec!["a10".to_string(), "b2".to_string()]);
    assert_eq!(catalog.list_tickets_for_event(5).unwrap().count(), 1);
}

#[test]
fn event_without_tickets_lists_nothing() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(8, "Eight")).unwrap();

    assert_eq!(catalog.list_tickets_for_event(8).unwrap().count(), 0);
    assert!(catalog.remove_event(8).unwrap().tickets.is_empty());
}

#[test]
fn single_ticket_removal() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "One")).unwrap();
    catalog.add_ticket(1, draft("e5", "Ann")).unwrap();

    let ticket = catalog.remove_ticket(1, "e5").unwrap();
    assert_eq!(ticket.first_name, "Ann");
    assert!(catalog.find_ticket(1, "e5").is_none());
    assert!(catalog.find_event(1).is_some());

    assert_eq!(
        catalog.remove_ticket(1, "e5").unwrap_err(),
        CatalogError::UnknownTicket {
            event_code: 1,
            seat: "e5".to_string()
        }
    );
}

#[test]
fn seat_case_is_part_of_the_key() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "One")).unwrap();
    catalog.add_ticket(1, draft("c149", "Ann")).unwrap();
    catalog.add_ticket(1, draft("C149", "Bob")).unwrap();

    assert_eq!(catalog.ticket_count(), 2);
    assert_eq!(catalog.find_ticket(1, "C149").unwrap().first_name, "Bob");
}

#[test]
fn clear_reports_freed_records() {
    let mut catalog = Catalog::new();
    catalog.add_event(event(1, "One")).unwrap();
    catalog.add_ticket(1, draft("a1", "Ann")).unwrap();
    catalog.add_ticket(1, draft("a2", "Bob")).unwrap();

    assert_eq!(catalog.clear(), 3);
    assert!(catalog.is_empty());
    assert_eq!(catalog.clear(), 0);
}
