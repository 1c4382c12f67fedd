use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use boxoffice::{
    core::catalog::Catalog,
    record::{EventData, TicketDraft},
    types::Seat,
};

fn event(code: u32) -> EventData {
    EventData {
        code,
        title: format!("Event {code}"),
        date: "01/01/2025".to_string(),
        time: "10:00".to_string(),
    }
}

fn draft(section: char, number: u32) -> TicketDraft {
    TicketDraft {
        seat: Seat::parse(&format!("{section}{number}")).expect("seat"),
        tax_id: "123456789".to_string(),
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
    }
}

fn filled_catalog(events: u32) -> Catalog {
    let mut catalog = Catalog::new();
    for code in 0..events {
        catalog.add_event(event(code)).expect("event");
    }
    for code in 0..events {
        for section in ['a', 'd', 'h'] {
            for number in (1..=500).step_by(25) {
                catalog.add_ticket(code, draft(section, number)).expect("ticket");
            }
        }
    }
    catalog
}

fn bench_issue(c: &mut Criterion) {
    c.bench_function("issue_tickets_50_events", |b| {
        b.iter(|| filled_catalog(50));
    });
}

fn bench_cascade(c: &mut Criterion) {
    c.bench_function("remove_event_cascade", |b| {
        b.iter_batched(
            || filled_catalog(50),
            |mut catalog| catalog.remove_event(25).expect("remove"),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_tickets_for_event");
    let catalog = filled_catalog(50);

    for code in [0u32, 25, 49] {
        group.bench_with_input(BenchmarkId::from_parameter(code), &code, |b, &code| {
            b.iter(|| catalog.list_tickets_for_event(code).expect("list").count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_issue, bench_cascade, bench_listing);
criterion_main!(benches);
