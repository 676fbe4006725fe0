use chrono::NaiveDate;

use eventdesk_core::events::Event;

/// The fixed event listing served by the static data source.
///
/// Ids are assigned here and never reassigned; the listing order is the
/// serving order.
pub fn seed_events() -> Vec<Event> {
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    vec![
        Event::new(1, "Event 1", date(2023, 1, 1)),
        Event::new(2, "Event 2", date(2023, 2, 1)),
    ]
}
