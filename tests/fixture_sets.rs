//! Integration tests over the shipped fixture sets and the registry
//! queries built on top of them.

use rustc_hash::FxHashSet;
use rusty_money::iso::AUD;
use testresult::TestResult;

use veranda::prelude::*;

#[test]
fn seaside_set_loads_with_a_single_currency() -> TestResult {
    let fixture = Fixture::from_set("seaside")?;

    assert_eq!(fixture.hotels().len(), 2);
    assert_eq!(fixture.rooms().len(), 6);
    assert_eq!(fixture.currency(), Some(AUD));

    Ok(())
}

#[test]
fn hotels_are_searchable_by_location() -> TestResult {
    let fixture = Fixture::from_set("seaside")?;
    let royal = fixture.hotel_key("royal")?;

    let found: Vec<HotelKey> = fixture
        .hotels()
        .find_by_location(Some("vic"), None, None)
        .map(|(key, _)| key)
        .collect();

    assert_eq!(found, vec![royal]);

    Ok(())
}

#[test]
fn availability_reflects_the_booked_set() -> TestResult {
    let fixture = Fixture::from_set("seaside")?;
    let royal = fixture.hotel_key("royal")?;

    let all_royal: FxHashSet<RoomKey> = fixture
        .rooms()
        .available_rooms(royal, &FxHashSet::default())
        .map(|(key, _)| key)
        .collect();

    assert_eq!(all_royal.len(), 4);

    // Book every Royal Hotel room; nothing is left available there.
    assert_eq!(fixture.rooms().available_rooms(royal, &all_royal).count(), 0);

    // The other hotel is unaffected.
    let xavier = fixture.hotel_key("xavier")?;
    assert_eq!(
        fixture.rooms().available_rooms(xavier, &all_royal).count(),
        2
    );

    Ok(())
}
