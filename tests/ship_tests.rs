use battlegrid::{Orientation, PlacementError, ShipType, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn catalog_lengths() {
    assert_eq!(ShipType::Carrier.length(), 5);
    assert_eq!(ShipType::Battleship.length(), 4);
    assert_eq!(ShipType::Submarine.length(), 3);
    assert_eq!(ShipType::Destroyer.length(), 3);
    assert_eq!(ShipType::PatrolBoat.length(), 2);
    let total: usize = FLEET.iter().map(|s| s.length()).sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
}

#[test]
fn max_start_is_derived_from_length() {
    let expected = [
        (ShipType::Carrier, 5),
        (ShipType::Battleship, 6),
        (ShipType::Submarine, 7),
        (ShipType::Destroyer, 7),
        (ShipType::PatrolBoat, 8),
    ];
    for (ship, limit) in expected {
        assert_eq!(ship.max_start(Orientation::Vertical), limit);
        assert_eq!(ship.max_start(Orientation::Horizontal), limit);
        assert_eq!(ship.max_start(Orientation::Vertical), 10 - ship.length());
    }
}

#[test]
fn fleet_is_in_catalog_order() {
    assert_eq!(FLEET, ShipType::ALL);
    let mut sorted = FLEET;
    sorted.sort();
    assert_eq!(sorted, FLEET);
}

#[test]
fn parse_ship_names() {
    assert_eq!("Aircraft Carrier".parse::<ShipType>(), Ok(ShipType::Carrier));
    assert_eq!("carrier".parse::<ShipType>(), Ok(ShipType::Carrier));
    assert_eq!("BATTLESHIP".parse::<ShipType>(), Ok(ShipType::Battleship));
    assert_eq!("submarine".parse::<ShipType>(), Ok(ShipType::Submarine));
    assert_eq!("Destroyer".parse::<ShipType>(), Ok(ShipType::Destroyer));
    assert_eq!("patrol boat".parse::<ShipType>(), Ok(ShipType::PatrolBoat));
    assert_eq!("PATROL_BOAT".parse::<ShipType>(), Ok(ShipType::PatrolBoat));
    assert_eq!("patrol-boat".parse::<ShipType>(), Ok(ShipType::PatrolBoat));
    assert_eq!("  Patrol   Boat ".parse::<ShipType>(), Ok(ShipType::PatrolBoat));
}

#[test]
fn parse_rejects_unknown_ships() {
    for name in ["cruiser", "", "battle ship", "carrierx"] {
        assert_eq!(
            name.parse::<ShipType>(),
            Err(PlacementError::UnknownShipType),
            "{name:?} should not parse"
        );
    }
}

#[test]
fn parse_orientation() {
    assert_eq!("Horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("VERTICAL".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!(" v".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!("".parse::<Orientation>(), Err(PlacementError::UnknownOrientation));
    assert_eq!(
        "diagonal".parse::<Orientation>(),
        Err(PlacementError::UnknownOrientation)
    );
}

#[test]
fn display_names() {
    assert_eq!(ShipType::PatrolBoat.to_string(), "Patrol Boat");
    assert_eq!(ShipType::Carrier.to_string(), "Carrier");
    assert_eq!(Orientation::Horizontal.to_string(), "horizontal");
}
