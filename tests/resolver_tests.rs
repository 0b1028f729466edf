use battleship_hotseat::coord::parse;
use battleship_hotseat::{
    resolve, Cell, ConsistencyError, Fleet, Grid, Resolution, RowCol, Ship,
};

fn rc(token: &str) -> RowCol {
    parse(token, 10).unwrap()
}

/// Grid of size 10 with each `(name, from, to)` ship placed.
fn setup(ships: &[(&str, &str, &str)]) -> (Grid, Fleet) {
    let mut grid = Grid::new(10).unwrap();
    let mut placed = Vec::new();
    for &(name, a, b) in ships {
        let (a, b) = (rc(a), rc(b));
        let length = a.row.abs_diff(b.row) + a.col.abs_diff(b.col) + 1;
        let mut ship = Ship::new(name, length).unwrap();
        grid.try_place(&mut ship, a, b).unwrap();
        placed.push(ship);
    }
    (grid, Fleet::new(placed))
}

#[test]
fn test_miss_leaves_fleet_alone() {
    let (mut grid, mut fleet) = setup(&[("Cruiser", "F5", "H5")]);
    let before = fleet.clone();
    for token in ["E5", "I5", "F4", "H6", "A1", "J10"] {
        assert_eq!(resolve(&mut grid, &mut fleet, rc(token)), Ok(Resolution::Miss));
        assert_eq!(grid.cell(rc(token)), Cell::Miss);
    }
    assert_eq!(fleet, before);
}

#[test]
fn test_hit_any_ship_cell() {
    for token in ["F5", "G5", "H5"] {
        let (mut grid, mut fleet) = setup(&[("Cruiser", "H5", "F5")]);
        assert_eq!(resolve(&mut grid, &mut fleet, rc(token)), Ok(Resolution::Hit));
        assert_eq!(fleet.ships()[0].remaining_cells(), 2);
    }
}

#[test]
fn test_repeat_shots_are_idempotent() {
    let (mut grid, mut fleet) = setup(&[("Cruiser", "F5", "H5")]);
    assert_eq!(resolve(&mut grid, &mut fleet, rc("G5")), Ok(Resolution::Hit));
    assert_eq!(resolve(&mut grid, &mut fleet, rc("G5")), Ok(Resolution::Hit));
    assert_eq!(fleet.ships()[0].remaining_cells(), 2);

    assert_eq!(resolve(&mut grid, &mut fleet, rc("A1")), Ok(Resolution::Miss));
    assert_eq!(resolve(&mut grid, &mut fleet, rc("A1")), Ok(Resolution::Miss));
}

#[test]
fn test_sunk_then_won() {
    let (mut grid, mut fleet) = setup(&[("Destroyer", "H5", "G5"), ("Patrol", "A1", "A2")]);
    assert_eq!(resolve(&mut grid, &mut fleet, rc("A1")), Ok(Resolution::Hit));
    assert_eq!(
        resolve(&mut grid, &mut fleet, rc("A2")),
        Ok(Resolution::Sunk("Patrol".into()))
    );
    assert_eq!(fleet.len(), 1);
    assert_eq!(fleet.ships()[0].name(), "Destroyer");

    assert_eq!(resolve(&mut grid, &mut fleet, rc("G5")), Ok(Resolution::Hit));
    let last = resolve(&mut grid, &mut fleet, rc("H5")).unwrap();
    assert_eq!(last, Resolution::Won("Destroyer".into()));
    assert!(last.is_won());
    assert!(fleet.is_empty());
}

#[test]
fn test_shooting_a_sunk_ship_again_is_a_plain_hit() {
    let (mut grid, mut fleet) = setup(&[("Destroyer", "A1", "A2"), ("Patrol", "J9", "J10")]);
    resolve(&mut grid, &mut fleet, rc("A1")).unwrap();
    resolve(&mut grid, &mut fleet, rc("A2")).unwrap();
    assert_eq!(resolve(&mut grid, &mut fleet, rc("A2")), Ok(Resolution::Hit));
    assert_eq!(fleet.len(), 1);
}

#[test]
fn test_unowned_ship_cell_is_a_consistency_failure() {
    let (mut grid, _) = setup(&[("Destroyer", "A1", "A2")]);
    let mut empty = Fleet::default();
    assert_eq!(
        resolve(&mut grid, &mut empty, rc("A1")),
        Err(ConsistencyError(RowCol::new(0, 0)))
    );
}
