use battleship_hotseat::coord::parse;
use battleship_hotseat::{render, Grid, Ship, SymbolTable};

fn grid_with_battleship() -> Grid {
    let mut grid = Grid::new(10).unwrap();
    let mut ship = Ship::new("test", 4).unwrap();
    grid.try_place(&mut ship, parse("E1", 10).unwrap(), parse("E4", 10).unwrap())
        .unwrap();
    grid
}

#[test]
fn test_empty_grid_only_water() {
    let text = render(&Grid::new(10).unwrap(), &SymbolTable::default(), true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9 10");
    assert_eq!(lines[1].len(), 11 * 2);
    assert_eq!(lines[1], format!("A {}", "~ ".repeat(10)));
    assert!(lines[10].starts_with("J "));
}

#[test]
fn test_revealed_grid_shows_ship() {
    let text = render(&grid_with_battleship(), &SymbolTable::default(), true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[5], format!("E {}{}", "O ".repeat(4), "~ ".repeat(6)));
}

#[test]
fn test_obscured_grid_hides_ship_but_not_hits() {
    let mut grid = grid_with_battleship();
    grid.apply_shot(parse("E2", 10).unwrap());
    grid.apply_shot(parse("F2", 10).unwrap());
    let symbols = SymbolTable::default();

    let text = render(&grid, &symbols, false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[5], format!("E ~ X {}", "~ ".repeat(8)));
    assert_eq!(lines[6], format!("F ~ M {}", "~ ".repeat(8)));

    // the revealed view is unaffected by an earlier obscured render
    let revealed = render(&grid, &symbols, true);
    assert!(revealed.lines().nth(5).unwrap().starts_with("E O X O O "));
}

#[test]
fn test_custom_symbols() {
    let symbols = SymbolTable {
        water_symbol: ".".into(),
        own_ship_symbol: "#".into(),
        ..SymbolTable::default()
    };
    let text = render(&grid_with_battleship(), &symbols, true);
    assert_eq!(text.lines().nth(5).unwrap(), "E # # # # . . . . . . ");
}
