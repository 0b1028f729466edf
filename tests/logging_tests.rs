use battleship_hotseat::{is_game_target, level_from, short_target};
use log::LevelFilter;

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(Some("debug"), LevelFilter::Warn), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE "), LevelFilter::Warn), LevelFilter::Trace);
    assert_eq!(level_from(Some("loud"), LevelFilter::Warn), LevelFilter::Warn);
    assert_eq!(level_from(None, LevelFilter::Info), LevelFilter::Info);
}

#[test]
fn test_only_game_records_pass() {
    assert!(is_game_target("battleship_hotseat"));
    assert!(is_game_target("battleship_hotseat::resolver"));
    assert!(is_game_target("sim"));
    assert!(!is_game_target("battleship_hotseat_extra"));
    assert!(!is_game_target("rand::rngs"));
}

#[test]
fn test_short_target_drops_crate_prefix() {
    assert_eq!(short_target("battleship_hotseat::grid"), "grid");
    assert_eq!(short_target("battleship_hotseat"), "battleship_hotseat");
    assert_eq!(short_target("sim"), "sim");
}
