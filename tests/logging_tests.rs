use battlegrid::level_from;
use log::LevelFilter;

#[test]
fn level_defaults_to_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn level_parses_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}
