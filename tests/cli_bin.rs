use std::process::{Command, Output};

fn battlegrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_battlegrid"))
        .args(args)
        .env("BATTLEGRID_LOG", "off")
        .output()
        .expect("failed to run battlegrid binary")
}

#[test]
fn simulate_prints_json_summary() {
    let output = battlegrid(&["simulate", "--seed", "7", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");

    assert_eq!(v["seed"], 7);
    let winner = v["winner"].as_u64().unwrap();
    let loser = v["loser"].as_u64().unwrap();
    assert!(matches!((winner, loser), (1, 2) | (2, 1)));
    let loser_key = format!("player{}", loser);
    assert_eq!(v["ships_remaining"][loser_key.as_str()], 0);
    assert!(v["moves"]["player1"].as_u64().unwrap() >= 17);
}

#[test]
fn seeded_simulations_repeat() {
    let a = battlegrid(&["simulate", "--seed", "99", "--json"]);
    let b = battlegrid(&["simulate", "--seed", "99", "--json"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn saved_game_can_be_inspected() {
    let path = std::env::temp_dir().join(format!("battlegrid-{}.bin", std::process::id()));
    let path_str = path.to_str().unwrap();

    let saved = battlegrid(&["simulate", "--seed", "3", "--save", path_str]);
    assert!(saved.status.success());

    let inspected = battlegrid(&["inspect", path_str]);
    let _ = std::fs::remove_file(&path);
    assert!(inspected.status.success());
    let stdout = String::from_utf8(inspected.stdout).unwrap();
    assert!(stdout.contains("Phase: Finished"));
    assert!(stdout.contains("Winner: player"));
}

#[test]
fn check_accepts_a_legal_placement() {
    let output = battlegrid(&["check", "carrier", "4", "0", "v"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("is valid"));
    assert!(stdout.contains("(8, 0)"));
}

#[test]
fn check_rejects_an_overhanging_ship() {
    let output = battlegrid(&["check", "patrol boat", "8", "0", "vertical"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot fit"));
}

#[test]
fn check_rejects_unknown_ships() {
    let output = battlegrid(&["check", "rowboat", "0", "0", "h"]);
    assert!(!output.status.success());
}
