//! Listener tests - effects delivered in order, JSON trace, headless play

use match3::autoplay::autoplay;
use match3::config::GameConfig;
use match3::core::{make_move, Board, Effect, ScriptedSource};
use match3::observe::{notify, EffectCounter, FnListener, JsonLinesListener};
use match3::types::Position;

fn chain_effects() -> Vec<Effect<char>> {
    let rows = ["dae", "bcf", "gbh", "aba"];
    let mut board =
        Board::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap();
    let mut source = ScriptedSource::new("xyzpqs".chars());
    make_move(&mut board, &mut source, Position::new(1, 0), Position::new(1, 1))
        .unwrap()
        .effects
}

#[test]
fn listener_receives_every_effect_in_log_order() {
    let effects = chain_effects();
    let mut seen = Vec::new();
    notify(
        &effects,
        &mut FnListener(|e: &Effect<char>| seen.push(e.clone())),
    );
    assert_eq!(seen, effects);
}

#[test]
fn no_listener_changes_nothing() {
    let with = chain_effects();
    let mut counter = EffectCounter::new();
    notify(&with, &mut counter);
    assert_eq!(chain_effects(), with);
    assert_eq!(counter.matches, 2);
    assert_eq!(counter.refills, 2);
}

#[test]
fn json_trace_has_one_line_per_effect() {
    let effects = chain_effects();
    let mut listener = JsonLinesListener::new(Vec::new());
    notify(&effects, &mut listener);
    let out = String::from_utf8(listener.finish().unwrap()).unwrap();

    let kinds: Vec<String> = out
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["kind"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, vec!["match", "refill", "match", "refill"]);
}

#[test]
fn autoplay_is_deterministic_for_a_seed() {
    let config = GameConfig {
        seed: 99,
        ..GameConfig::default()
    };

    let run = || {
        let mut game = config.new_game().unwrap();
        let mut listener = JsonLinesListener::new(Vec::new());
        let summary = autoplay(&mut game, 8, &mut listener).unwrap();
        (summary, listener.finish().unwrap())
    };

    let (first_summary, first_trace) = run();
    let (second_summary, second_trace) = run();
    assert_eq!(first_summary, second_summary);
    assert_eq!(first_trace, second_trace);
}
