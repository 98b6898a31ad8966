#![allow(dead_code)]

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use rusty_golf_scorecard::model::{
    Course, FormatKind, Game, GameSetup, HoleScore, Player, PlayerId, Roster,
};

#[derive(Deserialize)]
struct Fixture {
    course: Course,
    players: Vec<Player>,
}

pub const ALICE: PlayerId = 1;
pub const BOB: PlayerId = 2;
pub const CAROL: PlayerId = 3;
pub const DAN: PlayerId = 4;

pub const GAME_ID: i64 = 42;

/// Cedar Ridge (par 72, white/blue on every hole, red on hole 1 only) and four
/// players: Alice 20.0 (current user, blue), Bob 9.6, Carol 0.0, Dan +2.0 (white).
pub fn load_fixture() -> Result<(Course, Roster), Box<dyn std::error::Error>> {
    let fixture: Fixture = serde_json::from_str(include_str!("../test_course.json"))?;
    Ok((fixture.course, Roster::new(fixture.players)))
}

pub fn teams(red: [PlayerId; 2], blue: [PlayerId; 2]) -> BTreeMap<String, BTreeSet<PlayerId>> {
    BTreeMap::from([
        ("Red".to_string(), red.into_iter().collect()),
        ("Blue".to_string(), blue.into_iter().collect()),
    ])
}

pub fn setup(format: FormatKind) -> GameSetup {
    GameSetup {
        id: GAME_ID,
        course_id: Some(1),
        players: vec![ALICE, BOB, CAROL, DAN],
        tee_color: None,
        format,
        teams: format
            .is_team_format()
            .then(|| teams([ALICE, BOB], [CAROL, DAN])),
        tracked_players: BTreeSet::from([ALICE]),
        created: NaiveDate::from_ymd_opt(2026, 6, 14).unwrap_or_default(),
    }
}

pub fn game(format: FormatKind) -> Result<Game, Box<dyn std::error::Error>> {
    Ok(Game::new(setup(format))?)
}

/// Holes 1-3 for everyone except Dan, who has no score on 3.
pub fn front_three() -> Vec<HoleScore> {
    vec![
        HoleScore::new(GAME_ID, 1)
            .with(ALICE, 6)
            .with(BOB, 5)
            .with(CAROL, 4)
            .with(DAN, 4),
        HoleScore::new(GAME_ID, 2)
            .with(ALICE, 7)
            .with(BOB, 5)
            .with(CAROL, 5)
            .with(DAN, 4),
        HoleScore::new(GAME_ID, 3)
            .with(ALICE, 4)
            .with(BOB, 4)
            .with(CAROL, 3),
    ]
}
