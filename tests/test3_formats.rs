mod common;

use common::{
    ALICE, BOB, CAROL, DAN, GAME_ID, front_three, game, load_fixture, setup, teams,
};
use rusty_golf_scorecard::model::{
    Entrant, FormatKind, Game, GameFormat, HoleOutcome, HoleScore, MatchRecord, ScoreDisplay,
    Team, TeamPair,
};
use rusty_golf_scorecard::score::{
    best_ball_net, match_status, scramble_net, team_handicap, team_stableford_hole,
};
use rusty_golf_scorecard::{CoreError, RoundContext, ScoringConfig};

fn names(standings: &[rusty_golf_scorecard::model::Standing]) -> Vec<&str> {
    standings.iter().map(|s| s.entrant.name()).collect()
}

#[test]
fn test_stroke_play_partial_round() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Stroke)?;
    let scores = front_three();
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    assert_eq!(names(standings), vec!["Dan", "Carol", "Bob", "Alice"]);

    let dan = &standings[0];
    assert_eq!((dan.gross, dan.net, dan.holes_played), (Some(8), Some(8), 2));
    let alice = &standings[3];
    assert_eq!((alice.gross, alice.net, alice.holes_played), (Some(17), Some(14), 3));
    assert_eq!(alice.position, 4);
    Ok(())
}

#[test]
fn test_player_without_scores_ranks_last() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Stroke)?;
    let scores = vec![
        HoleScore::new(GAME_ID, 1).with(ALICE, 9).with(BOB, 4).with(CAROL, 5),
        // zero means "not entered yet"
        HoleScore::new(GAME_ID, 2).with(DAN, 0),
    ];
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    let last = standings.last().ok_or("empty standings")?;
    assert_eq!(last.entrant.name(), "Dan");
    assert_eq!((last.gross, last.net, last.holes_played), (None, None, 0));
    assert_eq!(ctx.gross(DAN, 2), None);
    Ok(())
}

#[test]
fn test_repeated_hole_record_keeps_the_last() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Stroke)?;
    let scores = vec![
        HoleScore::new(GAME_ID, 1).with(ALICE, 9).with(BOB, 4),
        HoleScore::new(GAME_ID, 1).with(ALICE, 6),
    ];
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    assert_eq!(ctx.gross(ALICE, 1), Some(6));
    assert_eq!(ctx.gross(BOB, 1), None);
    Ok(())
}

#[test]
fn test_huge_gross_totals_saturate() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Stroke)?;
    let scores = vec![
        HoleScore::new(GAME_ID, 1).with(CAROL, i32::MAX),
        HoleScore::new(GAME_ID, 2).with(CAROL, i32::MAX),
    ];
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let card = ctx.scorecard(CAROL)?;
    assert_eq!(card.out.gross, Some(i32::MAX));
    assert_eq!(card.total.net, Some(i32::MAX));
    assert_eq!(card.total.points, Some(0));

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    let carol = standings
        .iter()
        .find(|s| s.entrant.name() == "Carol")
        .ok_or("Carol missing")?;
    assert_eq!((carol.gross, carol.holes_played), (Some(i32::MAX), 2));
    Ok(())
}

#[test]
fn test_scorecard_totals() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Stroke)?;
    let scores = front_three();
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let card = ctx.scorecard(ALICE)?;
    assert_eq!(card.course_handicap, 20);
    assert_eq!(card.holes.len(), 18);
    assert_eq!(card.holes_played, 3);
    assert_eq!(card.out.gross, Some(17));
    assert_eq!(card.out.net, Some(14));
    assert_eq!(card.inward.gross, None);
    assert_eq!(card.total.points, Some(4));

    let hole4 = &card.holes[3];
    assert_eq!((hole4.strokes_received, hole4.gross, hole4.net), (2, None, None));
    assert_eq!(card.holes[0].display, Some(ScoreDisplay::Bogey));
    assert_eq!(card.holes[2].display, Some(ScoreDisplay::Par));

    assert!(matches!(ctx.scorecard(99), Err(CoreError::UnknownPlayer(99))));
    Ok(())
}

#[test]
fn test_team_stableford_counts_recorded_members() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::TeamStableford)?;
    let scores = front_three();
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let pair = game.format.teams().ok_or("expected teams")?;
    // Dan has no score on 3, Carol's par counts alone
    assert_eq!(team_stableford_hole(&ctx, &pair.b, 3), Some(2));
    assert_eq!(team_stableford_hole(&ctx, &pair.b, 4), None);

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    assert_eq!(names(standings), vec!["Blue", "Red"]);
    assert_eq!(standings[0].points, Some(11));
    assert_eq!(standings[1].points, Some(9));
    Ok(())
}

#[test]
fn test_best_ball_stroke() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::BestBallStroke)?;
    let scores = front_three();
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    assert_eq!(names(standings), vec!["Blue", "Red"]);
    assert_eq!((standings[0].net, standings[0].gross), (Some(11), Some(11)));
    assert_eq!((standings[1].net, standings[1].gross), (Some(12), Some(14)));
    assert!(matches!(
        standings[1].entrant,
        Entrant::Team { players: [ALICE, BOB], .. }
    ));
    Ok(())
}

#[test]
fn test_best_ball_never_worse_than_members() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::BestBallStroke)?;
    let scores = front_three();
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);
    let pair = game.format.teams().ok_or("expected teams")?;

    for team in pair.teams() {
        for hole in ctx.holes() {
            let best = best_ball_net(&ctx, team, hole);
            for id in team.players {
                if let (Some(best), Some(net)) = (best, ctx.net(id, hole)) {
                    assert!(best <= net, "hole {hole} player {id}");
                }
            }
            let any = team.players.iter().any(|id| ctx.gross(*id, hole).is_some());
            assert_eq!(best.is_some(), any);
        }
    }
    Ok(())
}

#[test]
fn test_best_ball_match() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::BestBallMatch)?;
    let mut scores = front_three();
    // only Red has a score on 4, so it is not decided
    scores.push(HoleScore::new(GAME_ID, 4).with(ALICE, 5));
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);

    let result = ctx.standings();
    let m = result.match_result().ok_or("expected a match")?;
    assert_eq!((m.team_a.as_str(), m.team_b.as_str()), ("Red", "Blue"));
    assert_eq!(m.record_a, MatchRecord { won: 0, lost: 1, halved: 2 });
    assert_eq!(m.record_b, MatchRecord { won: 1, lost: 0, halved: 2 });
    assert_eq!(
        m.holes,
        vec![
            (1, HoleOutcome::Halved),
            (2, HoleOutcome::WonByB),
            (3, HoleOutcome::Halved),
        ]
    );
    assert_eq!(m.status.leader.as_deref(), Some("Blue"));
    assert_eq!(m.status.to_string(), "Blue 1 UP with 15 to play");
    Ok(())
}

#[test]
fn test_match_status_dormie_and_closed_out() {
    let pair = TeamPair {
        a: Team { name: "Red".to_string(), players: [ALICE, BOB] },
        b: Team { name: "Blue".to_string(), players: [CAROL, DAN] },
    };

    let dormie = match_status(&pair, &MatchRecord { won: 3, lost: 0, halved: 12 });
    assert!(dormie.dormie && !dormie.closed_out);
    assert_eq!(dormie.to_string(), "Red dormie 3");

    let closed = match_status(&pair, &MatchRecord { won: 1, lost: 5, halved: 9 });
    assert!(closed.closed_out);
    assert_eq!(closed.to_string(), "Blue wins 4&3");

    let square = match_status(&pair, &MatchRecord { won: 2, lost: 2, halved: 0 });
    assert_eq!(square.to_string(), "All square");

    let halved = match_status(&pair, &MatchRecord { won: 4, lost: 4, halved: 10 });
    assert_eq!(halved.to_string(), "Match halved");
}

#[test]
fn test_scramble() -> Result<(), Box<dyn std::error::Error>> {
    let (course, roster) = load_fixture()?;
    let game = game(FormatKind::Scramble)?;
    // team scores live under the first member of each team
    let scores = vec![
        HoleScore::new(GAME_ID, 4).with(ALICE, 5).with(CAROL, 4),
        HoleScore::new(GAME_ID, 6).with(ALICE, 3).with(CAROL, 3),
    ];
    let config = ScoringConfig::default();
    let ctx = RoundContext::new(&game, Some(&course), &roster, &scores, &config);
    let pair = game.format.teams().ok_or("expected teams")?;

    // Red on 4: 5 - (2 + 1) / 2 = 3.5, rounds to 4
    assert_eq!(scramble_net(&ctx, &pair.a, 4), Some(4));
    // Blue on 6: 3 - (0 - 1) / 2 = 3.5, rounds to 4
    assert_eq!(scramble_net(&ctx, &pair.b, 6), Some(4));
    assert_eq!(scramble_net(&ctx, &pair.a, 5), None);

    assert!((team_handicap(&ctx, &pair.a) - 14.8).abs() < 1e-9);
    assert!((team_handicap(&ctx, &pair.b) + 1.0).abs() < 1e-9);

    let result = ctx.standings();
    let standings = result.standings().ok_or("expected standings")?;
    assert_eq!(names(standings), vec!["Red", "Blue"]);
    assert_eq!((standings[0].gross, standings[0].net), (Some(8), Some(7)));
    assert_eq!((standings[1].gross, standings[1].net), (Some(7), Some(8)));
    assert_eq!(standings[0].holes_played, 2);
    Ok(())
}

#[test]
fn test_team_setup_is_validated() {
    let mut bad = setup(FormatKind::BestBallMatch);
    bad.teams = None;
    assert!(matches!(Game::new(bad), Err(CoreError::InvalidTeams(_))));

    let mut three = setup(FormatKind::BestBallStroke);
    let mut assignment = teams([ALICE, BOB], [CAROL, DAN]);
    if let Some(red) = assignment.get_mut("Red") {
        red.insert(CAROL);
    }
    three.teams = Some(assignment);
    assert!(matches!(Game::new(three), Err(CoreError::InvalidTeams(_))));

    let mut overlap = setup(FormatKind::Scramble);
    overlap.teams = Some(teams([ALICE, BOB], [BOB, DAN]));
    assert!(matches!(Game::new(overlap), Err(CoreError::InvalidTeams(_))));

    let mut stranger = setup(FormatKind::TeamStableford);
    stranger.teams = Some(teams([ALICE, BOB], [CAROL, 77]));
    assert!(matches!(Game::new(stranger), Err(CoreError::UnknownPlayer(77))));

    let mut one_team = setup(FormatKind::TeamStableford);
    let mut assignment = teams([ALICE, BOB], [CAROL, DAN]);
    assignment.remove("Blue");
    one_team.teams = Some(assignment);
    assert!(matches!(Game::new(one_team), Err(CoreError::InvalidTeams(_))));
}

#[test]
fn test_teams_follow_roster_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut s = setup(FormatKind::BestBallStroke);
    s.players = vec![DAN, CAROL, BOB, ALICE];
    let game = Game::new(s)?;
    let GameFormat::BestBallStroke { teams } = &game.format else {
        return Err("expected best ball".into());
    };
    assert_eq!(teams.a.name, "Blue");
    assert_eq!(teams.a.players, [DAN, CAROL]);
    assert_eq!(teams.b.players, [BOB, ALICE]);
    Ok(())
}
