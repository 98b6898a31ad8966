use crate::model::{Entrant, Standing, Team, TeamPair};
use crate::score::context::RoundContext;
use crate::score::sort_utils::{RankBy, rank_standings};

pub(crate) fn team_row(team: &Team) -> Standing {
    Standing {
        position: 0,
        tied: false,
        entrant: Entrant::Team {
            name: team.name.clone(),
            players: team.players,
        },
        gross: None,
        net: None,
        points: None,
        holes_played: 0,
        handicap: None,
    }
}

pub(crate) fn accumulate(total: &mut Option<i32>, value: i32) {
    *total = Some(total.unwrap_or(0).saturating_add(value));
}

/// Team points on a hole: the sum of whichever members have points there.
/// `None` only when neither member has a score.
#[must_use]
pub fn team_stableford_hole(ctx: &RoundContext<'_>, team: &Team, hole: u8) -> Option<i32> {
    team.players
        .iter()
        .filter_map(|id| ctx.points(*id, hole))
        .reduce(i32::saturating_add)
}

#[must_use]
pub fn team_stableford(ctx: &RoundContext<'_>, teams: &TeamPair) -> Vec<Standing> {
    let rows = teams
        .teams()
        .into_iter()
        .map(|team| {
            let mut row = team_row(team);
            for hole in ctx.holes() {
                let mut played = false;
                for id in team.players {
                    if let Some(gross) = ctx.gross(id, hole) {
                        played = true;
                        accumulate(&mut row.gross, gross);
                    }
                    if let Some(net) = ctx.net(id, hole) {
                        accumulate(&mut row.net, net);
                    }
                }
                if played {
                    row.holes_played += 1;
                }
                if let Some(points) = team_stableford_hole(ctx, team, hole) {
                    accumulate(&mut row.points, points);
                }
            }
            row
        })
        .collect();
    rank_standings(rows, RankBy::Points)
}

/// Best net score among the members with a score on the hole, with the gross
/// that produced it (lower gross wins a tie).
#[must_use]
pub fn best_ball_hole(ctx: &RoundContext<'_>, team: &Team, hole: u8) -> Option<(i32, i32)> {
    team.players
        .iter()
        .filter_map(|id| Some((ctx.net(*id, hole)?, ctx.gross(*id, hole)?)))
        .min()
}

#[must_use]
pub fn best_ball_net(ctx: &RoundContext<'_>, team: &Team, hole: u8) -> Option<i32> {
    best_ball_hole(ctx, team, hole).map(|(net, _)| net)
}

/// Best ball stroke play, lowest team net total first.
#[must_use]
pub fn best_ball_stroke(ctx: &RoundContext<'_>, teams: &TeamPair) -> Vec<Standing> {
    let rows = teams
        .teams()
        .into_iter()
        .map(|team| {
            let mut row = team_row(team);
            for hole in ctx.holes() {
                if let Some((net, gross)) = best_ball_hole(ctx, team, hole) {
                    row.holes_played += 1;
                    accumulate(&mut row.net, net);
                    accumulate(&mut row.gross, gross);
                }
            }
            row
        })
        .collect();
    rank_standings(rows, RankBy::Net)
}
