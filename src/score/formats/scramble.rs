use super::team::{accumulate, team_row};
use crate::model::{Standing, Team, TeamPair};
use crate::score::context::RoundContext;
use crate::score::sort_utils::{RankBy, rank_standings};

/// Display handicap for a scramble team: the mean of both members' indices.
#[must_use]
pub fn team_handicap(ctx: &RoundContext<'_>, team: &Team) -> f64 {
    team.players.iter().map(|id| ctx.handicap(*id)).sum::<f64>() / team.players.len() as f64
}

/// The team's gross on a hole, stored under the first member.
#[must_use]
pub fn scramble_gross(ctx: &RoundContext<'_>, team: &Team, hole: u8) -> Option<i32> {
    if let Some(gross) = ctx.gross(team.first(), hole) {
        return Some(gross);
    }
    let stray = ctx.gross(team.players[1], hole);
    if stray.is_some() {
        log::warn!(
            "scramble score for team {} on hole {hole} is stored under the second member",
            team.name
        );
    }
    stray
}

/// Team gross less the members' average allocation on the hole, rounded.
#[must_use]
pub fn scramble_net(ctx: &RoundContext<'_>, team: &Team, hole: u8) -> Option<i32> {
    let gross = scramble_gross(ctx, team, hole)?;
    let allocation: i32 = team
        .players
        .iter()
        .map(|id| ctx.strokes_received(*id, hole))
        .sum();
    let average = f64::from(allocation) / team.players.len() as f64;
    Some((f64::from(gross) - average).round() as i32)
}

#[must_use]
pub fn scramble(ctx: &RoundContext<'_>, teams: &TeamPair) -> Vec<Standing> {
    let rows = teams
        .teams()
        .into_iter()
        .map(|team| {
            let mut row = team_row(team);
            row.handicap = Some(team_handicap(ctx, team));
            for hole in ctx.holes() {
                let (Some(gross), Some(net)) = (
                    scramble_gross(ctx, team, hole),
                    scramble_net(ctx, team, hole),
                ) else {
                    continue;
                };
                row.holes_played += 1;
                accumulate(&mut row.gross, gross);
                accumulate(&mut row.net, net);
            }
            row
        })
        .collect();
    rank_standings(rows, RankBy::Net)
}
