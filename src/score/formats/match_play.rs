use std::cmp::Ordering;

use super::team::best_ball_net;
use crate::model::{HOLES_PER_ROUND, HoleOutcome, MatchRecord, MatchResult, MatchStatus, TeamPair};
use crate::score::context::RoundContext;

/// Match state after the decided holes, from the leader's point of view.
#[must_use]
pub fn match_status(teams: &TeamPair, record_a: &MatchRecord) -> MatchStatus {
    let decided = record_a.won + record_a.lost + record_a.halved;
    let holes_remaining = HOLES_PER_ROUND.saturating_sub(decided);
    let margin = i16::from(record_a.won) - i16::from(record_a.lost);
    let up = margin.unsigned_abs() as u8;
    let leader = match margin.cmp(&0) {
        Ordering::Greater => Some(teams.a.name.clone()),
        Ordering::Less => Some(teams.b.name.clone()),
        Ordering::Equal => None,
    };
    let closed_out = up > holes_remaining || (holes_remaining == 0 && up > 0);

    MatchStatus {
        leader,
        up,
        holes_remaining,
        dormie: !closed_out && up > 0 && up == holes_remaining,
        closed_out,
    }
}

/// Best ball match play. Only holes where both teams have a best-ball net count.
#[must_use]
pub fn best_ball_match(ctx: &RoundContext<'_>, teams: &TeamPair) -> MatchResult {
    let mut record_a = MatchRecord::default();
    let mut record_b = MatchRecord::default();
    let mut holes = Vec::new();

    for hole in ctx.holes() {
        let (Some(a), Some(b)) = (
            best_ball_net(ctx, &teams.a, hole),
            best_ball_net(ctx, &teams.b, hole),
        ) else {
            continue;
        };

        let outcome = match a.cmp(&b) {
            Ordering::Less => {
                record_a.won += 1;
                record_b.lost += 1;
                HoleOutcome::WonByA
            }
            Ordering::Greater => {
                record_a.lost += 1;
                record_b.won += 1;
                HoleOutcome::WonByB
            }
            Ordering::Equal => {
                record_a.halved += 1;
                record_b.halved += 1;
                HoleOutcome::Halved
            }
        };
        holes.push((hole, outcome));
    }

    let status = match_status(teams, &record_a);
    log::debug!("game {} match status: {status}", ctx.game().id);

    MatchResult {
        team_a: teams.a.name.clone(),
        team_b: teams.b.name.clone(),
        record_a,
        record_b,
        holes,
        status,
    }
}
