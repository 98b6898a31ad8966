use super::team::accumulate;
use crate::model::{Entrant, PlayerId, Standing};
use crate::score::context::RoundContext;
use crate::score::sort_utils::{RankBy, rank_standings};

fn player_standing(ctx: &RoundContext<'_>, id: PlayerId) -> Standing {
    let mut row = Standing {
        position: 0,
        tied: false,
        entrant: Entrant::Player {
            id,
            name: ctx.player_name(id),
        },
        gross: None,
        net: None,
        points: None,
        holes_played: 0,
        handicap: ctx.player(id).map(|p| p.handicap),
    };

    for hole in ctx.holes() {
        let result = ctx.hole_result(id, hole);
        let Some(gross) = result.gross else {
            continue;
        };
        row.holes_played += 1;
        accumulate(&mut row.gross, gross);
        if let Some(net) = result.net {
            accumulate(&mut row.net, net);
        }
        if let Some(points) = result.points {
            accumulate(&mut row.points, points);
        }
    }

    row
}

/// Individual stroke play, lowest net total first.
#[must_use]
pub fn stroke_play(ctx: &RoundContext<'_>) -> Vec<Standing> {
    let rows = ctx
        .game()
        .players
        .iter()
        .map(|id| player_standing(ctx, *id))
        .collect();
    rank_standings(rows, RankBy::Net)
}

/// Individual Stableford, most points first.
#[must_use]
pub fn stableford(ctx: &RoundContext<'_>) -> Vec<Standing> {
    let rows = ctx
        .game()
        .players
        .iter()
        .map(|id| player_standing(ctx, *id))
        .collect();
    rank_standings(rows, RankBy::Points)
}
