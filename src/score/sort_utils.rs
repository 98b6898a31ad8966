use std::cmp::Ordering;

use crate::model::Standing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBy {
    /// Lowest net total first.
    Net,
    /// Highest points total first.
    Points,
}

impl RankBy {
    fn key(self, s: &Standing) -> Option<i32> {
        match self {
            RankBy::Net => s.net,
            RankBy::Points => s.points,
        }
    }

    fn cmp_values(self, a: i32, b: i32) -> Ordering {
        match self {
            RankBy::Net => a.cmp(&b),
            RankBy::Points => b.cmp(&a),
        }
    }
}

/// Sorts rows and assigns competition positions (1, 1, 3). Rows without a total
/// go last and share the final position. Ties are listed by name.
#[must_use]
pub fn rank_standings(mut rows: Vec<Standing>, by: RankBy) -> Vec<Standing> {
    rows.sort_by(|a, b| {
        let ord = match (by.key(a), by.key(b)) {
            (Some(x), Some(y)) => by.cmp_values(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        ord.then_with(|| a.entrant.name().cmp(b.entrant.name()))
    });

    let keys: Vec<Option<i32>> = rows.iter().map(|r| by.key(r)).collect();
    for (i, row) in rows.iter_mut().enumerate() {
        let first = keys.iter().position(|k| *k == keys[i]).unwrap_or(i);
        row.position = first + 1;
        row.tied = keys.iter().filter(|k| **k == keys[i]).count() > 1;
    }

    rows
}
