use crate::config::StablefordTable;

/// Points for a net score on a hole of the given par.
#[must_use]
pub fn stableford_points(net: Option<i32>, par: i32, table: &StablefordTable) -> Option<i32> {
    let under_par = par.saturating_sub(net?);
    Some(match under_par {
        3.. => table.double_eagle_or_better,
        2 => table.eagle,
        1 => table.birdie,
        0 => table.par,
        -1 => table.bogey,
        _ => table.double_bogey_or_worse,
    })
}
