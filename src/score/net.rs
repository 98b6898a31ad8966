/// Net score for a hole. Absent when no gross score was entered.
#[must_use]
pub fn net_score(gross: Option<i32>, strokes_received: i32) -> Option<i32> {
    gross.map(|g| g.saturating_sub(strokes_received))
}

/// Gross score implied by a net score and the strokes received.
#[must_use]
pub fn gross_from_net(net: i32, strokes_received: i32) -> i32 {
    net.saturating_add(strokes_received)
}
