/// Share of the working set already passed, counting the current card.
pub fn progress_percent(position: Option<usize>, len: usize) -> f64 {
    match position {
        Some(p) if len > 0 => (p + 1) as f64 / len as f64 * 100.0,
        _ => 0.0,
    }
}

/// Cards marked known relative to the current working-set size, rounded.
///
/// The denominator follows the live category filter, so the same score reads
/// differently after the filter changes. Can exceed 100.
pub fn mastery_percent(score: u32, len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        (score as f64 / len as f64 * 100.0).round() as u32
    }
}
