/// Number of 7-day weeks a plan of `duration` days spans, rounded up.
pub fn weeks_needed(duration: u32) -> u32 {
    duration.div_ceil(7)
}

/// Treats `raw_total` as spread over `weeks_needed(duration)` weeks and extrapolates
/// the weekly figure back over the whole duration. Plans of a week or less keep the
/// raw total. No rounding is applied.
pub fn rescale_total_cost(raw_total: f64, duration: u32) -> f64 {
    if duration <= 7 {
        return raw_total;
    }
    let weeks = weeks_needed(duration);
    let weekly_cost = raw_total / f64::from(weeks);
    weekly_cost * f64::from(duration.div_ceil(7))
}
