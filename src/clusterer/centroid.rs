use crate::county::County;

/// Population-weighted mean position and risk of `counties`.
///
/// When every county has zero population the plain mean is used instead.
/// Returns `None` for an empty slice.
pub fn weighted_center(counties: &[&County]) -> Option<((f64, f64), f64)> {
    if counties.is_empty() {
        return None;
    }

    let total: u64 = counties.iter().map(|c| c.population).sum();
    let weight = |c: &County| if total == 0 { 1.0 } else { c.population as f64 };

    let mut x = 0.0;
    let mut y = 0.0;
    let mut risk = 0.0;
    let mut sum = 0.0;

    for &county in counties {
        let w = weight(county);
        x += w * county.x;
        y += w * county.y;
        risk += w * county.risk;
        sum += w;
    }

    Some(((x / sum, y / sum), risk / sum))
}
