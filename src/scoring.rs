use rand::Rng;

const IMAGE_BONUS: u64 = 5;

/// Maps an activity to a point value by keyword, drawn uniformly from a
/// band per keyword class. First match wins; "recycle" is checked before
/// "cycle" so recycling never falls into the walk/cycle band. Callers pass
/// `rand::rng()` in production and a deterministic generator in tests.
pub fn determine_points<R: Rng + ?Sized>(
    title: &str,
    category: &str,
    has_image: bool,
    rng: &mut R,
) -> u64 {
    let t = title.to_lowercase();
    let c = category.to_lowercase();

    let base = if t.contains("plant") || t.contains("tree") {
        rng.random_range(50..=70)
    } else if t.contains("recycle") || c.contains("recycle") {
        rng.random_range(10..=24)
    } else if t.contains("plastic") || t.contains("avoid") {
        rng.random_range(5..=15)
    } else if t.contains("walk") || t.contains("cycle") {
        rng.random_range(10..=30)
    } else if t.contains("clean") {
        rng.random_range(20..=40)
    } else {
        rng.random_range(5..=50)
    };

    base + if has_image { IMAGE_BONUS } else { 0 }
}
