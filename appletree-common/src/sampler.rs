use rand::Rng;

///
/// Pick an index from a discrete distribution given by `weights`.
///
/// Draws `r` uniformly from [0, 1) and returns the first index whose
/// cumulative weight exceeds `r`. Weights are used as-is, never
/// renormalized: when they sum to less than 1 and `r` lands past the last
/// boundary, index 0 is returned.
///
/// Index 0 therefore covers `[0, weights[0])` plus the tail `[sum, 1)`.
///
pub fn choose_weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > r {
            return i;
        }
    }
    0
}
