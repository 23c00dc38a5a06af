/// Cosine similarity between two vectors of equal dimension.
///
/// Zero-norm vectors (empty documents, out-of-vocabulary documents) map to
/// 0.0 instead of dividing by zero. The result is clamped to [0, 1] to
/// absorb floating-point drift just above 1.0.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Round a similarity score to 4 decimal digits, the precision the service
/// has always reported.
///
/// `f64::round` ties away from zero; divergence from other rounding modes
/// only shows up at the 5th decimal and is accepted.
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
