//! Activation functions used when interpreting raw network outputs.

/// Logistic sigmoid, mapping a raw logit into (0, 1).
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// In-place softmax over a slice of raw logits.
///
/// The maximum logit is subtracted before exponentiation so large logits do
/// not overflow. The result is a probability distribution summing to 1.
pub fn softmax(logits: &mut [f32]) {
    if logits.is_empty() {
        return;
    }

    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut sum = 0.0;
    for v in logits.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in logits.iter_mut() {
        *v /= sum;
    }
}

/// Index of the largest value in a probability vector.
///
/// Ties resolve to the earliest index. Expects a non-empty slice of finite
/// values, which softmax output always is.
#[inline]
pub fn argmax(probs: &[f32]) -> usize {
    let mut best = 0;
    for (i, &p) in probs.iter().enumerate().skip(1) {
        if p > probs[best] {
            best = i;
        }
    }
    best
}
