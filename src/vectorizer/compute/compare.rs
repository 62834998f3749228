use num::Float;

/// Vector comparison kernels over dense, equally long vectors.
/// Everything is accumulated in `f64`.
pub trait Compare<N>
where
    N: Float,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: &[N]) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// 0.0 when either magnitude is zero
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
    /// ユークリッド距離
    /// d(a, b) = sqrt(Σ((a_i - b_i)^2))
    fn euclidean_distance(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

#[inline(always)]
fn f64_of<N: Float>(v: N) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

impl<N> Compare<N> for DefaultCompare
where
    N: Float,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        vec.iter()
            .zip(other.iter())
            .map(|(&a, &b)| f64_of(a) * f64_of(b))
            .sum()
    }

    #[inline]
    fn norm(vec: &[N]) -> f64 {
        vec.iter()
            .map(|&a| {
                let a = f64_of(a);
                a * a
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute cosine similarity."
        );
        let mut dot = 0_f64;
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        for (&a, &b) in vec.iter().zip(other.iter()) {
            let (a, b) = (f64_of(a), f64_of(b));
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
    }

    #[inline]
    fn euclidean_distance(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute euclidean distance."
        );
        vec.iter()
            .zip(other.iter())
            .map(|(&a, &b)| {
                let diff = f64_of(a) - f64_of(b);
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cos(a: &[f64], b: &[f64]) -> f64 {
        <DefaultCompare as Compare<f64>>::cosine_similarity(a, b)
    }

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        assert!((cos(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-12);
        assert!((cos(&[-0.1, -0.1, 0.0], &[-0.1, -0.1, 0.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cos(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_of_opposite_vectors_is_minus_one() {
        assert!((cos(&[1.0, -2.0], &[-1.0, 2.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_similarity_is_zero() {
        assert_eq!(cos(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(cos(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(cos(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cos(&[], &[]), 0.0);
    }

    #[test]
    fn dot_norm_and_distance() {
        let a = [3.0f32, 4.0];
        let b = [0.0f32, 4.0];
        assert_eq!(<DefaultCompare as Compare<f32>>::dot(&a, &b), 16.0);
        assert_eq!(<DefaultCompare as Compare<f32>>::norm(&a), 5.0);
        assert_eq!(<DefaultCompare as Compare<f32>>::euclidean_distance(&a, &b), 3.0);
    }
}
