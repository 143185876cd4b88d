//! Minimal 3-vector arithmetic on `[f64; 3]` positions.

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scaled(a: [f64; 3], factor: f64) -> [f64; 3] {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(a, b))
}

/// Arithmetic mean of a set of positions, `None` when empty.
pub fn barycenter<I>(positions: I) -> Option<[f64; 3]>
where
    I: IntoIterator<Item = [f64; 3]>,
{
    let mut sum = [0.0; 3];
    let mut count = 0usize;
    for p in positions {
        sum = add(sum, p);
        count += 1;
    }
    (count > 0).then(|| scaled(sum, 1.0 / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn distance_of_pythagorean_triple() {
        assert!(approx_eq(distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]), 5.0, 1e-12));
        assert!(approx_eq(norm([0.0, 0.0, -2.0]), 2.0, 1e-12));
    }

    #[test]
    fn barycenter_of_points() {
        let center = barycenter([[0.0, 0.0, 0.0], [2.0, 4.0, 0.0], [4.0, 2.0, 3.0]]).unwrap();
        assert!(approx_eq(center[0], 2.0, 1e-12));
        assert!(approx_eq(center[1], 2.0, 1e-12));
        assert!(approx_eq(center[2], 1.0, 1e-12));
    }

    #[test]
    fn barycenter_of_nothing_is_none() {
        assert!(barycenter(std::iter::empty()).is_none());
    }
}
