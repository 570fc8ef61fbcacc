//! Perceptual color difference metrics.
//!
//! CIE76 is plain Euclidean distance in Lab; CIEDE2000 follows the
//! Sharma, Wu & Dalal (2005) formulation and is validated against that
//! paper's reference pairs in the integration tests.

use super::convert::Lab;

/// CIE76 color difference: Euclidean distance in Lab space.
///
/// Symmetric, zero iff the inputs are identical, and obeys the triangle
/// inequality. A ΔE near 2.3 is roughly one just-noticeable difference.
#[must_use]
pub fn delta_e_76(a: Lab, b: Lab) -> f64 {
    ((a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)).sqrt()
}

/// 25^7, the chroma blend constant used throughout CIEDE2000.
const POW25_7: f64 = 6_103_515_625.0;

/// What: CIEDE2000 color difference with unit weighting factors.
///
/// Inputs:
/// - `lab1`, `lab2`: Lab coordinates (D65).
///
/// Output:
/// - Non-negative ΔE00; zero for identical inputs.
///
/// Details:
/// - Implements the G-corrected a' axes, circular Δh' with the
///   three-branch rule, the T cosine series, and the R_T rotation term
///   centered at 275 degrees, exactly as published.
/// - kL, kC, kH are fixed at 1.0; the reports never vary them.
#[must_use]
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let (k_l, k_c, k_h) = (1.0, 1.0, 1.0);

    // Step 1: C' and h'
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_avg = (c1 + c2) / 2.0;
    let c_avg7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg7 / (c_avg7 + POW25_7)).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);

    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);

    let h1p = lab1.b.atan2(a1p).to_degrees().rem_euclid(360.0);
    let h2p = lab2.b.atan2(a2p).to_degrees().rem_euclid(360.0);

    // Step 2: deltas
    let dlp = lab2.l - lab1.l;
    let dcp = c2p - c1p;

    let dhp = if c1p * c2p == 0.0 {
        0.0
    } else if (h2p - h1p).abs() <= 180.0 {
        h2p - h1p
    } else if h2p - h1p > 180.0 {
        h2p - h1p - 360.0
    } else {
        h2p - h1p + 360.0
    };

    let dh_term = 2.0 * (c1p * c2p).sqrt() * (dhp / 2.0).to_radians().sin();

    // Step 3: averages and weighting functions
    let lp_avg = (lab1.l + lab2.l) / 2.0;
    let cp_avg = (c1p + c2p) / 2.0;

    let hp_avg = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_avg - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_avg).to_radians().cos()
        + 0.32 * (3.0 * hp_avg + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_avg - 63.0).to_radians().cos();

    let s_l = 1.0 + 0.015 * (lp_avg - 50.0).powi(2) / (20.0 + (lp_avg - 50.0).powi(2)).sqrt();
    let s_c = 1.0 + 0.045 * cp_avg;
    let s_h = 1.0 + 0.015 * cp_avg * t;

    let cp_avg7 = cp_avg.powi(7);
    let r_c = 2.0 * (cp_avg7 / (cp_avg7 + POW25_7)).sqrt();
    let d_theta = 30.0 * (-((hp_avg - 275.0) / 25.0).powi(2)).exp();
    let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

    let l_term = dlp / (k_l * s_l);
    let c_term = dcp / (k_c * s_c);
    let h_term = dh_term / (k_h * s_h);

    (l_term.powi(2) + c_term.powi(2) + h_term.powi(2) + r_t * c_term * h_term).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb, rgb_to_lab};

    /// What: CIE76 is zero on identical inputs and symmetric.
    ///
    /// - Input: A fixed Lab point and a red/blue pair.
    /// - Output: Zero self-distance, equal distances in both directions.
    #[test]
    fn delta_e_76_basics() {
        let lab = Lab { l: 50.0, a: 10.0, b: -5.0 };
        assert!(delta_e_76(lab, lab).abs() < f64::EPSILON);

        let red = rgb_to_lab(Rgb { r: 255, g: 0, b: 0 });
        let blue = rgb_to_lab(Rgb { r: 0, g: 0, b: 255 });
        assert!((delta_e_76(red, blue) - delta_e_76(blue, red)).abs() < 1e-12);
    }

    /// What: black and white sit far apart, near-identical grays close.
    ///
    /// - Input: Extremes of the gray axis and two adjacent grays.
    /// - Output: ΔE > 90 for the extremes, < 2 for the neighbors.
    #[test]
    fn delta_e_76_extremes() {
        let black = rgb_to_lab(Rgb { r: 0, g: 0, b: 0 });
        let white = rgb_to_lab(Rgb { r: 255, g: 255, b: 255 });
        assert!(delta_e_76(black, white) > 90.0);

        let g1 = rgb_to_lab(Rgb { r: 100, g: 100, b: 100 });
        let g2 = rgb_to_lab(Rgb { r: 101, g: 101, b: 101 });
        assert!(delta_e_76(g1, g2) < 2.0);
    }

    /// What: CIEDE2000 is zero for identical inputs and symmetric under
    /// unit weighting.
    ///
    /// - Input: A saturated Lab point and a swapped pair.
    /// - Output: Zero self-distance; the swapped pair agrees to 1e-9.
    #[test]
    fn delta_e_2000_identity_and_symmetry() {
        let lab = Lab { l: 61.0, a: -5.0, b: 29.0 };
        assert!(delta_e_2000(lab, lab).abs() < 1e-12);

        let a = Lab { l: 50.0, a: 2.5, b: 0.0 };
        let b = Lab { l: 73.0, a: 25.0, b: -18.0 };
        assert!((delta_e_2000(a, b) - delta_e_2000(b, a)).abs() < 1e-9);
    }

    /// What: the achromatic branch (C' product zero) does not divide by
    /// zero or produce NaN.
    ///
    /// - Input: A gray against a chromatic color.
    /// - Output: A finite positive difference.
    #[test]
    fn delta_e_2000_achromatic_branch() {
        let gray = Lab { l: 50.0, a: 0.0, b: 0.0 };
        let teal = Lab { l: 50.0, a: -30.0, b: -10.0 };
        let de = delta_e_2000(gray, teal);
        assert!(de.is_finite() && de > 0.0);
    }
}
