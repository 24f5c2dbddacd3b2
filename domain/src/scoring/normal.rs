//! Standard normal distribution helpers for the IQ scale (mean 100, SD 15)

/// Population mean of the IQ scale
pub const MEAN_IQ: f64 = 100.0;
/// Population standard deviation of the IQ scale
pub const SD_IQ: f64 = 15.0;

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Standard normal CDF, Abramowitz-Stegun 7.1.26 approximation of erf.
///
/// Absolute error is below 1.5e-7.
pub fn normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Percentile rank of an index score, one decimal place
pub fn percentile_rank(score: f64) -> f64 {
    let z = (score - MEAN_IQ) / SD_IQ;
    (normal_cdf(z) * 1000.0).round() / 10.0
}

/// Percentile rank rounded to a whole number
pub fn percentile(score: f64) -> u8 {
    let z = (score - MEAN_IQ) / SD_IQ;
    (normal_cdf(z) * 100.0).round().clamp(0.0, 100.0) as u8
}
