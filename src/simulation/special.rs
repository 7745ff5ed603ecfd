//! Incomplete gamma evaluation for the memory kernel
//!
//! Provides log-gamma (Lanczos), the complete gamma function, and the
//! upper incomplete gamma `Γ(s)·(1 − P(s, x))` used at shapes α and α+1.
//! The closed-form antiderivative of the memory kernel over a sub-interval
//! reduces to differences of this function at the interval endpoints, so
//! no nested quadrature is needed
//!
//! Domain is `s > 0`, `x ≥ 0`; both are fixed run constants, never user
//! input, so violations are asserts rather than `Result`s

/// Lanczos series coefficients (g = 5, n = 6)
const LANCZOS_COF: [f64; 6] = [
    76.180_091_729_471_46,
    -86.505_320_329_416_77,
    24.014_098_240_830_91,
    -1.231_739_572_450_155,
    0.120_865_097_386_617_9e-2,
    -0.539_523_938_495_3e-5,
];

const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;

/// Iteration cap shared by the series and the continued fraction.
/// On exhaustion the evaluators return NaN and the solver's finiteness
/// check reports the failing step
const ITMAX: usize = 200;

/// Convergence threshold for both expansions
const EPS: f64 = f64::EPSILON;

/// Floor protecting the Lentz recurrence from vanishing denominators
const FPMIN: f64 = 1.0e-300;

/// Natural log of the gamma function for `x > 0` (Lanczos approximation)
pub fn ln_gamma(x: f64) -> f64 {
    assert!(x > 0.0, "ln_gamma domain: x > 0 (got x = {x})");

    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();

    // Partial-fraction sum over the shifted arguments x+1 .. x+6
    let mut y = x;
    let mut ser = 1.000_000_000_190_015;
    for c in LANCZOS_COF {
        y += 1.0;
        ser += c / y;
    }

    -tmp + (SQRT_TWO_PI * ser / x).ln()
}

/// Complete gamma function Γ(x) for `x > 0`
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

/// Upper incomplete gamma `Γ(s)·(1 − P(s, x))` where `P` is the regularized
/// lower incomplete gamma function
///
/// `gamma_s` is the precomputed `Γ(s)` from [`Derived`](crate::Derived);
/// it is threaded in rather than recomputed on every call. At `x = 0` the
/// value is exactly `gamma_s`, and it decreases strictly toward 0 as `x`
/// grows
pub fn upper_inc_gamma(s: f64, x: f64, gamma_s: f64) -> f64 {
    assert!(
        s > 0.0 && x >= 0.0,
        "upper_inc_gamma domain: s > 0, x >= 0 (got s = {s}, x = {x})"
    );

    if x == 0.0 {
        return gamma_s;
    }

    if x < s + 1.0 {
        // The power series for P converges fastest on this side
        gamma_s * (1.0 - lower_series(s, x, gamma_s))
    } else {
        // The continued fraction evaluates Q = 1 - P directly
        gamma_s * upper_continued_fraction(s, x, gamma_s)
    }
}

/// Regularized lower incomplete gamma P(s, x) by power series, valid for
/// `0 < x < s + 1`
fn lower_series(s: f64, x: f64, gamma_s: f64) -> f64 {
    let mut ap = s;
    let mut sum = 1.0 / s;
    let mut del = sum;

    for _ in 0..ITMAX {
        ap += 1.0;
        del *= x / ap;
        sum += del;
        if del.abs() < sum.abs() * EPS {
            // P = sum * x^s e^{-x} / Γ(s)
            return sum * (s * x.ln() - x).exp() / gamma_s;
        }
    }

    f64::NAN
}

/// Regularized upper incomplete gamma Q(s, x) by modified Lentz continued
/// fraction, valid for `x >= s + 1`
fn upper_continued_fraction(s: f64, x: f64, gamma_s: f64) -> f64 {
    let mut b = x + 1.0 - s;
    let mut c = 1.0 / FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=ITMAX {
        let an = -(i as f64) * (i as f64 - s);
        b += 2.0;

        d = an * d + b;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = b + an / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }

        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            // Q = x^s e^{-x} h / Γ(s)
            return (s * x.ln() - x).exp() * h / gamma_s;
        }
    }

    f64::NAN
}
