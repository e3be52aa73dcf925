//! Brent's method for bracketed scalar roots.
//!
//! Combines bisection, secant and inverse quadratic interpolation steps so the
//! interval always shrinks, which keeps the search robust on the flat tails of
//! score curves where pure interpolation stalls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindError {
    #[error("root is not bracketed: f({a}) = {fa}, f({b}) = {fb}")]
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("no convergence after {0} iterations")]
    MaxIterations(usize),
}

/// Tolerances for [`brent`]
#[derive(Debug, Clone, Copy)]
pub struct RootFindConfig {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iterations: usize,
}

impl Default for RootFindConfig {
    fn default() -> Self {
        Self {
            xtol: 1e-10,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

/// Find `x` in `[a, b]` with `f(x) = 0`; `f(a)` and `f(b)` must differ in sign
pub fn brent<F>(f: F, a: f64, b: f64, config: RootFindConfig) -> Result<f64, RootFindError>
where
    F: Fn(f64) -> f64,
{
    let (mut xpre, mut xcur) = (a, b);
    let (mut fpre, mut fcur) = (f(xpre), f(xcur));

    if fpre == 0.0 {
        return Ok(xpre);
    }
    if fcur == 0.0 {
        return Ok(xcur);
    }
    if fpre.is_nan() || fcur.is_nan() || fpre.signum() == fcur.signum() {
        return Err(RootFindError::NotBracketed {
            a,
            b,
            fa: fpre,
            fb: fcur,
        });
    }

    let (mut xblk, mut fblk) = (0.0, 0.0);
    let (mut spre, mut scur) = (0.0, 0.0);

    for _ in 0..config.max_iterations {
        if fpre.signum() != fcur.signum() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (config.xtol + config.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }

    Err(RootFindError::MaxIterations(config.max_iterations))
}
