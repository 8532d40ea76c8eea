//! grouping::prewhiten — univariate AR pre-whitening by AIC.
//!
//! Each component series can be replaced by the residuals of a fitted
//! AR(q) model before pairwise cross-correlations are computed, which
//! removes univariate serial dependence that would otherwise inflate
//! the linkage statistics. The order `q` is selected over `0..=5` by
//! the Akaike Information Criterion; fitting is delegated to the
//! `arima` crate. Candidate orders whose fit fails are skipped, and the
//! order-0 candidate (the centred series itself) is always admissible,
//! so selection cannot fail outright.

use arima::estimate;

/// Largest AR order considered by the AIC selection.
pub(crate) const MAX_AR_ORDER: usize = 5;

/// Pre-whiten one series by its best AR fit in orders 0..=5.
///
/// For order 0 the candidate residuals are the centred series with
/// AIC = n·ln σ̂² + 2. For each order `q ≥ 1` the AR coefficients come
/// from `arima::estimate::fit`, residuals from
/// `arima::estimate::residuals`, and AIC = n·ln σ̂² + 2(q + 1). The
/// candidate with the smallest AIC wins; failed fits and degenerate
/// residual variances are skipped rather than aborting the grid.
///
/// # Arguments
/// - `x`: component series, length `n ≥ 2`, finite values (validated
///   upstream).
///
/// # Returns
/// The residual series of the selected fit. A constant input is
/// returned centred (all zeros) without attempting any AR fit.
pub(crate) fn prewhiten_series(x: &[f64]) -> Vec<f64> {
    let n = x.len() as f64;
    let mean = x.iter().sum::<f64>() / n;
    let centred: Vec<f64> = x.iter().map(|&v| v - mean).collect();
    let sigma2_0 = centred.iter().map(|&e| e * e).sum::<f64>() / n;
    if sigma2_0 <= 0.0 {
        return centred;
    }

    let mut best_aic = n * sigma2_0.ln() + 2.0;
    let mut best_resid = centred;

    for order in 1..=MAX_AR_ORDER {
        if x.len() <= order + 1 {
            break;
        }
        let coeff = match estimate::fit(x, order, 0, 0) {
            Ok(c) if c.len() > order => c,
            _ => continue,
        };
        let intercept = coeff[0];
        let phi = &coeff[1..=order];
        let resid = match estimate::residuals(x, intercept, Some(phi), None) {
            Ok(r) if r.len() >= 2 => r,
            _ => continue,
        };
        let m = resid.len() as f64;
        let sigma2 = resid.iter().map(|&e| e * e).sum::<f64>() / m;
        if !(sigma2 > 0.0) || !sigma2.is_finite() {
            continue;
        }
        let aic = m * sigma2.ln() + 2.0 * (order as f64 + 1.0);
        if aic < best_aic {
            best_aic = aic;
            best_resid = resid;
        }
    }
    best_resid
}

/// Pre-whiten every column of a component series collection.
///
/// Residual vectors from different AR orders can differ slightly in
/// length depending on how the fitting backend conditions on initial
/// values; columns are therefore truncated from the front to the
/// shortest residual length so that pairwise statistics always compare
/// aligned, equal-length series.
pub(crate) fn prewhiten_columns(cols: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let whitened: Vec<Vec<f64>> = cols.iter().map(|c| prewhiten_series(c)).collect();
    let min_len = whitened.iter().map(Vec::len).min().unwrap_or(0);
    whitened
        .into_iter()
        .map(|mut c| {
            let excess = c.len() - min_len;
            c.drain(..excess);
            c
        })
        .collect()
}
