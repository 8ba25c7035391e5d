#[cfg(test)]
mod tests {
    use crate::perf::complexity::{BigO, fit, fit_curve};

    fn samples(f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
        [32.0, 512.0, 1024.0, 2048.0, 4096.0].iter().map(|&n| (n, f(n))).collect()
    }

    #[test]
    fn test_fit_quadratic() {
        let result = fit(&samples(|n| 3.0 * n * n)).expect("fit");
        assert_eq!(result.big_o, BigO::ON2);
        assert!((result.coefficient - 3.0).abs() < 1e-9);
        assert!(result.rms < 1e-9);
    }

    #[test]
    fn test_fit_linear_and_nlogn() {
        assert_eq!(fit(&samples(|n| 0.5 * n)).expect("fit").big_o, BigO::ON);
        assert_eq!(fit(&samples(|n| 2.0 * n * n.log2())).expect("fit").big_o, BigO::ONLogN);
        assert_eq!(fit(&samples(|n| n * n * n)).expect("fit").big_o, BigO::ON3);
    }

    #[test]
    fn test_fit_constant() {
        let result = fit(&samples(|_| 7.0)).expect("fit");
        assert_eq!(result.big_o, BigO::O1);
        assert!((result.coefficient - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_rejects_degenerate_input() {
        assert!(fit(&[(10.0, 1.0)]).is_err());
        let err = fit(&[(10.0, 1.0), (10.0, 2.0)]).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_fit_curve_reports_normalized_rms() {
        let data = [(1.0, 1.0), (2.0, 3.0)];
        let linear = fit_curve(&data, BigO::ON);
        // coef = (1 + 6) / (1 + 4) = 1.4; residuals -0.4, 0.2
        assert!((linear.coefficient - 1.4).abs() < 1e-12);
        let expected = ((0.16f64 + 0.04) / 2.0).sqrt() / 2.0;
        assert!((linear.rms - expected).abs() < 1e-12);
        assert_eq!(linear.to_string(), format!("1.4000 N (rms {:.1}%)", expected * 100.0));
    }
}
