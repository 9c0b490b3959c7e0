//! Illustrative tax figures computed from a declared monthly revenue.
//!
//! Two fixed faixa-2 regimes are quoted to the visitor, plus a livro-caixa
//! estimate built from the IRPF progressive table. Everything here is pure
//! arithmetic; persistence and HTTP live elsewhere.

use serde::Serialize;

/// Simples Nacional, faixa 2.
pub const ALIQUOTA_SIMPLES: f64 = 16.75;

/// Equiparação hospitalar, faixa 2.
pub const ALIQUOTA_EQUIPARACAO: f64 = 5.93;

/// Monthly/annual figures for one regime, amounts rounded to centavos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeResult {
    pub mensal: f64,
    pub anual: f64,
    pub aliquota: f64,
}

/// The two fixed-rate quotes returned by the simulation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedRegimes {
    pub simples_nacional: RegimeResult,
    pub equiparacao_hospitalar: RegimeResult,
}

/// Livro-caixa estimate: IRPF over a 20% presumed base, plus ISS and INSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LivroCaixa {
    pub mensal: f64,
    pub anual: f64,
    pub aliquota: f64,
    pub base: f64,
}

/// Quote both fixed regimes. Zero or negative revenue flows through the
/// same arithmetic unchanged.
pub fn simulate_fixed_regimes(faturamento: f64) -> FixedRegimes {
    FixedRegimes {
        simples_nacional: regime(faturamento, ALIQUOTA_SIMPLES),
        equiparacao_hospitalar: regime(faturamento, ALIQUOTA_EQUIPARACAO),
    }
}

fn regime(faturamento: f64, aliquota: f64) -> RegimeResult {
    let mensal = round2(faturamento * aliquota / 100.0);
    let anual = round2(mensal * 12.0);
    RegimeResult {
        mensal,
        anual,
        aliquota,
    }
}

/// Livro-caixa estimate over `base = faturamento * 0.20`.
///
/// IRPF comes from the progressive table applied to the base, floored at
/// zero. ISS is 5% and INSS 11% of revenue. The effective rate is 0.0 for
/// zero revenue rather than a division by zero.
pub fn livro_caixa_estimate(faturamento: f64) -> LivroCaixa {
    let base = faturamento * 0.20;

    let irpf = if base <= 2259.20 {
        0.0
    } else if base <= 2826.65 {
        base * 0.075 - 169.44
    } else if base <= 3751.05 {
        base * 0.15 - 381.44
    } else if base <= 4664.68 {
        base * 0.225 - 662.77
    } else {
        base * 0.275 - 896.00
    };

    let iss = faturamento * 0.05;
    let inss = faturamento * 0.11;

    let mensal = irpf.max(0.0) + iss + inss;
    let anual = mensal * 12.0;
    let aliquota = if faturamento == 0.0 {
        0.0
    } else {
        (mensal / faturamento) * 100.0
    };

    LivroCaixa {
        mensal,
        anual,
        aliquota,
        base,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_simples_nacional_concrete() {
        let result = simulate_fixed_regimes(10000.0);
        assert!(close(result.simples_nacional.mensal, 1675.0, 1e-9));
        assert!(close(result.simples_nacional.anual, 20100.0, 1e-9));
        assert!(close(result.simples_nacional.aliquota, 16.75, 1e-9));
    }

    #[test]
    fn test_equiparacao_concrete() {
        let result = simulate_fixed_regimes(10000.0);
        assert!(close(result.equiparacao_hospitalar.mensal, 593.0, 1e-9));
        assert!(close(result.equiparacao_hospitalar.anual, 7116.0, 1e-9));
        assert!(close(result.equiparacao_hospitalar.aliquota, 5.93, 1e-9));
    }

    #[test]
    fn test_regime_arithmetic_holds_across_revenues() {
        for faturamento in [0.0, 1.0, 137.55, 2500.0, 9999.99, 50000.0] {
            let result = simulate_fixed_regimes(faturamento);
            for (quote, rate) in [
                (result.simples_nacional, ALIQUOTA_SIMPLES),
                (result.equiparacao_hospitalar, ALIQUOTA_EQUIPARACAO),
            ] {
                assert!(close(quote.mensal, round2(faturamento * rate / 100.0), 1e-9));
                assert!(close(quote.anual, round2(quote.mensal * 12.0), 1e-9));
            }
        }
    }

    #[test]
    fn test_zero_and_negative_revenue_flow_through() {
        let zero = simulate_fixed_regimes(0.0);
        assert_eq!(zero.simples_nacional.mensal, 0.0);
        assert_eq!(zero.equiparacao_hospitalar.anual, 0.0);

        let negative = simulate_fixed_regimes(-1000.0);
        assert!(close(negative.simples_nacional.mensal, -167.5, 1e-9));
        assert!(close(negative.equiparacao_hospitalar.mensal, -59.3, 1e-9));
    }

    #[test]
    fn test_livro_caixa_below_first_bracket() {
        // base = 2000, below the exempt ceiling: only ISS + INSS remain.
        let result = livro_caixa_estimate(10000.0);
        assert!(close(result.base, 2000.0, 1e-9));
        assert!(close(result.mensal, 500.0 + 1100.0, 1e-9));
        assert!(close(result.anual, 12.0 * 1600.0, 1e-9));
        assert!(close(result.aliquota, 16.0, 1e-9));
    }

    #[test]
    fn test_livro_caixa_top_bracket() {
        // base = 5000 lands in the 27.5% bracket.
        let result = livro_caixa_estimate(25000.0);
        let irpf = 5000.0 * 0.275 - 896.00;
        assert!(close(result.mensal, irpf + 1250.0 + 2750.0, 1e-9));
    }

    #[test]
    fn test_livro_caixa_zero_revenue_sentinel() {
        let result = livro_caixa_estimate(0.0);
        assert_eq!(result.mensal, 0.0);
        assert_eq!(result.anual, 0.0);
        assert_eq!(result.aliquota, 0.0);
    }

    #[test]
    fn test_irpf_never_negative() {
        // Just past the exempt ceiling the bracket formula is ~0; the
        // monthly total can never dip below ISS + INSS.
        for faturamento in [11296.0, 11296.1, 11300.0, 14000.0] {
            let result = livro_caixa_estimate(faturamento);
            let floor = faturamento * 0.05 + faturamento * 0.11;
            assert!(result.mensal >= floor - 1e-9);
        }
    }

    #[test]
    fn test_bracket_continuity_at_boundaries() {
        // The published IRPF table is continuous to within a centavo or so
        // at each boundary; the jump must stay below a real discontinuity.
        let eps = 1e-6;
        for boundary in [2259.20, 2826.65, 3751.05, 4664.68] {
            let below = livro_caixa_estimate((boundary - eps) * 5.0);
            let above = livro_caixa_estimate((boundary + eps) * 5.0);
            assert!(
                close(below.mensal, above.mensal, 0.01),
                "discontinuity at base {boundary}: {} vs {}",
                below.mensal,
                above.mensal
            );
        }
    }

    #[test]
    fn test_exempt_boundary_is_exact() {
        // At the exempt ceiling both branches agree to float precision.
        let at = livro_caixa_estimate(2259.20 * 5.0);
        let iss_inss = 2259.20 * 5.0 * 0.16;
        assert!(close(at.mensal, iss_inss, 1e-6));
    }
}
