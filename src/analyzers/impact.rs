/// Linear energy/carbon/water impact projection.
///
/// A single midpoint coefficient turns total tokens into kWh, and grid and
/// water factors fan that out. Deliberately crude: no load dependence, no
/// per-model curves.
use crate::analyzers::types::ImpactEstimate;
use crate::metrics::round4;
use crate::rules::ImpactCoefficients;

/// Project the impact of one invocation from input tokens plus output cap.
///
/// All three fields are rounded to four decimal places.
pub fn estimate(
    token_estimate: usize,
    output_cap: u32,
    coefficients: &ImpactCoefficients,
) -> ImpactEstimate {
    let total_tokens = token_estimate as f64 + output_cap as f64;
    let energy_kwh = (total_tokens / 1000.0) * coefficients.kwh_per_1k_tokens_mid;

    ImpactEstimate {
        energy_kwh: round4(energy_kwh),
        co2e_kg: round4(energy_kwh * coefficients.grid_kg_co2_per_kwh),
        water_liters: round4(energy_kwh * coefficients.water_l_per_kwh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleConfig;

    #[test]
    fn test_estimate_is_linear_in_output_cap() {
        let coefficients = RuleConfig::new().impact;
        // Empty prompt: total tokens equal the cap, so doubling the cap
        // doubles every field exactly (values chosen to round cleanly).
        let small = estimate(0, 10_000, &coefficients);
        let large = estimate(0, 20_000, &coefficients);
        assert_eq!(large.energy_kwh, small.energy_kwh * 2.0);
        assert_eq!(large.co2e_kg, small.co2e_kg * 2.0);
        assert_eq!(large.water_liters, small.water_liters * 2.0);
    }

    #[test]
    fn test_estimate_values() {
        let coefficients = ImpactCoefficients {
            kwh_per_1k_tokens_mid: 0.0005,
            grid_kg_co2_per_kwh: 0.4,
            water_l_per_kwh: 1.8,
        };
        let impact = estimate(1_000, 1_000, &coefficients);
        assert_eq!(impact.energy_kwh, 0.001);
        assert_eq!(impact.co2e_kg, 0.0004);
        assert_eq!(impact.water_liters, 0.0018);
    }

    #[test]
    fn test_estimate_non_negative_on_empty_input() {
        let coefficients = RuleConfig::new().impact;
        let impact = estimate(0, 0, &coefficients);
        assert_eq!(impact.energy_kwh, 0.0);
        assert_eq!(impact.co2e_kg, 0.0);
        assert_eq!(impact.water_liters, 0.0);
    }
}
