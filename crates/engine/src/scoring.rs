//! Composite factor scoring.

use sifter_math::{FactorRange, MinMaxScaler};
use sifter_primitives::{
    CompanyRecord, FactorWeights, NormalizedFactors, ScoreFactor, ScoredRecord,
};

/// Score a cohort of records against a weight configuration.
///
/// Each scoring factor is min-max normalized over the cohort, so the
/// cohort's minimum maps to 0 and its maximum to 1; a factor that is
/// constant across the cohort resolves to the scaler's fallback constant
/// for every record. The composite is the weighted sum of
/// direction-adjusted normalized values:
///
/// ```text
/// score = (1 - nPE)·wPE + (1 - nPB)·wPB + nROE·wROE + nEPS·wEPS
/// ```
///
/// The sum is deliberately not divided by the weight total: the score is a
/// relative ranking value, comparable only within one weight configuration.
///
/// Records with incomplete fundamentals are excluded and do not participate
/// in the normalization statistics. Output order matches input order.
#[must_use]
pub fn score_cohort(records: &[CompanyRecord], weights: &FactorWeights) -> Vec<ScoredRecord> {
    let cohort: Vec<&CompanyRecord> =
        records.iter().filter(|r| r.has_complete_fundamentals()).collect();

    let Some(ranges) = factor_ranges(&cohort) else {
        return Vec::new();
    };

    let scaler = MinMaxScaler::default();
    cohort.into_iter().filter_map(|r| score_record(r, &ranges, scaler, weights)).collect()
}

/// Per-factor cohort ranges, in `ScoreFactor::ALL` order.
fn factor_ranges(cohort: &[&CompanyRecord]) -> Option<[FactorRange; 4]> {
    let range_of = |factor: ScoreFactor| {
        FactorRange::from_values(cohort.iter().filter_map(|r| factor.value(r)))
    };

    Some([
        range_of(ScoreFactor::PeRatio)?,
        range_of(ScoreFactor::PbRatio)?,
        range_of(ScoreFactor::Roe)?,
        range_of(ScoreFactor::EpsGrowth)?,
    ])
}

fn score_record(
    record: &CompanyRecord,
    ranges: &[FactorRange; 4],
    scaler: MinMaxScaler,
    weights: &FactorWeights,
) -> Option<ScoredRecord> {
    let mut normalized = [0.0_f64; 4];
    for (slot, (factor, range)) in
        normalized.iter_mut().zip(ScoreFactor::ALL.into_iter().zip(ranges))
    {
        *slot = scaler.scale(*range, factor.value(record)?);
    }

    let score: f64 = ScoreFactor::ALL
        .into_iter()
        .zip(normalized)
        .map(|(factor, norm)| factor.direction().adjust(norm) * weights.weight(factor))
        .sum();

    Some(ScoredRecord {
        record: record.clone(),
        normalized: NormalizedFactors {
            pe_ratio: normalized[0],
            pb_ratio: normalized[1],
            roe: normalized[2],
            eps_growth: normalized[3],
        },
        score,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use sifter_math::DEGENERATE_FALLBACK;

    use super::*;

    fn record(ticker: &str, pe: f64, pb: f64, roe: f64, de: f64, eps: f64) -> CompanyRecord {
        let mut r = CompanyRecord::new(ticker);
        r.pe_ratio = Some(pe);
        r.pb_ratio = Some(pb);
        r.roe = Some(roe);
        r.debt_to_equity = Some(de);
        r.eps_growth = Some(eps);
        r
    }

    fn three_company_cohort() -> Vec<CompanyRecord> {
        vec![
            record("A", 10.0, 1.0, 0.20, 0.5, 0.15),
            record("B", 20.0, 2.0, 0.10, 1.0, 0.05),
            record("C", 30.0, 3.0, 0.05, 2.0, 0.00),
        ]
    }

    #[test]
    fn equal_weights_reference_cohort() {
        let scored = score_cohort(&three_company_cohort(), &FactorWeights::default());

        assert_eq!(scored.len(), 3);
        // A has the best value of every factor, C the worst.
        assert_relative_eq!(scored[0].score, 1.0, epsilon = 1e-12);
        assert_relative_eq!(scored[2].score, 0.0, epsilon = 1e-12);
        assert!(scored[1].score > scored[2].score && scored[1].score < scored[0].score);
    }

    #[test]
    fn normalized_values_bounded() {
        let scored = score_cohort(&three_company_cohort(), &FactorWeights::default());

        for s in &scored {
            for factor in ScoreFactor::ALL {
                let v = s.normalized.get(factor);
                assert!((0.0..=1.0).contains(&v), "{factor} out of bounds: {v}");
            }
        }
        // Cohort extremes map to the ends of the interval.
        assert_relative_eq!(scored[0].normalized.pe_ratio, 0.0);
        assert_relative_eq!(scored[2].normalized.pe_ratio, 1.0);
    }

    #[test]
    fn constant_factor_resolves_to_fallback_not_nan() {
        let cohort = vec![
            record("A", 15.0, 1.0, 0.20, 0.5, 0.15),
            record("B", 15.0, 2.0, 0.10, 1.0, 0.05),
        ];
        let scored = score_cohort(&cohort, &FactorWeights::default());

        for s in &scored {
            assert_relative_eq!(s.normalized.pe_ratio, DEGENERATE_FALLBACK);
            assert!(s.score.is_finite());
        }
    }

    #[test]
    fn singleton_cohort_scores_finite() {
        let scored =
            score_cohort(&[record("ONLY", 12.0, 1.5, 0.3, 0.4, 0.1)], &FactorWeights::default());

        assert_eq!(scored.len(), 1);
        assert!(scored[0].score.is_finite());
    }

    #[test]
    fn incomplete_records_never_scored() {
        let mut cohort = three_company_cohort();
        cohort.push(CompanyRecord::new("GAP"));

        let scored = score_cohort(&cohort, &FactorWeights::default());

        assert_eq!(scored.len(), 3);
        assert!(scored.iter().all(|s| s.ticker() != "GAP"));
    }

    #[test]
    fn all_zero_weights_give_uniform_zero() {
        let scored = score_cohort(&three_company_cohort(), &FactorWeights::equal(0.0));
        assert!(scored.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn zero_weight_makes_factor_inert() {
        // Only ROE weighted: the P/E spread must not affect ordering.
        let weights = FactorWeights::new(0.0, 0.0, 1.0, 0.0);
        let cohort = vec![
            record("HIGH_ROE", 99.0, 9.0, 0.30, 1.0, 0.0),
            record("LOW_ROE", 1.0, 0.5, 0.01, 1.0, 0.0),
        ];

        let scored = score_cohort(&cohort, &weights);
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn raising_roe_within_range_never_lowers_score() {
        let mut cohort = three_company_cohort();
        let base = score_cohort(&cohort, &FactorWeights::default());

        // B's ROE moves up but stays inside the cohort [0.05, 0.20] range.
        cohort[1].roe = Some(0.15);
        let bumped = score_cohort(&cohort, &FactorWeights::default());

        assert!(bumped[1].score >= base[1].score);
    }

    #[test]
    fn empty_input_scores_nothing() {
        assert!(score_cohort(&[], &FactorWeights::default()).is_empty());
    }

    #[test]
    fn duplicate_tickers_scored_independently() {
        let cohort = vec![
            record("DUP", 10.0, 1.0, 0.20, 0.5, 0.15),
            record("DUP", 30.0, 3.0, 0.05, 2.0, 0.00),
        ];
        let scored = score_cohort(&cohort, &FactorWeights::default());

        assert_eq!(scored.len(), 2);
        assert!(scored[0].score > scored[1].score);
    }
}
