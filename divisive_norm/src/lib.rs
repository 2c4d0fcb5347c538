mod config;
use log::debug;

pub use crate::config::*;

/// Runs the divisive-normalization pipeline on one input snapshot.
///
/// Each raw alignment is divided by one plus twice the sum of all three
/// candidates' alignments on that same policy dimension:
///
/// ```text
/// normalized[i][dim] = raw[i][dim] / (1 + 2 * colsum[dim])
/// ```
///
/// A candidate's normalized alignment therefore depends on every candidate's
/// raw alignment on that dimension. Moving an "irrelevant" candidate C
/// changes the relative standing of A and B, which is the violation of the
/// independence of irrelevant alternatives this demo illustrates.
///
/// The function is pure and infallible: inputs are range-constrained
/// upstream, and the denominator is at least 1 for in-range inputs so the
/// division is always defined. Identical inputs yield bit-identical series.
pub fn evaluate(inputs: &DemoInputs) -> PlotSeries {
    let colsum_social: f64 = inputs.positions.iter().map(|p| p.social).sum();
    let colsum_fiscal: f64 = inputs.positions.iter().map(|p| p.fiscal).sum();
    let denom_social = 1.0 + 2.0 * colsum_social;
    let denom_fiscal = 1.0 + 2.0 * colsum_fiscal;
    debug!(
        "evaluate: colsum_social: {} colsum_fiscal: {} denominators: {} {}",
        colsum_social, colsum_fiscal, denom_social, denom_fiscal
    );

    let points =
        std::array::from_fn(|idx| (CandidateLabel::ALL[idx], inputs.positions[idx]));
    let scores = std::array::from_fn(|idx| {
        let pos = inputs.positions[idx];
        let social = pos.social / denom_social;
        let fiscal = pos.fiscal / denom_fiscal;
        CandidateScore {
            label: CandidateLabel::ALL[idx],
            social,
            fiscal,
            total: social + fiscal,
        }
    });
    PlotSeries { points, scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOL,
            "expected {} within {} of {}",
            actual,
            TOL,
            expected
        );
    }

    fn inputs(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> DemoInputs {
        DemoInputs {
            positions: [
                PolicyPosition::new(a.0, a.1),
                PolicyPosition::new(b.0, b.1),
                PolicyPosition::new(c.0, c.1),
            ],
            weight: 1.0,
        }
    }

    #[test]
    fn scores_are_non_negative() {
        let grid = [0.0, 0.25, 0.5, 0.75, 1.0];
        for &x in grid.iter() {
            for &y in grid.iter() {
                let series = evaluate(&inputs((x, y), (y, x), (x, x)));
                for s in series.scores.iter() {
                    assert!(s.social >= 0.0);
                    assert!(s.fiscal >= 0.0);
                    assert!(s.total >= 0.0);
                }
            }
        }
    }

    #[test]
    fn raising_c_lowers_a_and_b_on_the_same_dimension() {
        let before = evaluate(&inputs((0.2, 0.8), (0.8, 0.2), (0.1, 0.1)));
        let after = evaluate(&inputs((0.2, 0.8), (0.8, 0.2), (0.6, 0.1)));
        // Divisive coupling: only C's raw social value moved, yet the
        // normalized social contributions of A and B both strictly drop.
        assert!(after.scores[0].social < before.scores[0].social);
        assert!(after.scores[1].social < before.scores[1].social);
        // The fiscal column was untouched.
        assert_eq!(after.scores[0].fiscal, before.scores[0].fiscal);
        assert_eq!(after.scores[1].fiscal, before.scores[1].fiscal);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let snapshot = inputs((0.37, 0.91), (0.58, 0.13), (0.2, 0.44));
        let first = evaluate(&snapshot);
        let second = evaluate(&snapshot);
        for (s1, s2) in first.scores.iter().zip(second.scores.iter()) {
            assert_eq!(s1.social.to_bits(), s2.social.to_bits());
            assert_eq!(s1.fiscal.to_bits(), s2.fiscal.to_bits());
            assert_eq!(s1.total.to_bits(), s2.total.to_bits());
        }
    }

    #[test]
    fn all_zero_inputs_give_all_zero_scores() {
        let series = evaluate(&inputs((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)));
        for s in series.scores.iter() {
            assert_eq!(s.social, 0.0);
            assert_eq!(s.fiscal, 0.0);
            assert_eq!(s.total, 0.0);
        }
        assert_eq!(series.score_axis_max(), 0.0);
    }

    #[test]
    fn all_one_inputs_preserve_symmetry() {
        // Column sums of 3 give a denominator of 7 on both dimensions.
        let series = evaluate(&inputs((1.0, 1.0), (1.0, 1.0), (1.0, 1.0)));
        for s in series.scores.iter() {
            assert_close(s.social, 1.0 / 7.0);
            assert_close(s.fiscal, 1.0 / 7.0);
            assert_close(s.total, 2.0 / 7.0);
        }
    }

    #[test]
    fn default_positions_tie_a_and_b() {
        let series = evaluate(&DemoInputs::DEFAULT);
        // Column sums are 1.1 on both dimensions, denominators 3.2.
        assert_close(series.scores[0].social, 0.0625);
        assert_close(series.scores[0].fiscal, 0.25);
        assert_close(series.scores[0].total, 0.3125);
        assert_close(series.scores[1].total, 0.3125);
        assert_close(series.scores[2].total, 0.0625);
        assert_close(series.score_axis_max(), 0.3125 * 1.1);
        // The scatter side carries the raw positions untouched.
        for label in CandidateLabel::ALL {
            assert_eq!(
                series.points[label as usize].1,
                DemoInputs::DEFAULT.position(label)
            );
        }
    }

    #[test]
    fn iia_violation_scenario() {
        // From the defaults, move C's social alignment from 0.1 to 0.5. A and
        // B are unchanged in raw terms, yet A's aggregate strictly drops.
        let before = evaluate(&DemoInputs::DEFAULT);
        let after = evaluate(&inputs((0.2, 0.8), (0.8, 0.2), (0.5, 0.1)));
        assert_close(before.scores[0].social, 0.0625);
        assert_close(after.scores[0].social, 0.05);
        assert!(after.scores[0].total < before.scores[0].total);
        assert_eq!(after.points[0].1, before.points[0].1);
        assert_eq!(after.points[1].1, before.points[1].1);
    }

    #[test]
    fn weight_does_not_enter_the_formula() {
        let mut snapshot = DemoInputs::DEFAULT;
        let reference = evaluate(&snapshot);
        snapshot.weight = 2.0;
        let reweighted = evaluate(&snapshot);
        for (s1, s2) in reference.scores.iter().zip(reweighted.scores.iter()) {
            assert_eq!(s1.total.to_bits(), s2.total.to_bits());
        }
    }
}
