// ********* Input data structures ***********

/// The identity of one of the three candidates in the demo.
///
/// There are always exactly three candidates. The ordering is significant
/// for display only.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum CandidateLabel {
    A,
    B,
    C,
}

impl CandidateLabel {
    /// The candidates in display order.
    pub const ALL: [CandidateLabel; 3] = [CandidateLabel::A, CandidateLabel::B, CandidateLabel::C];

    pub fn as_str(self) -> &'static str {
        match self {
            CandidateLabel::A => "A",
            CandidateLabel::B => "B",
            CandidateLabel::C => "C",
        }
    }
}

/// How closely a candidate aligns with the voter on each policy dimension.
///
/// Both coordinates are expected in `POSITION_RANGE`. The range is enforced
/// by the input mechanism (sliders clamping on adjustment), not re-checked by
/// the pipeline.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct PolicyPosition {
    pub social: f64,
    pub fiscal: f64,
}

impl PolicyPosition {
    pub const fn new(social: f64, fiscal: f64) -> PolicyPosition {
        PolicyPosition { social, fiscal }
    }
}

/// A complete snapshot of the slider inputs, passed by value into the
/// pipeline. All entities derived from it are recomputed on every evaluation.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct DemoInputs {
    /// One position per candidate, indexed in `CandidateLabel::ALL` order.
    pub positions: [PolicyPosition; 3],
    /// Declared in the input surface and adjustable by the user, but not
    /// consumed by the normalization formula. Surfaced unchanged so that
    /// frontends keep exposing it.
    pub weight: f64,
}

/// Inclusive bounds for a policy coordinate.
pub const POSITION_RANGE: (f64, f64) = (0.0, 1.0);

/// Inclusive bounds for the weight input.
pub const WEIGHT_RANGE: (f64, f64) = (0.1, 2.0);

impl DemoInputs {
    /// The starting positions: A leans fiscal, B leans social, C aligns with
    /// neither. A and B are symmetric and should be liked equally.
    pub const DEFAULT: DemoInputs = DemoInputs {
        positions: [
            PolicyPosition::new(0.2, 0.8),
            PolicyPosition::new(0.8, 0.2),
            PolicyPosition::new(0.1, 0.1),
        ],
        weight: 1.0,
    };

    pub fn position(&self, label: CandidateLabel) -> PolicyPosition {
        self.positions[label as usize]
    }
}

// ******** Output data structures *********

/// The normalized contributions of one candidate, and their sum.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct CandidateScore {
    pub label: CandidateLabel,
    /// Social alignment divided by `1 + 2 * (social column sum)`.
    pub social: f64,
    /// Fiscal alignment divided by `1 + 2 * (fiscal column sum)`.
    pub fiscal: f64,
    /// The aggregate "liking" score, `social + fiscal`.
    pub total: f64,
}

/// The numeric series behind the two linked plots, computed from one input
/// snapshot. The pipeline's contract ends here: rendering is the frontend's
/// concern.
#[derive(PartialEq, Debug, Clone)]
pub struct PlotSeries {
    /// Raw labeled positions, for the scatter panel.
    pub points: [(CandidateLabel, PolicyPosition); 3],
    /// Normalized aggregate scores, for the bar panel.
    pub scores: [CandidateScore; 3],
}

impl PlotSeries {
    /// The upper bound of the bar-chart axis, `1.1 * max(total)`.
    /// Zero when every score is zero.
    pub fn score_axis_max(&self) -> f64 {
        let max = self
            .scores
            .iter()
            .map(|s| s.total)
            .fold(0.0_f64, |acc, t| acc.max(t));
        max * 1.1
    }
}
