/// Score, grade and retry-risk aggregation over detected issues.
use crate::analyzers::types::{Grade, Issue, IssueId};
use crate::metrics::round2;

/// Total severity penalty never exceeds this, however many issues fire.
const PENALTY_CAP: u32 = 70;

/// Aggregate issue severities into a 0..=100 score.
///
/// The cap means the score floors at 30 from issue penalties alone; the
/// outer `max(0, ..)` is kept as a defensive bound, not a reachable state.
pub fn score(issues: &[Issue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.weight()).sum();
    100u32.saturating_sub(penalty.min(PENALTY_CAP))
}

/// Map a score to a letter grade.
pub fn grade(score: u32) -> Grade {
    match score {
        90..=100 => Grade::A,
        75..=89 => Grade::B,
        60..=74 => Grade::C,
        _ => Grade::D,
    }
}

/// Additive retry-risk heuristic, independent of the score.
///
/// Each contributing issue adds a fixed amount; the result is clamped to
/// [0, 1] and rounded to two decimals. The weights sum to exactly 1.0 in
/// the worst case by construction.
pub fn retry_risk(issues: &[Issue]) -> f64 {
    let has = |id: IssueId| issues.iter().any(|i| i.id == id);

    let mut risk: f64 = 0.0;
    if has(IssueId::VagueLanguage) {
        risk += 0.35;
    }
    if has(IssueId::NoMaxTokens) {
        risk += 0.35;
    }
    if has(IssueId::MissingFormat) {
        risk += 0.15;
    }
    if has(IssueId::HighTempDeterministic) {
        risk += 0.15;
    }

    round2(risk.clamp(0.0, 1.0))
}
