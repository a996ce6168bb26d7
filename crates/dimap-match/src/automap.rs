//! The automapper: per-target greedy selection of best-matching sources.

use std::cmp::Ordering;

use dimap_model::{MappingProposal, MatchConfig, SourceHeader, TargetHeader};
use tracing::debug;

use crate::algorithms::Algorithm;
use crate::error::{AutomapError, Result};

/// Proposes a best-effort pairing of source headers to target headers.
///
/// For every target, the qualifying sources are ranked by rounded
/// similarity, best first (ties keep source input order), and truncated to
/// the configured match limit. Targets with no qualifying source appear in
/// the proposal with an empty match list so callers can tell "nothing
/// suitable" apart from "not considered".
///
/// This is a per-target greedy selection, not a one-to-one assignment:
/// several targets may independently pick the same source.
///
/// # Errors
///
/// [`AutomapError::UnknownAlgorithm`] when the configured id is not in the
/// registry, [`AutomapError::ThresholdOutOfRange`] and
/// [`AutomapError::MatchLimitOutOfRange`] for out-of-range configuration
/// values.
pub fn automap(
    targets: &[TargetHeader],
    sources: &[SourceHeader],
    config: &MatchConfig,
) -> Result<MappingProposal> {
    let algorithm = Algorithm::from_id(&config.algorithm)
        .ok_or_else(|| AutomapError::UnknownAlgorithm(config.algorithm.clone()))?;
    if !(0.0..=1.0).contains(&config.similarity_threshold) {
        return Err(AutomapError::ThresholdOutOfRange(config.similarity_threshold));
    }
    if config.match_limit < 1 {
        return Err(AutomapError::MatchLimitOutOfRange(config.match_limit));
    }

    debug!(
        targets = targets.len(),
        sources = sources.len(),
        algorithm = algorithm.id(),
        threshold = config.similarity_threshold,
        match_limit = config.match_limit,
        "running automapper"
    );

    let mut proposal = MappingProposal::new();
    for target in targets {
        proposal.insert(
            target.id.clone(),
            match_target(target, sources, algorithm, config),
        );
    }
    Ok(proposal)
}

/// Ranks the sources qualifying for one target, best first.
fn match_target(
    target: &TargetHeader,
    sources: &[SourceHeader],
    algorithm: Algorithm,
    config: &MatchConfig,
) -> Vec<String> {
    let mut candidate_names: Vec<String> = vec![target.id.to_lowercase()];
    if config.use_alternative_names {
        candidate_names.extend(target.alternatives.iter().map(|name| name.to_lowercase()));
    }

    let mut scored: Vec<(&SourceHeader, f64)> = Vec::new();
    for source in sources {
        let source_name = source.name.to_lowercase();
        // Best rounded similarity across this target's candidate names; a
        // later candidate never overwrites a higher earlier score.
        let best = candidate_names
            .iter()
            .map(|name| round_similarity(algorithm.compute(&source_name, name).similarity))
            .filter(|similarity| *similarity >= config.similarity_threshold)
            .fold(None, |best: Option<f64>, similarity| {
                Some(best.map_or(similarity, |current| current.max(similarity)))
            });
        if let Some(similarity) = best {
            scored.push((source, similarity));
        }
    }

    // Stable sort keeps source input order on equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(config.match_limit);
    scored
        .into_iter()
        .map(|(source, _)| source.name.clone())
        .collect()
}

/// Rounds a similarity to two decimals, half away from zero, so values
/// differing only by float noise compare equally against the threshold.
fn round_similarity(similarity: f64) -> f64 {
    (similarity * 100.0).round() / 100.0
}
