//! String-similarity algorithms for header matching.
//!
//! Each algorithm is a pure, total function of two strings producing a
//! distance / similarity pair. The set is closed: algorithms are selected
//! by registry id and never extended at runtime. Lengths and character
//! comparisons operate on Unicode code points, not bytes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Winkler prefix scaling factor.
const WINKLER_SCALING: f64 = 0.1;
/// Maximum common-prefix length considered by the Winkler boost.
const WINKLER_MAX_PREFIX: usize = 4;

/// Distance / similarity pair produced by every algorithm.
///
/// `similarity` is always within [0, 1]. `distance` is algorithm-specific
/// (an edit count for the edit-distance family, `1 - similarity` for the
/// rest) and the two are not required to be exact inverses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmResult {
    /// Non-negative dissimilarity measure.
    pub distance: f64,
    /// Normalized similarity in [0, 1]; higher is closer.
    pub similarity: f64,
}

/// The closed set of similarity algorithms.
///
/// Serde ids double as registry ids (`"levenshteinDistance"`,
/// `"jaroWinklerSimilarity"`, ...), so configurations round-trip through
/// JSON with the ids callers see in [`Algorithm::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    /// Binary signal: 1 when either string contains the other.
    ContainCheck,
    /// Classic insert/delete/substitute edit distance.
    LevenshteinDistance,
    /// Levenshtein with adjacent transposition as a fourth operation.
    DamerauLevenshteinDistance,
    /// Jaro similarity (windowed matches and transpositions).
    JaroSimilarity,
    /// Jaro boosted by a shared prefix of up to four characters.
    JaroWinklerSimilarity,
    /// Cosine of per-character frequency vectors.
    CosineSimilarity,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Self; 6] = [
        Self::ContainCheck,
        Self::LevenshteinDistance,
        Self::DamerauLevenshteinDistance,
        Self::JaroSimilarity,
        Self::JaroWinklerSimilarity,
        Self::CosineSimilarity,
    ];

    /// Registry id, e.g. `"levenshteinDistance"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ContainCheck => "containCheck",
            Self::LevenshteinDistance => "levenshteinDistance",
            Self::DamerauLevenshteinDistance => "damerauLevenshteinDistance",
            Self::JaroSimilarity => "jaroSimilarity",
            Self::JaroWinklerSimilarity => "jaroWinklerSimilarity",
            Self::CosineSimilarity => "cosineSimilarity",
        }
    }

    /// Human-readable name for selection controls.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ContainCheck => "Contain Check",
            Self::LevenshteinDistance => "Levenshtein Distance",
            Self::DamerauLevenshteinDistance => "Damerau-Levenshtein Distance",
            Self::JaroSimilarity => "Jaro Similarity",
            Self::JaroWinklerSimilarity => "Jaro-Winkler Similarity",
            Self::CosineSimilarity => "Cosine Similarity",
        }
    }

    /// Looks up an algorithm by registry id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.id() == id)
    }

    /// Computes the distance / similarity of two strings.
    ///
    /// Case folding is the caller's concern; the automapper lower-cases
    /// both sides before calling this.
    #[must_use]
    pub fn compute(self, source: &str, target: &str) -> AlgorithmResult {
        match self {
            Self::ContainCheck => contain_check(source, target),
            Self::LevenshteinDistance => levenshtein(source, target),
            Self::DamerauLevenshteinDistance => damerau_levenshtein(source, target),
            Self::JaroSimilarity => jaro(source, target),
            Self::JaroWinklerSimilarity => jaro_winkler(source, target),
            Self::CosineSimilarity => cosine(source, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn contain_check(source: &str, target: &str) -> AlgorithmResult {
    let contains = source.contains(target) || target.contains(source);
    let distance = if contains {
        0.0
    } else {
        source.chars().count().max(target.chars().count()) as f64
    };
    AlgorithmResult {
        distance,
        similarity: if contains { 1.0 } else { 0.0 },
    }
}

fn levenshtein(source: &str, target: &str) -> AlgorithmResult {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let distance = levenshtein_distance(&source, &target) as f64;
    AlgorithmResult {
        distance,
        similarity: edit_similarity(distance, source.len(), target.len()),
    }
}

fn damerau_levenshtein(source: &str, target: &str) -> AlgorithmResult {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let distance = damerau_levenshtein_distance(&source, &target) as f64;
    AlgorithmResult {
        distance,
        similarity: edit_similarity(distance, source.len(), target.len()),
    }
}

fn jaro(source: &str, target: &str) -> AlgorithmResult {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let similarity = jaro_similarity(&source, &target);
    AlgorithmResult {
        distance: 1.0 - similarity,
        similarity,
    }
}

fn jaro_winkler(source: &str, target: &str) -> AlgorithmResult {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let base = jaro_similarity(&source, &target);
    let prefix = common_prefix_length(&source, &target);
    let similarity = (base + prefix as f64 * WINKLER_SCALING * (1.0 - base)).min(1.0);
    AlgorithmResult {
        distance: 1.0 - similarity,
        similarity,
    }
}

fn cosine(source: &str, target: &str) -> AlgorithmResult {
    let source_frequencies = char_frequencies(source);
    let target_frequencies = char_frequencies(target);
    let similarity = cosine_of(&source_frequencies, &target_frequencies);
    AlgorithmResult {
        distance: 1.0 - similarity,
        similarity,
    }
}

/// Normalizes an edit distance into [0, 1]; two empty strings are
/// identical, not a division by zero.
fn edit_similarity(distance: f64, source_len: usize, target_len: usize) -> f64 {
    let max_len = source_len.max(target_len);
    if max_len == 0 {
        return 1.0;
    }
    (1.0 - distance / max_len as f64).max(0.0)
}

fn levenshtein_distance(source: &[char], target: &[char]) -> usize {
    let mut matrix = edit_matrix(source.len(), target.len());
    for s in 1..=source.len() {
        for t in 1..=target.len() {
            let cost = usize::from(source[s - 1] != target[t - 1]);
            matrix[s][t] = (matrix[s - 1][t] + 1)
                .min(matrix[s][t - 1] + 1)
                .min(matrix[s - 1][t - 1] + cost);
        }
    }
    matrix[source.len()][target.len()]
}

/// Restricted Damerau-Levenshtein: a transposition only applies to the
/// immediately preceding pair of characters.
fn damerau_levenshtein_distance(source: &[char], target: &[char]) -> usize {
    let mut matrix = edit_matrix(source.len(), target.len());
    for s in 1..=source.len() {
        for t in 1..=target.len() {
            let cost = usize::from(source[s - 1] != target[t - 1]);
            matrix[s][t] = (matrix[s - 1][t] + 1)
                .min(matrix[s][t - 1] + 1)
                .min(matrix[s - 1][t - 1] + cost);
            let transposed =
                s > 1 && t > 1 && source[s - 1] == target[t - 2] && source[s - 2] == target[t - 1];
            if transposed {
                matrix[s][t] = matrix[s][t].min(matrix[s - 2][t - 2] + cost);
            }
        }
    }
    matrix[source.len()][target.len()]
}

/// Builds the DP table with the first row and column pre-filled.
fn edit_matrix(source_len: usize, target_len: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0usize; target_len + 1]; source_len + 1];
    for (s, row) in matrix.iter_mut().enumerate() {
        row[0] = s;
    }
    for t in 0..=target_len {
        matrix[0][t] = t;
    }
    matrix
}

fn jaro_similarity(source: &[char], target: &[char]) -> f64 {
    if source.is_empty() && target.is_empty() {
        return 1.0;
    }

    // Window of floor(max/2) - 1. Negative for very short strings, in
    // which case nothing can match.
    let window = source.len().max(target.len()) as isize / 2 - 1;

    let mut source_matches = vec![false; source.len()];
    let mut target_matches = vec![false; target.len()];
    let mut matches = 0usize;

    for s in 0..source.len() {
        let start = (s as isize - window).max(0);
        let end = (s as isize + window + 1).min(target.len() as isize);
        let mut t = start;
        while t < end {
            let t_index = t as usize;
            if source[s] == target[t_index] && !target_matches[t_index] {
                source_matches[s] = true;
                target_matches[t_index] = true;
                matches += 1;
                break;
            }
            t += 1;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut t = 0usize;
    for s in 0..source.len() {
        if source_matches[s] {
            while !target_matches[t] {
                t += 1;
            }
            if source[s] != target[t] {
                transpositions += 1;
            }
            t += 1;
        }
    }

    let matched = matches as f64;
    let half_transpositions = transpositions as f64 / 2.0;
    (matched / source.len() as f64
        + matched / target.len() as f64
        + (matched - half_transpositions) / matched)
        / 3.0
}

fn common_prefix_length(source: &[char], target: &[char]) -> usize {
    source
        .iter()
        .zip(target)
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(s, t)| s == t)
        .count()
}

fn char_frequencies(text: &str) -> BTreeMap<char, u32> {
    let mut frequencies = BTreeMap::new();
    for ch in text.chars() {
        *frequencies.entry(ch).or_insert(0u32) += 1;
    }
    frequencies
}

fn cosine_of(source: &BTreeMap<char, u32>, target: &BTreeMap<char, u32>) -> f64 {
    let magnitude = |vector: &BTreeMap<char, u32>| {
        vector
            .values()
            .map(|&count| f64::from(count) * f64::from(count))
            .sum::<f64>()
            .sqrt()
    };
    let denominator = magnitude(source) * magnitude(target);
    // An empty string has a zero-magnitude vector: no direction to compare.
    if denominator == 0.0 {
        return 0.0;
    }
    let dot: f64 = source
        .iter()
        .map(|(ch, &count)| {
            f64::from(count) * f64::from(target.get(ch).copied().unwrap_or(0))
        })
        .sum();
    (dot / denominator).min(1.0)
}
