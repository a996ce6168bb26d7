use dimap_match::{AutomapError, automap};
use dimap_model::{MatchConfig, SourceHeader, TargetHeader, visible};

fn sources(names: &[&str]) -> Vec<SourceHeader> {
    names.iter().map(|name| SourceHeader::new(*name)).collect()
}

#[test]
fn proposes_best_match_per_target() {
    let targets = vec![
        TargetHeader::new("first_name").with_alternatives(["given_name"]),
        TargetHeader::new("last_name").with_alternatives(["surname", "family_name"]),
    ];
    let headers = sources(&["firstname", "lastname", "zipcode"]);
    let config = MatchConfig::new("levenshteinDistance")
        .with_similarity_threshold(0.6)
        .with_alternative_names(true);

    let proposal = automap(&targets, &headers, &config).unwrap();

    assert_eq!(
        proposal.matches_for("first_name"),
        Some(&["firstname".to_string()][..])
    );
    assert_eq!(
        proposal.matches_for("last_name"),
        Some(&["lastname".to_string()][..])
    );
}

#[test]
fn target_without_qualifying_source_gets_empty_entry() {
    let targets = vec![TargetHeader::new("completely_unrelated")];
    let headers = sources(&["zipcode"]);
    let config = MatchConfig::new("levenshteinDistance").with_similarity_threshold(0.9);

    let proposal = automap(&targets, &headers, &config).unwrap();

    assert_eq!(proposal.matches_for("completely_unrelated"), Some(&[][..]));
    assert_eq!(proposal.unmatched_targets(), vec!["completely_unrelated"]);
}

#[test]
fn truncates_to_match_limit_in_descending_order() {
    // Against target "abcd": "abcd" scores 1.0, "abcx" 0.75, "abxy" 0.5.
    let targets = vec![TargetHeader::new("abcd")];
    let headers = sources(&["abxy", "abcx", "abcd"]);
    let config = MatchConfig::new("levenshteinDistance")
        .with_similarity_threshold(0.5)
        .with_match_limit(2);

    let proposal = automap(&targets, &headers, &config).unwrap();

    assert_eq!(
        proposal.matches_for("abcd"),
        Some(&["abcd".to_string(), "abcx".to_string()][..])
    );
}

#[test]
fn equal_scores_keep_source_input_order() {
    // Both sources are one substitution away from the target.
    let targets = vec![TargetHeader::new("abcd")];
    let headers = sources(&["abcx", "abcy"]);
    let config = MatchConfig::new("levenshteinDistance")
        .with_similarity_threshold(0.5)
        .with_match_limit(2);

    let proposal = automap(&targets, &headers, &config).unwrap();

    assert_eq!(
        proposal.matches_for("abcd"),
        Some(&["abcx".to_string(), "abcy".to_string()][..])
    );
}

#[test]
fn threshold_boundary_is_inclusive() {
    // "abcx" vs "abcd": distance 1 of 4, rounded similarity exactly 0.75.
    let targets = vec![TargetHeader::new("abcd")];
    let headers = sources(&["abcx"]);

    let at_threshold = MatchConfig::new("levenshteinDistance").with_similarity_threshold(0.75);
    let proposal = automap(&targets, &headers, &at_threshold).unwrap();
    assert_eq!(proposal.matches_for("abcd"), Some(&["abcx".to_string()][..]));

    let above_threshold =
        MatchConfig::new("levenshteinDistance").with_similarity_threshold(0.76);
    let proposal = automap(&targets, &headers, &above_threshold).unwrap();
    assert_eq!(proposal.matches_for("abcd"), Some(&[][..]));
}

#[test]
fn disabling_alternatives_never_grows_the_match_set() {
    let targets = vec![
        TargetHeader::new("first_name").with_alternatives(["firstname", "given_name"]),
        TargetHeader::new("postal_code").with_alternatives(["zipcode"]),
    ];
    let headers = sources(&["firstname", "zipcode", "surname"]);

    let with_alternatives = MatchConfig::new("jaroWinklerSimilarity")
        .with_similarity_threshold(0.8)
        .with_match_limit(3)
        .with_alternative_names(true);
    let without_alternatives = with_alternatives.clone().with_alternative_names(false);

    let enabled = automap(&targets, &headers, &with_alternatives).unwrap();
    let disabled = automap(&targets, &headers, &without_alternatives).unwrap();

    for (target, matches) in disabled.iter() {
        let enabled_matches = enabled.matches_for(target).unwrap();
        assert!(
            matches.len() <= enabled_matches.len(),
            "alternatives must only add matches for {target}"
        );
    }
}

#[test]
fn identical_inputs_yield_identical_proposals() {
    let targets = vec![
        TargetHeader::new("first_name").with_alternatives(["given_name"]),
        TargetHeader::new("email"),
    ];
    let headers = sources(&["firstname", "e-mail", "surname"]);
    let config = MatchConfig::new("jaroSimilarity")
        .with_similarity_threshold(0.7)
        .with_match_limit(2)
        .with_alternative_names(true);

    let first = automap(&targets, &headers, &config).unwrap();
    let second = automap(&targets, &headers, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_registry_algorithm_is_usable() {
    let targets = vec![TargetHeader::new("email")];
    let headers = sources(&["email"]);
    for algorithm in dimap_match::Algorithm::ALL {
        let config = MatchConfig::new(algorithm.id()).with_similarity_threshold(0.0);
        let proposal = automap(&targets, &headers, &config).unwrap();
        assert_eq!(
            proposal.matches_for("email"),
            Some(&["email".to_string()][..]),
            "algorithm {algorithm} failed to match an identical header"
        );
    }
}

#[test]
fn hidden_sources_are_filtered_by_the_caller() {
    let targets = vec![TargetHeader::new("email")];
    let mut headers = sources(&["email", "email_backup"]);
    headers[0].hidden = true;

    let config = MatchConfig::new("containCheck").with_similarity_threshold(1.0);
    let proposal = automap(&targets, &visible(&headers), &config).unwrap();

    // "email" is hidden; containment still matches the visible backup column.
    assert_eq!(
        proposal.matches_for("email"),
        Some(&["email_backup".to_string()][..])
    );
}

#[test]
fn configuration_errors_surface_before_any_matching() {
    let targets = vec![TargetHeader::new("email")];
    let headers = sources(&["email"]);

    assert_eq!(
        automap(&targets, &headers, &MatchConfig::new("metaphone")).unwrap_err(),
        AutomapError::UnknownAlgorithm("metaphone".to_string())
    );
    assert_eq!(
        automap(
            &targets,
            &headers,
            &MatchConfig::new("containCheck").with_similarity_threshold(-0.1)
        )
        .unwrap_err(),
        AutomapError::ThresholdOutOfRange(-0.1)
    );
}
