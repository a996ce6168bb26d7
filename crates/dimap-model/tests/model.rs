use dimap_model::{MatchConfig, MappingProposal, SourceHeader, TargetHeader};

#[test]
fn match_config_serializes_with_camel_case_keys() {
    let config = MatchConfig::new("cosineSimilarity")
        .with_alternative_names(true)
        .with_similarity_threshold(0.75)
        .with_match_limit(3);

    let json = serde_json::to_value(&config).expect("serialize config");
    assert_eq!(json["algorithm"], "cosineSimilarity");
    assert_eq!(json["useAlternativeNames"], true);
    assert_eq!(json["similarityThreshold"], 0.75);
    assert_eq!(json["matchLimit"], 3);
}

#[test]
fn match_config_defaults_match_the_dialog_defaults() {
    let config = MatchConfig::new("levenshteinDistance");
    assert_eq!(config.similarity_threshold, 0.6);
    assert_eq!(config.match_limit, 1);
    assert!(!config.use_alternative_names);
}

#[test]
fn target_header_builder_collects_alternatives() {
    let header = TargetHeader::new("first_name").with_alternatives(["given_name", "forename"]);
    assert_eq!(header.alternatives, vec!["given_name", "forename"]);
}

#[test]
fn proposal_round_trips_through_json() {
    let mut proposal = MappingProposal::new();
    proposal.insert("email", vec!["e_mail".to_string()]);
    proposal.insert("phone", Vec::new());

    let json = serde_json::to_string(&proposal).expect("serialize proposal");
    let parsed: MappingProposal = serde_json::from_str(&json).expect("deserialize proposal");
    assert_eq!(parsed, proposal);
    assert_eq!(parsed.unmatched_targets(), vec!["phone"]);
}

#[test]
fn source_header_from_str_is_visible() {
    let header = SourceHeader::from("email");
    assert!(!header.hidden);
    assert_eq!(header.name, "email");
}
