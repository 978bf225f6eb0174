//! Focused unit tests covering recommend configuration and request handling.

use super::helpers::{Workspace, sample_items, today, write_json, write_utf8};
use super::*;
use crate::fs::require_file;
use crate::recommend::{RecommendConfig, config_from_layers_for_test, recommend};
use crate::request::{RecommendRequest, load_request};
use rstest::{fixture, rstest};
use serde_json::json;
use wardrobe_core::Season;
use wardrobe_scorer::ScoringError;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn request_from(value: serde_json::Value) -> RecommendRequest {
    serde_json::from_value(value).expect("valid recommend request")
}

fn ids(ranked: &[wardrobe_core::ScoredItem]) -> Vec<&str> {
    ranked.iter().map(|s| s.item_id.as_str()).collect()
}

#[rstest]
fn converting_recommend_without_request_errors() {
    let args = RecommendArgs {
        request_path: None,
        ..RecommendArgs::default()
    };

    let err = RecommendConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_RECOMMEND_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn ranks_by_score_with_identifier_tie_break() {
    let request = request_from(json!({ "items": sample_items() }));

    let ranked = recommend(request, None, today()).expect("ranking succeeds");

    assert_eq!(
        ids(&ranked),
        ["camera", "oxford", "chinos", "linen-shirt", "wool-jumper", "trainers"]
    );
}

#[rstest]
fn limit_truncates_the_ranking() {
    let request = request_from(json!({ "items": sample_items() }));

    let ranked = recommend(request, Some(2), today()).expect("ranking succeeds");

    assert_eq!(ids(&ranked), ["camera", "oxford"]);
}

#[rstest]
fn season_override_replaces_the_calendar_season() {
    let request = request_from(json!({ "items": sample_items(), "season": "summer" }));

    let ranked = recommend(request, Some(1), today()).expect("ranking succeeds");

    assert_eq!(ids(&ranked), ["linen-shirt"]);
    let reasons = ranked.first().map(|s| s.reasons.clone()).unwrap_or_default();
    assert!(reasons.contains(&format!("Perfect for {}", Season::Summer)));
}

#[rstest]
fn target_formality_rewards_matching_items() {
    let request = request_from(json!({ "items": sample_items(), "targetFormality": 4 }));

    let ranked = recommend(request, Some(1), today()).expect("ranking succeeds");

    assert_eq!(ids(&ranked), ["oxford"]);
}

#[rstest]
fn request_date_overrides_the_clock() {
    let request = request_from(json!({
        "items": [{"id": "coat", "name": "Coat", "category": "outerwear", "season": ["winter"]}],
        "today": "2026-01-10"
    }));

    let ranked = recommend(request, None, today()).expect("ranking succeeds");

    let reasons = ranked.first().map(|s| s.reasons.clone()).unwrap_or_default();
    assert!(reasons.iter().any(|r| r == "Perfect for winter"));
}

#[rstest]
fn empty_identifiers_surface_as_scoring_errors() {
    let request = request_from(json!({ "items": [{"id": "", "name": "?", "category": "tops"}] }));

    let err = recommend(request, None, today()).expect_err("empty id should fail");
    match err {
        CliError::Scoring(ScoringError::EmptyItemId) => {}
        other => panic!("expected Scoring(EmptyItemId), found {other:?}"),
    }
}

#[rstest]
#[case::malformed_date(json!({"items": [{"id": "a", "name": "A", "category": "tops", "lastWornAt": "yesterday"}]}))]
#[case::formality_out_of_range(json!({"items": [], "targetFormality": 9}))]
#[case::unknown_season(json!({"items": [], "season": "monsoon"}))]
#[case::negative_wear_count(json!({"items": [{"id": "a", "name": "A", "category": "tops", "timesWorn": -1}]}))]
fn load_request_rejects_malformed_payloads(workspace: Workspace, #[case] payload: serde_json::Value) {
    write_json(&workspace.request_path, &payload);

    let err = load_request::<RecommendRequest>(&workspace.request_path)
        .expect_err("malformed payload should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, workspace.request_path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error(workspace: Workspace) {
    let err = load_request::<RecommendRequest>(&workspace.request_path)
        .expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, workspace.request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn require_file_distinguishes_missing_and_directories(workspace: Workspace) {
    match require_file(&workspace.request_path, ARG_REQUEST) {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }

    std::fs::create_dir(workspace.request_path.as_std_path()).expect("request directory");
    match require_file(&workspace.request_path, ARG_REQUEST) {
        Err(CliError::SourcePathNotFile { path, .. }) => assert_eq!(path, workspace.request_path),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }

    let file = workspace.root().join("present.json");
    write_utf8(&file, b"{}");
    assert!(require_file(&file, ARG_REQUEST).is_ok());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "plenty" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;

    let env_request = workspace.root().join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "limit": 3 }), None);
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "limit": 5,
    }));
    composer.push_cli(json!({ "limit": 7 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.limit, Some(7));
}
