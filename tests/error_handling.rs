use std::fs;
use std::sync::Arc;

use overlap::{
    ConfigLoadError, ExtractConfig, ExtractError, MatchConfig, MatchError, Normalizer,
    OverlapConfig, Pipeline, PipelineError, ScoreError, ScorerKind,
};

fn ratio_pipeline() -> Pipeline {
    let normalizer = Arc::new(Normalizer::english());
    Pipeline::new(
        ExtractConfig::default(),
        MatchConfig::default(),
        ScorerKind::Ratio.build(false, &normalizer),
    )
}

#[test]
fn missing_input_directory_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");

    let err = ratio_pipeline().run(&missing).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::MissingDirectory { .. })
    ));
}

#[test]
fn unsupported_file_aborts_the_whole_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "one two three").unwrap();
    fs::write(dir.path().join("b.txt"), "four five six").unwrap();
    fs::write(dir.path().join("c.pptx"), "slides").unwrap();

    let err = ratio_pipeline().run(dir.path()).unwrap_err();
    match err {
        PipelineError::Extract(ExtractError::UnsupportedFormat { path }) => {
            assert!(path.ends_with("c.pptx"), "unexpected path {path}");
        }
        other => panic!("expected unsupported format, got {other:?}"),
    }
}

#[test]
fn wordless_file_aborts_instead_of_scoring_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::write(dir.path().join("b.txt"), "four five six").unwrap();

    let err = ratio_pipeline().run(dir.path()).unwrap_err();
    match err {
        PipelineError::Extract(ExtractError::EmptyDocument { path }) => {
            assert!(path.ends_with("a.txt"), "unexpected path {path}");
        }
        other => panic!("expected empty document, got {other:?}"),
    }
}

#[test]
fn single_document_is_insufficient_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("only.txt"), "lonely words").unwrap();

    let err = ratio_pipeline().run(dir.path()).unwrap_err();
    assert!(matches!(err, PipelineError::InsufficientInput { found: 1 }));
    assert!(err.to_string().contains('1'));
}

#[test]
fn empty_directory_is_insufficient_input() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = ratio_pipeline().run(dir.path()).unwrap_err();
    assert!(matches!(err, PipelineError::InsufficientInput { found: 0 }));
}

#[test]
fn compare_rejects_short_document_lists() {
    let err = ratio_pipeline().compare(&[]).unwrap_err();
    assert!(matches!(err, PipelineError::InsufficientInput { found: 0 }));
}

#[test]
fn jaccard_over_stop_words_only_is_degenerate() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "the of and").unwrap();
    fs::write(dir.path().join("b.txt"), "a an the").unwrap();

    let normalizer = Arc::new(Normalizer::english());
    let pipeline = Pipeline::new(
        ExtractConfig::default(),
        MatchConfig::default(),
        ScorerKind::Jaccard.build(false, &normalizer),
    );

    let err = pipeline.run(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Match(MatchError::Score(ScoreError::DegenerateComparison {
            scorer: "jaccard",
            ..
        }))
    ));
}

#[test]
fn zero_block_size_is_rejected_before_any_work() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "one two").unwrap();
    fs::write(dir.path().join("b.txt"), "one two").unwrap();

    let normalizer = Arc::new(Normalizer::english());
    let pipeline = Pipeline::new(
        ExtractConfig::default(),
        MatchConfig::default().with_min_block_size(0),
        ScorerKind::Ratio.build(false, &normalizer),
    );

    let err = pipeline.run(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Match(MatchError::InvalidConfig(_))
    ));
}

#[test]
fn bad_config_files_surface_as_config_errors() {
    let err = OverlapConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::UnsupportedVersion(ref v) if v == "2.0"));

    let err = OverlapConfig::from_yaml("matching:\n  scorer: cosine\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::YamlParse(_)));

    let mut cfg = OverlapConfig::default();
    cfg.matching.min_block_size = 0;
    let err = Pipeline::from_config(&cfg).err().expect("invalid config");
    assert!(matches!(
        err,
        PipelineError::Config(ConfigLoadError::Validation(_))
    ));
}
