//! Basic tests for nahuatl-engine

use nahuatl_engine::*;
use std::io::Write;

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.batch.parallel_threshold, 2048);
    assert_eq!(config.batch.execution_mode, ExecutionPreference::Auto);
    assert_eq!(config.transducer.saltillo, SaltilloGlyph::GlottalStop);
}

#[test]
fn test_execution_mode_selection() {
    use nahuatl_engine::executor::auto_select;

    assert_eq!(auto_select(10, 2048), ExecutionMode::Sequential);
    assert_eq!(auto_select(1000, 2048), ExecutionMode::Sequential);

    #[cfg(feature = "parallel")]
    assert_eq!(auto_select(100_000, 2048), ExecutionMode::Parallel);
}

#[test]
fn test_sequential_executor() {
    use nahuatl_engine::executor::SequentialExecutor;

    let executor = SequentialExecutor;
    let words = ["calli", "kuali"];
    let transducer = Transducer::new();

    let tags = executor.map(&words, |w| transducer.grapheme_to_phoneme(w).unwrap().to_string());

    assert_eq!(tags, vec!["k a l l i", "k_w a l i"]);
    assert_eq!(executor.mode(), ExecutionMode::Sequential);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[transducer]").unwrap();
    writeln!(file, "saltillo = \"glottal-fricative\"").unwrap();
    writeln!(file, "[batch]").unwrap();
    writeln!(file, "error_policy = \"skip\"").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.transducer.saltillo, SaltilloGlyph::GlottalFricative);
    assert_eq!(config.batch.error_policy, ErrorPolicy::Skip);
}

#[test]
fn test_config_errors_name_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[batch]\nthreads = \"many\"").unwrap();

    let err = EngineConfig::from_file(file.path()).unwrap_err();
    match err {
        EngineError::Config(msg) => assert!(msg.contains(&file.path().display().to_string())),
        other => panic!("unexpected error: {other}"),
    }

    let missing = EngineConfig::from_file(std::path::Path::new("/nonexistent/engine.toml"));
    assert!(matches!(missing, Err(EngineError::Io(_))));
}

#[test]
fn test_fricative_round_trip_through_batches() {
    let config = EngineConfig::from_toml_str(
        "[transducer]\nsaltillo = \"glottal-fricative\"\n[batch]\nexecution_mode = \"sequential\"\n",
    )
    .unwrap();
    let processor = BatchProcessor::new(config).unwrap();

    let words = SourceLine::numbered(["tlahtoa", "nô"]);
    let tags = processor.run_g2p(&words).unwrap();
    let tag_lines: Vec<_> = tags.outputs().collect();
    assert_eq!(tag_lines, vec!["tK a h t o a", "n o h"]);

    let tag_lines = SourceLine::numbered(tag_lines);
    let spelled = processor.run_p2g(&tag_lines, Orthography::Launey).unwrap();
    let words: Vec<_> = spelled.outputs().collect();
    assert_eq!(words, vec!["tlàtoa", "nô"]);
}

#[test]
fn test_punctuation_pass_through_from_config() {
    let config = EngineConfig::from_toml_str(
        "[transducer]\npunctuation = \"pass-through\"\n[batch]\nexecution_mode = \"sequential\"\n",
    )
    .unwrap();
    let processor = BatchProcessor::new(config).unwrap();

    let lines = SourceLine::numbered(["k a l l i <punct>.</punct>"]);
    let output = processor.run_p2g(&lines, Orthography::Classical).unwrap();
    assert_eq!(output.records[0].output, "calli.");
}
