//! End-to-end similarity tests.
//!
//! These tests run tokenized subtitle documents through the compression
//! oracle, the entropy estimator, distances and corpus matrices.

use subtext::codec::Algorithm;
use subtext::config::Config;
use subtext::similarity::{CompressionOracle, Corpus, Method, Serialization, SimilarityEstimator};
use subtext::subtitle::{SubtitleDocument, TokenizerOptions};
use subtext::LzMatchEntropy;

const LINES: [&str; 6] = [
    "Where were you last night?",
    "I was at the harbour with Tom.",
    "You told me you would call.",
    "The boat left without us.",
    "We need to find the captain.",
    "Nobody has seen him since Monday.",
];

/// Numbered document cycling through `lines` for `cues` cues
fn episode(lines: &[&str], cues: usize) -> String {
    let mut out = String::new();
    for k in 0..cues {
        let second = k * 3;
        out.push_str(&format!(
            "{}\n00:{:02}:{:02},000 --> 00:{:02}:{:02},500\n{}\n\n",
            k + 1,
            second / 60,
            second % 60,
            second / 60,
            second % 60,
            lines[k % lines.len()]
        ));
    }
    out
}

fn tokens_of(text: &str) -> Vec<String> {
    SubtitleDocument::parse(text)
        .tokenize(&TokenizerOptions::default())
        .unwrap()
}

fn unrelated_tokens(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("zz{}", (i * 37) % 997)).collect()
}

/// Test a document is closer to itself than to unrelated text
#[test]
fn test_self_distance_below_unrelated() {
    let a = tokens_of(&episode(&LINES, 60));
    let b = unrelated_tokens(a.len());

    for algorithm in [Algorithm::Brotli, Algorithm::Zlib, Algorithm::Gzip] {
        for serialization in [Serialization::Text, Serialization::Varint] {
            let estimator = SimilarityEstimator::new(
                CompressionOracle::with_algorithm(algorithm).with_serialization(serialization),
            );
            let same = estimator
                .normalized_compression_distance(&a, &a, Method::CompressionBased)
                .unwrap();
            let other = estimator
                .normalized_compression_distance(&a, &b, Method::CompressionBased)
                .unwrap();
            assert!(same > 0.0, "{algorithm}/{serialization:?}: {same}");
            assert!(same < other, "{algorithm}/{serialization:?}: {same} vs {other}");
        }
    }
}

/// Braced document with one distinct word per cue
fn distinct_words(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("{{{}}}{{{}}}{prefix}{i}\n", i * 10, i * 10 + 9))
        .collect()
}

/// Test the entropy method on sequences without internal repetition
#[test]
fn test_entropy_distance_ordering() {
    let a = tokens_of(&distinct_words("x", 30));
    let b = tokens_of(&distinct_words("y", 30));
    let estimator = SimilarityEstimator::default();

    let same = estimator
        .normalized_compression_distance(&a, &a, Method::EntropyBased)
        .unwrap();
    let other = estimator
        .normalized_compression_distance(&a, &b, Method::EntropyBased)
        .unwrap();
    assert!(same < other, "{same} vs {other}");
    assert!(other < 1.0);
}

/// Test compressed size of a long transcript is below its serialized size
#[test]
fn test_complexity_below_raw_size() {
    let tokens = tokens_of(&episode(&LINES, 120));

    for algorithm in Algorithm::all() {
        let result = CompressionOracle::with_algorithm(*algorithm)
            .measure(&tokens)
            .unwrap();
        if *algorithm == Algorithm::None {
            assert_eq!(result.compressed_bytes, result.original_bytes);
        } else {
            assert!(result.is_beneficial(), "{algorithm}: {result:?}");
        }
    }

    let ratio = CompressionOracle::default().token_ratio(&tokens).unwrap();
    assert!(ratio > 0.0 && ratio < 1.0);
}

/// Test repeated dialogue has a lower entropy rate than fresh vocabulary
#[test]
fn test_entropy_rate_of_transcripts() {
    let entropy = LzMatchEntropy::new();
    let repetitive = entropy.estimate(&tokens_of(&episode(&LINES, 60))).unwrap();
    let fresh = entropy.estimate(&unrelated_tokens(300)).unwrap();

    assert!(repetitive.bits_per_token < fresh.bits_per_token);
    assert!(repetitive.sum_lambda >= repetitive.len);
    assert_eq!(fresh.alphabet, 300);
}

/// Test corpus matrices over files on disk
#[test]
fn test_corpus_matrix_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let reversed: Vec<&str> = LINES.iter().rev().copied().collect();
    let files = [
        ("s01e01", episode(&LINES, 50)),
        ("s01e02", episode(&reversed, 50)),
        ("credits", "{0}{10}Directed by nobody in particular\n".to_string()),
        ("notes", "WEBVTT\n\nnot a subtitle we read\n".to_string()),
    ];

    let mut documents = Vec::new();
    for (name, text) in &files {
        let path = dir.path().join(format!("{name}.srt"));
        std::fs::write(&path, text).unwrap();
        documents.push((name.to_string(), SubtitleDocument::load(&path).unwrap()));
    }

    let corpus = Corpus::from_documents(
        documents.iter().map(|(name, doc)| (name.clone(), doc)),
        &TokenizerOptions::default(),
    )
    .unwrap();
    assert_eq!(corpus.names().collect::<Vec<_>>(), vec!["s01e01", "s01e02", "credits"]);

    let matrix = corpus
        .distance_matrix(&SimilarityEstimator::default(), Method::CompressionBased)
        .unwrap();
    assert_eq!(matrix.nearest("s01e01").unwrap().0, "s01e02");

    let json = matrix.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["method"], "compression");
    assert_eq!(value["scores"].as_array().unwrap().len(), 3);
}

/// Test a TOML config drives tokenizer and estimator end to end
#[test]
fn test_config_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[tokenizer]
max_minutes = 1

[compression]
algorithm = "zlib"
serialization = "varint"

[similarity]
method = "entropy"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    let doc = SubtitleDocument::parse(&episode(&LINES, 50));

    // Cues start every 3 seconds; the last 10 start in minute 2
    let tokens = doc.tokenize(&config.tokenizer_options()).unwrap();
    let full = doc.tokenize(&TokenizerOptions::default()).unwrap();
    assert!(tokens.len() < full.len());
    assert!(full.starts_with(&tokens));

    let estimator = config.estimator();
    assert_eq!(estimator.oracle().algorithm(), Algorithm::Zlib);
    assert_eq!(estimator.oracle().serialization(), Serialization::Varint);

    let report = estimator
        .compare(&tokens, &full, config.similarity.method)
        .unwrap();
    assert_eq!(report.method, Method::EntropyBased);
    assert!(report.score > 0.0);
}
