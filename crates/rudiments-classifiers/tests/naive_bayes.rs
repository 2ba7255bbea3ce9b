//! Integration tests for document vectors and the naive Bayes classifier.

use rudiments_classifiers::config::{BayesConfig, VectorizerKind};
use rudiments_classifiers::data_handling::LabeledCorpus;
use rudiments_classifiers::evaluation::bayes_hold_out;
use rudiments_classifiers::models::naive_bayes::{vectorize, NaiveBayesModel};
use rudiments_classifiers::text::{tokenize, DocumentVector, Vocabulary};

fn postings() -> Vec<Vec<String>> {
    [
        "my dog has flea problems help please",
        "maybe not take him to dog park stupid",
        "my dalmation is so cute I love him",
        "stop posting stupid worthless garbage",
        "mr licks ate my steak how to stop him",
        "quit buying worthless dog food stupid",
    ]
    .iter()
    .map(|s| s.split_whitespace().map(str::to_string).collect())
    .collect()
}

// ---------------------------------------------------------------------------
// Vectorization
// ---------------------------------------------------------------------------

#[test]
fn vectors_have_vocabulary_width() {
    let docs = postings();
    let vocab = Vocabulary::build(&docs);
    for doc in &docs {
        let presence = vectorize(&vocab, VectorizerKind::SetOfWords, doc);
        let counts = vectorize(&vocab, VectorizerKind::BagOfWords, doc);
        assert_eq!(presence.len(), vocab.len());
        assert_eq!(counts.len(), vocab.len());
        assert!(presence.iter().all(|&v| v <= 1));
        assert_eq!(counts.sum() as usize, doc.len());
    }
}

// ---------------------------------------------------------------------------
// Training and classification
// ---------------------------------------------------------------------------

#[test]
fn toy_posting_list() {
    let docs = postings();
    let labels = vec![0u8, 1, 0, 1, 0, 1];
    let vocab = Vocabulary::build(&docs);
    let matrix: Vec<DocumentVector> = docs.iter().map(|d| vocab.vectorize_presence(d)).collect();
    let model = NaiveBayesModel::train(&matrix, &labels).unwrap();

    assert!((model.p_class1() - 0.5).abs() < 1e-12);
    assert_eq!(model.classify(&vocab.vectorize_presence(&["love", "my", "dalmation"])).unwrap(), 0);
    assert_eq!(model.classify(&vocab.vectorize_presence(&["stupid", "garbage"])).unwrap(), 1);
    assert!(model.p0_vect().iter().all(|&lp| lp < 0.0));
}

#[test]
fn cross_validation_on_separable_corpus() {
    let mut corpus = LabeledCorpus::default();
    for i in 0..15 {
        corpus.push(tokenize(&format!("Limited offer: cheap pills, order {} now", i)), true);
        corpus.push(tokenize(&format!("Minutes of meeting {} attached for review", i)), false);
    }

    let config = BayesConfig {
        test_size: 6,
        iterations: 4,
        seed: Some(2024),
        ..BayesConfig::default()
    };
    let eval = bayes_hold_out(&corpus, &config).unwrap();
    assert_eq!(eval.reports.len(), 4);
    assert!(eval.reports.iter().all(|r| r.total == 6));
    assert_eq!(eval.mean_error_rate(), 0.0);

    let top = eval
        .classifier
        .model
        .top_words(&eval.classifier.vocabulary, config.top_word_threshold)
        .unwrap();
    assert!(top.class1.iter().any(|(w, _)| w == "pills"));
}
