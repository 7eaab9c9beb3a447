use std::io::Write;

use pensieve::{
    analyze, analyze_progression, default_analyzer, extract_features, Config, Emotion,
    EmotionAnalyzer, EmotionalArc, Sentiment, Tuning,
};

const EPS: f64 = 1e-9;

#[test]
fn empty_text_is_neutral() {
    let result = extract_features("");
    for (emotion, score) in result.emotion_scores.iter() {
        assert_eq!(score.score, 0.0, "{emotion} should be zero");
        assert!(score.matches.is_empty());
    }
    assert_eq!(result.overall_sentiment, Sentiment::Neutral);
    assert!(result.emotional_phrases.is_empty());
}

#[test]
fn empty_text_serializes_without_negative_zero() {
    let json = serde_json::to_string(&extract_features("")).unwrap();
    assert!(!json.contains("-0.0"), "negative zero in {json}");
    assert!(json.contains(r#""joy":{"score":0.0,"matches":[]}"#));
}

#[test]
fn default_analyzer_uses_builtin_lexicon_and_tuning() {
    let analyzer = default_analyzer();
    assert_eq!(analyzer.tuning(), &Tuning::default());
    assert!(analyzer.lexicon().keywords(Emotion::Fear).any(|k| k == "terrified"));
    assert!(analyzer.lexicon().is_negation("never"));
    assert_eq!(
        analyzer.extract_features("I am very happy"),
        extract_features("I am very happy")
    );
}

#[test]
fn punctuation_and_non_ascii_never_fail() {
    for text in ["?!.;:", "   ", "😀😀😀", "日本語のテキスト。", "...happy..."] {
        let result = extract_features(text);
        let progression = analyze_progression(text);
        assert!(progression.stability >= 0.0 && progression.stability <= 1.0);
        assert!(result.emotional_phrases.len() <= 5);
    }
}

#[test]
fn negated_intensified_keyword() {
    let result = extract_features("I am not very happy");
    let joy = &result.emotion_scores.joy;
    assert_eq!(joy.matches.len(), 1);
    let m = &joy.matches[0];
    assert_eq!(m.keyword, "happy");
    assert!(m.negated);
    assert!((m.intensity - 1.5).abs() < EPS);
    assert!((m.score - -0.75).abs() < EPS);
    assert!((joy.score - -0.75).abs() < EPS);
}

#[test]
fn modifier_binds_to_nearest_keyword() {
    let result = extract_features("I am extremely sad and terrified");
    let sadness = &result.emotion_scores.sadness;
    let fear = &result.emotion_scores.fear;
    assert!((sadness.matches[0].intensity - 2.0).abs() < EPS);
    assert!((fear.matches[0].intensity - 1.0).abs() < EPS);
    assert!(sadness.score > 0.0);
    assert!(fear.score > 0.0);
    assert_eq!(result.overall_sentiment, Sentiment::Negative);
}

#[test]
fn tied_aggregates_are_neutral() {
    let result = extract_features("I am happy and sad");
    assert_eq!(result.emotion_scores.joy.score, 1.0);
    assert_eq!(result.emotion_scores.sadness.score, 1.0);
    assert_eq!(result.overall_sentiment, Sentiment::Neutral);
}

#[test]
fn single_sentence_has_no_arc() {
    let result = analyze_progression("I am thrilled about tomorrow.");
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.emotional_arc, EmotionalArc::InsufficientData);
    assert_eq!(result.stability, 1.0);
}

#[test]
fn empty_text_has_no_arc() {
    let result = analyze_progression("");
    assert!(result.entries.is_empty());
    assert_eq!(result.emotional_arc, EmotionalArc::InsufficientData);
    assert_eq!(result.stability, 1.0);
}

#[test]
fn recovery_arc() {
    let result = analyze_progression("I was terrified. Then I felt hopeful. Now I am thrilled.");
    let dominant: Vec<Option<Emotion>> =
        result.entries.iter().map(|e| e.dominant_emotion).collect();
    assert_eq!(
        dominant,
        [
            Some(Emotion::Fear),
            Some(Emotion::Anticipation),
            Some(Emotion::Joy)
        ]
    );
    assert_eq!(result.entries[0].sentiment, Sentiment::Negative);
    assert_eq!(result.entries[2].sentiment, Sentiment::Positive);
    assert_eq!(result.emotional_arc, EmotionalArc::Recovery);
    assert_eq!(result.stability, 0.5);
}

#[test]
fn decline_arc() {
    let result = analyze_progression(
        "We were so hopeful at first! Then everyone got anxious. In the end I was miserable.",
    );
    assert_eq!(result.emotional_arc, EmotionalArc::Decline);
    assert_eq!(result.entries[1].dominant_emotion, Some(Emotion::Fear));
}

#[test]
fn negated_sentence_has_neutral_dominant() {
    let result = analyze_progression("I am not worried. The end.");
    assert_eq!(result.entries[0].dominant_emotion, None);
    assert_eq!(result.entries[1].dominant_emotion, None);
}

#[test]
fn extraction_is_idempotent() {
    let text = "Honestly I was not very confident, but now I am really eager and a bit nervous!";
    let first = serde_json::to_string(&extract_features(text)).unwrap();
    let second = serde_json::to_string(&extract_features(text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn emotional_phrases_are_capped_and_ordered() {
    let text = "First I was very happy today. Then I became quite sad about it. \
                Later I got really angry with them. Soon I felt terribly afraid. \
                Next I was totally surprised by that. After that I felt disgusted by everything. \
                Finally I was hopeful again.";
    let phrases = extract_features(text).emotional_phrases;
    assert_eq!(phrases.len(), 5);
    assert_eq!(phrases[0], "first i was very happy today");
    assert_eq!(phrases[1], "then i became quite sad about it");
    assert_eq!(phrases[4], "next i was totally surprised by that");
}

#[test]
fn json_shape() {
    let report = analyze("I am really excited. But also a bit anxious.");
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    let scores = &json["features"]["emotion_scores"];
    for name in [
        "joy",
        "sadness",
        "anger",
        "fear",
        "surprise",
        "disgust",
        "trust",
        "anticipation",
    ] {
        assert!(scores[name]["score"].is_number(), "missing {name}");
        assert!(scores[name]["matches"].is_array());
    }
    let first_match = &scores["joy"]["matches"][0];
    assert_eq!(first_match["keyword"], "excited");
    assert!(first_match.get("intensity").is_some());
    assert!(first_match.get("negated").is_some());
    assert!(first_match.get("score").is_some());

    assert!(json["features"]["emotional_phrases"].is_array());
    assert!(json["features"]["overall_sentiment"].is_string());

    let progression = &json["progression"];
    assert!(progression["progression"].is_array());
    assert_eq!(progression["progression"][0]["sentence_number"], 1);
    assert!(progression["progression"][0]["dominant_emotion"].is_string());
    assert!(progression["emotional_arc"].is_string());
    assert!(progression["stability"].is_number());

    assert!(json["recommendations"].is_array());
}

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(EmotionAnalyzer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = std::sync::Arc::clone(&analyzer);
            std::thread::spawn(move || analyzer.extract_features("I am very happy").overall_sentiment)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Sentiment::Positive);
    }
}

#[test]
fn config_file_overrides_tuning() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"tuning": {{"negation_factor": -1.0, "sentiment_margin": 0.0}}}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let analyzer = EmotionAnalyzer::from_config(config).unwrap();
    let result = analyzer.extract_features("I am not happy");
    assert_eq!(result.emotion_scores.joy.score, -1.0);
    assert_eq!(result.overall_sentiment, Sentiment::Negative);
}

#[test]
fn config_file_with_unknown_section_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"tunning": {{}}}}"#).unwrap();
    assert!(matches!(
        Config::load(file.path()),
        Err(pensieve::Error::Parse(_))
    ));
}
