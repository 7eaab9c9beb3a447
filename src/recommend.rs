use crate::emotion::Emotion;
use crate::extract::EmotionFeatures;
use crate::tuning::Tuning;

const SUPPORT: &[&str] = &[
    "Consider reaching out to friends, family, or a counselor for support",
    "Practice self-care activities that bring you comfort",
    "Remember that difficult emotions are temporary and will pass",
    "Try mindfulness or breathing exercises to help manage stress",
];

const COOL_DOWN: &[&str] = &[
    "Take some time to cool down before making important decisions",
    "Consider physical exercise to help release tension",
    "Practice expressing your feelings in a constructive way",
    "Identify the root cause of your anger to address it effectively",
];

const SAVOR: &[&str] = &[
    "Savor this positive moment and reflect on what brought it about",
    "Consider sharing your joy with others who matter to you",
    "Think about how you can create more moments like this",
    "Use this positive energy to tackle challenges or help others",
];

const BALANCED: &[&str] = &[
    "Your emotional state seems balanced right now",
    "This might be a good time for reflection or planning",
    "Consider what activities or goals would bring you fulfillment",
    "Maintain this stability through consistent self-care practices",
];

/// Suggestions keyed on the emotions scoring above the recommendation
/// threshold, in the order support, cool-down, savor.
pub(crate) fn recommend(features: &EmotionFeatures, tuning: &Tuning) -> Vec<String> {
    let strong: Vec<Emotion> = features
        .emotion_scores
        .iter()
        .filter(|(_, s)| s.score > tuning.recommendation_threshold)
        .map(|(e, _)| e)
        .collect();

    let mut picked: Vec<&str> = Vec::new();
    if strong.contains(&Emotion::Sadness) || strong.contains(&Emotion::Fear) {
        picked.extend(SUPPORT);
    }
    if strong.contains(&Emotion::Anger) {
        picked.extend(COOL_DOWN);
    }
    if strong.contains(&Emotion::Joy) {
        picked.extend(SAVOR);
    }
    if strong.is_empty() {
        picked.extend(BALANCED);
    }

    picked
        .into_iter()
        .take(tuning.recommendation_cap)
        .map(String::from)
        .collect()
}
