use crate::image_classifier::interface::{Classification, ClassificationError};

const PROBABILITY_SUM_TOLERANCE: f32 = 1e-3;

/// Pairs raw model scores with their labels, ranked by descending confidence.
///
/// Scores that already form a probability distribution are kept, anything
/// else (logits) goes through a softmax first.
pub fn rank(
    labels: &[String],
    scores: &[f32],
) -> Result<Vec<Classification>, ClassificationError> {
    if scores.len() != labels.len() {
        return Err(ClassificationError::Output(format!(
            "{} scores for {} labels",
            scores.len(),
            labels.len()
        )));
    }

    if let Some(score) = scores.iter().find(|score| !score.is_finite()) {
        return Err(ClassificationError::Output(format!(
            "non-finite score {}",
            score
        )));
    }

    let confidences = if is_probability_distribution(scores) {
        scores.to_vec()
    } else {
        softmax(scores)
    };

    let mut ranked: Vec<Classification> = labels
        .iter()
        .zip(confidences)
        .map(|(label, confidence)| Classification::new(label.clone(), confidence.clamp(0.0, 1.0)))
        .collect();

    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    Ok(ranked)
}

fn is_probability_distribution(scores: &[f32]) -> bool {
    scores.iter().all(|score| (0.0..=1.0).contains(score))
        && scores.iter().sum::<f32>() <= 1.0 + PROBABILITY_SUM_TOLERANCE
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|score| (score - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
