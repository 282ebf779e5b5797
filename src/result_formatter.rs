use crate::image_classifier::interface::Classification;

const MAX_DISPLAYED: usize = 2;

pub const NOTHING_RECOGNIZED: &str = "Nothing recognized.";

pub fn format_classifications(classifications: &[Classification]) -> String {
    if classifications.is_empty() {
        return NOTHING_RECOGNIZED.to_string();
    }

    let descriptions: Vec<String> = classifications
        .iter()
        .take(MAX_DISPLAYED)
        .map(|classification| {
            format!(
                "  ({:.2}) {}",
                classification.confidence, classification.label
            )
        })
        .collect();

    format!("Classification:\n{}", descriptions.join("\n"))
}
