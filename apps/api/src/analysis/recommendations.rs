//! Maps aggregated scores and labels to ordered,
//! fixed improvement suggestions.

use crate::analysis::ats::CategoryScores;
use crate::analysis::detector::Classification;
use crate::analysis::rules::AtsRules;

/// One suggestion per weak category, in category order.
pub fn ats_recommendations(categories: &CategoryScores, rules: &AtsRules) -> Vec<String> {
    let mut recommendations: Vec<String> = categories
        .iter()
        .filter(|(_, result)| (result.score as i32) < rules.recommend_below)
        .map(|(name, _)| category_suggestion(name).to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(
            "Your resume is well optimized for ATS systems. Keep tailoring keywords to each job description."
                .to_string(),
        );
    }
    recommendations
}

fn category_suggestion(category: &str) -> &'static str {
    match category {
        "formatting" => "Save your resume as a PDF or DOCX file so ATS parsers can read it reliably",
        "keywords" => "Add more industry-specific keywords to improve ATS matching",
        "structure" => "Use clearly labelled Summary, Experience, Education and Skills sections",
        "readability" => "Keep sentences short and the resume between 200 and 800 words",
        _ => "Review this section for ATS compatibility",
    }
}

/// Driven only by the classification band, never by the detected patterns.
pub fn authorship_recommendations(classification: Classification) -> Vec<String> {
    let lines = match classification {
        Classification::AiGenerated => vec![
            "Document shows strong AI writing patterns. Consider adding more personal voice and varied sentence structures.",
            "Use more conversational language and avoid overly formal transitions.",
        ],
        Classification::Mixed => {
            vec!["Document shows mixed characteristics. Review for consistency in writing style."]
        }
        Classification::HumanWritten => {
            vec!["Document appears to be primarily human-written with natural language patterns."]
        }
    };
    lines.into_iter().map(String::from).collect()
}
