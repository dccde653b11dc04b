// Resume builder: draft validation, titles, and the plain-text rendition fed to
// the ATS scorer. HTML rendering lives in crate::render.

pub mod handlers;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::forms::fields::{email, required, MAX_NAME_CHARS};
use crate::models::resume::ResumeDraft;

pub const TEMPLATE_NAME: &str = "ats-optimized";

/// Owner previews need a name and a contactable email; everything else is optional.
pub fn validate_draft(draft: &ResumeDraft) -> Result<(), AppError> {
    let info = &draft.personal_info;
    required("personalInfo.name", Some(info.name.as_str()), MAX_NAME_CHARS)?;
    email("personalInfo.email", Some(info.email.as_str()))?;
    Ok(())
}

/// `"<name> - Resume - <M/D/YYYY>"`
pub fn resume_title(name: &str, date: NaiveDate) -> String {
    format!("{} - Resume - {}", name.trim(), date.format("%-m/%-d/%Y"))
}

/// Flattens a draft into the text an ATS would see, with section headings.
pub fn resume_plain_text(draft: &ResumeDraft) -> String {
    let info = &draft.personal_info;
    let mut lines: Vec<String> = Vec::new();

    let contact = [
        Some(info.name.as_str()),
        Some(info.email.as_str()),
        info.phone.as_deref(),
        info.location.as_deref(),
        info.linkedin.as_deref(),
    ];
    lines.extend(
        contact
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );

    if let Some(summary) = draft.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        lines.push("Summary".to_string());
        lines.push(summary.to_string());
    }

    if !draft.experience.is_empty() {
        lines.push("Experience".to_string());
        for exp in &draft.experience {
            let heading = [exp.position.as_deref(), exp.company.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
            let dates = match (exp.start_date.as_deref(), exp.end_date.as_deref()) {
                (Some(start), Some(end)) => format!("{start} - {end}"),
                (Some(start), None) => format!("{start} - Present"),
                (None, Some(end)) => end.to_string(),
                (None, None) => String::new(),
            };
            lines.extend([heading, dates].into_iter().filter(|s| !s.is_empty()));
            lines.extend(exp.description.clone().filter(|d| !d.trim().is_empty()));
        }
    }

    if !draft.education.is_empty() {
        lines.push("Education".to_string());
        for edu in &draft.education {
            let line = [edu.degree.as_deref(), edu.institution.as_deref(), edu.year.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }

    let skills: Vec<&str> = draft
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !skills.is_empty() {
        lines.push("Skills".to_string());
        lines.push(skills.join(", "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationItem, ExperienceItem, PersonalInfo};

    fn draft() -> ResumeDraft {
        ResumeDraft {
            personal_info: PersonalInfo {
                name: "Amina Hassan".to_string(),
                email: "amina@example.com".to_string(),
                phone: None,
                location: Some("Mombasa".to_string()),
                linkedin: None,
            },
            summary: Some("Project lead with team management experience.".to_string()),
            experience: vec![ExperienceItem {
                position: Some("Analyst".to_string()),
                company: Some("Acme".to_string()),
                start_date: Some("2019".to_string()),
                end_date: None,
                description: Some("Led development of reporting".to_string()),
            }],
            education: vec![EducationItem {
                degree: Some("BSc".to_string()),
                institution: None,
                year: Some("2018".to_string()),
            }],
            skills: vec!["SQL".to_string(), " ".to_string(), "Excel".to_string()],
        }
    }

    #[test]
    fn test_title_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(resume_title(" Amina ", date), "Amina - Resume - 3/7/2026");
    }

    #[test]
    fn test_validate_requires_name_and_email() {
        assert!(validate_draft(&draft()).is_ok());

        let mut d = draft();
        d.personal_info.name = String::new();
        assert!(validate_draft(&d).unwrap_err().to_string().contains("personalInfo.name"));

        let mut d = draft();
        d.personal_info.email = "nope".to_string();
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn test_plain_text_has_section_headings() {
        let text = resume_plain_text(&draft());
        assert_eq!(
            text,
            "Amina Hassan\namina@example.com\nMombasa\n\
             Summary\nProject lead with team management experience.\n\
             Experience\nAnalyst, Acme\n2019 - Present\nLed development of reporting\n\
             Education\nBSc, 2018\n\
             Skills\nSQL, Excel"
        );
    }

    #[test]
    fn test_plain_text_of_empty_draft_is_empty() {
        assert_eq!(resume_plain_text(&ResumeDraft::default()), "");
    }
}
