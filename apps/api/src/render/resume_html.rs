//! Resume HTML rendering for the builder preview and the shareable public view.

use crate::models::resume::ResumeDraft;
use crate::render::escape_html;

/// Who the rendered page is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The resume owner: full contact details.
    Owner,
    /// Anyone with a share link: email and phone are filtered out.
    Public,
}

const STYLE: &str = "body{font-family:Arial,sans-serif;line-height:1.6;color:#333;max-width:800px;margin:0 auto;padding:20px}\
.header{text-align:center;margin-bottom:30px}.name{font-size:28px;font-weight:bold}.contact{font-size:14px;color:#666}\
.section{margin-bottom:25px}.section-title{font-size:18px;font-weight:bold;border-bottom:2px solid #333;margin-bottom:15px}\
.job-title,.degree{font-weight:bold}.company{font-style:italic;color:#666}.duration{float:right;color:#666;font-size:14px}\
.description{margin-top:8px;white-space:pre-line}.skills-list{display:flex;flex-wrap:wrap;gap:10px}\
.skill{background:#f0f0f0;padding:5px 12px;border-radius:15px;font-size:14px}\
.privacy-notice{background:#f0f8ff;border:1px solid #0066cc;padding:15px;margin-bottom:20px}\
@media print{body{padding:15px}.privacy-notice{display:none}}";

/// Renders a complete HTML document. All draft values are escaped.
pub fn render_resume_html(draft: &ResumeDraft, title: &str, audience: Audience) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if audience == Audience::Public {
        html.push_str("<meta name=\"robots\" content=\"noindex, nofollow\">\n");
    }
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

    if audience == Audience::Public {
        html.push_str(
            "<div class=\"privacy-notice\"><p><strong>Privacy Protected:</strong> \
             Contact details have been filtered from this public resume view.</p></div>\n",
        );
    }

    push_header(&mut html, draft, audience);
    push_summary(&mut html, draft);
    push_experience(&mut html, draft);
    push_education(&mut html, draft);
    push_skills(&mut html, draft);

    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, draft: &ResumeDraft, audience: Audience) {
    let info = &draft.personal_info;
    let name = non_blank(Some(&info.name)).unwrap_or("Name Hidden");

    let mut contact: Vec<&str> = Vec::new();
    if audience == Audience::Owner {
        contact.extend(non_blank(Some(&info.email)));
        contact.extend(non_blank(info.phone.as_ref()));
    }
    contact.extend(non_blank(info.location.as_ref()));
    contact.extend(non_blank(info.linkedin.as_ref()));

    let contact: Vec<String> = contact.into_iter().map(escape_html).collect();
    html.push_str(&format!(
        "<div class=\"header\">\n<div class=\"name\">{}</div>\n<div class=\"contact\">{}</div>\n</div>\n",
        escape_html(name),
        contact.join(" | ")
    ));
}

fn push_summary(html: &mut String, draft: &ResumeDraft) {
    if let Some(summary) = non_blank(draft.summary.as_ref()) {
        html.push_str(&format!(
            "<div class=\"section\">\n<div class=\"section-title\">Professional Summary</div>\n<p>{}</p>\n</div>\n",
            escape_html(summary)
        ));
    }
}

fn push_experience(html: &mut String, draft: &ResumeDraft) {
    if draft.experience.is_empty() {
        return;
    }
    html.push_str("<div class=\"section\">\n<div class=\"section-title\">Work Experience</div>\n");
    for exp in &draft.experience {
        html.push_str(&format!(
            "<div class=\"experience-item\">\n<div class=\"job-title\">{}</div>\n<div class=\"company\">{}</div>\n<div class=\"duration\">{} - {}</div>\n<div style=\"clear: both;\"></div>\n",
            escape_html(non_blank(exp.position.as_ref()).unwrap_or("Position not specified")),
            escape_html(non_blank(exp.company.as_ref()).unwrap_or("Company not specified")),
            escape_html(non_blank(exp.start_date.as_ref()).unwrap_or("")),
            escape_html(non_blank(exp.end_date.as_ref()).unwrap_or("Present")),
        ));
        if let Some(description) = non_blank(exp.description.as_ref()) {
            html.push_str(&format!(
                "<div class=\"description\">{}</div>\n",
                escape_html(description)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}

fn push_education(html: &mut String, draft: &ResumeDraft) {
    if draft.education.is_empty() {
        return;
    }
    html.push_str("<div class=\"section\">\n<div class=\"section-title\">Education</div>\n");
    for edu in &draft.education {
        html.push_str(&format!(
            "<div class=\"education-item\">\n<div class=\"degree\">{}</div>\n<div class=\"institution\">{} - {}</div>\n</div>\n",
            escape_html(non_blank(edu.degree.as_ref()).unwrap_or("Degree not specified")),
            escape_html(non_blank(edu.institution.as_ref()).unwrap_or("Institution not specified")),
            escape_html(non_blank(edu.year.as_ref()).unwrap_or("Year not specified")),
        ));
    }
    html.push_str("</div>\n");
}

fn push_skills(html: &mut String, draft: &ResumeDraft) {
    let skills: Vec<String> = draft
        .skills
        .iter()
        .filter_map(|s| non_blank(Some(s)))
        .map(|s| format!("<span class=\"skill\">{}</span>", escape_html(s)))
        .collect();
    if skills.is_empty() {
        return;
    }
    html.push_str(&format!(
        "<div class=\"section\">\n<div class=\"section-title\">Skills</div>\n<div class=\"skills-list\">{}</div>\n</div>\n",
        skills.concat()
    ));
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}
