//! Service request validation and quote estimation against the price catalogue.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::forms::fields::{email, optional, required, MAX_MESSAGE_CHARS, MAX_NAME_CHARS};

/// Turnaround used when a service is not in the catalogue.
pub const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRate {
    pub cost_kes: u32,
    pub days: u32,
}

const fn rate(cost_kes: u32, days: u32) -> ServiceRate {
    ServiceRate { cost_kes, days }
}

/// (category, service type, rate)
pub const CATALOG: &[(&str, &str, ServiceRate)] = &[
    ("e-citizen", "birth-certificate", rate(500, 5)),
    ("e-citizen", "national-id", rate(300, 7)),
    ("e-citizen", "passport", rate(1000, 14)),
    ("e-citizen", "business-registration", rate(2000, 3)),
    ("e-citizen", "police-clearance", rate(800, 10)),
    ("e-citizen", "marriage-certificate", rate(600, 5)),
    ("visa", "tourist", rate(5000, 21)),
    ("visa", "business", rate(7000, 21)),
    ("visa", "student", rate(10000, 30)),
    ("visa", "work-permit", rate(15000, 45)),
    ("visa", "transit", rate(3000, 14)),
    ("visa", "family", rate(8000, 30)),
    ("design", "logo", rate(3000, 5)),
    ("design", "business-cards", rate(1500, 3)),
    ("design", "flyers", rate(2000, 4)),
    ("design", "social-media", rate(1000, 2)),
    ("design", "brochures", rate(5000, 7)),
    ("design", "website-graphics", rate(2500, 5)),
    ("branding", "brand-strategy", rate(15000, 14)),
    ("branding", "brand-identity", rate(10000, 10)),
    ("branding", "market-research", rate(8000, 7)),
    ("branding", "consultation", rate(5000, 2)),
    ("branding", "brand-guidelines", rate(7000, 5)),
    ("branding", "marketing-strategy", rate(12000, 10)),
];

pub fn lookup_rate(category: &str, service_type: &str) -> Option<ServiceRate> {
    let category = category.trim().to_lowercase();
    let service_type = service_type.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|(c, t, _)| *c == category && *t == service_type)
        .map(|(_, _, rate)| *rate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
}

impl Priority {
    pub fn from_urgency(urgency: Option<&str>) -> Self {
        match urgency.map(|u| u.trim().to_lowercase()) {
            Some(u) if u == "urgent" => Priority::High,
            _ => Priority::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEstimate {
    /// None for services outside the catalogue; those are priced on contact.
    pub estimated_cost: Option<u32>,
    pub estimated_days: u32,
    pub estimated_completion_date: NaiveDate,
    pub priority: Priority,
}

pub fn estimate_quote(
    category: &str,
    service_type: &str,
    urgency: Option<&str>,
    today: NaiveDate,
) -> QuoteEstimate {
    let rate = lookup_rate(category, service_type);
    let days = rate.map_or(DEFAULT_DAYS, |r| r.days);

    QuoteEstimate {
        estimated_cost: rate.map(|r| r.cost_kes),
        estimated_days: days,
        estimated_completion_date: today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX),
        priority: Priority::from_urgency(urgency),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request validation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestForm {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub service_category: Option<String>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub urgency: Option<String>,
}

/// A service request that passed validation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestSubmission {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_category: String,
    pub service_type: String,
    pub description: String,
    pub urgency: Option<String>,
}

impl ServiceRequestForm {
    pub fn validate(&self) -> Result<ServiceRequestSubmission, AppError> {
        Ok(ServiceRequestSubmission {
            client_name: required("clientName", self.client_name.as_deref(), MAX_NAME_CHARS)?
                .to_string(),
            client_email: email("clientEmail", self.client_email.as_deref())?.to_string(),
            client_phone: required("clientPhone", self.client_phone.as_deref(), 32)?.to_string(),
            service_category: required(
                "serviceCategory",
                self.service_category.as_deref(),
                MAX_NAME_CHARS,
            )?
            .to_lowercase(),
            service_type: required("serviceType", self.service_type.as_deref(), MAX_NAME_CHARS)?
                .to_lowercase(),
            description: required("description", self.description.as_deref(), MAX_MESSAGE_CHARS)?
                .to_string(),
            urgency: optional("urgency", self.urgency.as_deref(), 32)?.map(str::to_string),
        })
    }
}
