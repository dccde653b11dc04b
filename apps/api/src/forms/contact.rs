use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::forms::fields::{email, optional, required, MAX_MESSAGE_CHARS, MAX_NAME_CHARS};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A contact message that passed validation. New messages start unread.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, AppError> {
        Ok(ContactSubmission {
            name: required("name", self.name.as_deref(), MAX_NAME_CHARS)?.to_string(),
            email: email("email", self.email.as_deref())?.to_string(),
            phone: optional("phone", self.phone.as_deref(), 32)?.map(str::to_string),
            service: optional("service", self.service.as_deref(), MAX_NAME_CHARS)?
                .map(str::to_string),
            message: required("message", self.message.as_deref(), MAX_MESSAGE_CHARS)?.to_string(),
        })
    }
}
