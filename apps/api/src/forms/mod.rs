// Public site forms: contact messages and service requests with quote estimates.
// Submissions are validated and acknowledged; persistence lives outside this service.

pub mod contact;
pub mod fields;
pub mod handlers;
pub mod service_request;
