// Server-side HTML rendering. Every user-supplied value passes through
// escape_html before it is interpolated.

pub mod escape;
pub mod resume_html;

pub use escape::escape_html;
pub use resume_html::{render_resume_html, Audience};
