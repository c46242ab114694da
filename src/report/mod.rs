pub mod labels;
pub mod lead;
pub mod summary;

pub use labels::Language;
pub use lead::{Contact, District, LeadError, LeadPayload, LeadSource, DISTRICTS};
pub use summary::{format_euros, included_perks, render_summary};
