// Engine layer - pure roster logic (classification, scoping, link
// building, follow-up mutation). Sits between the typed roster
// (cartera-types) and CLI presentation; does no I/O of its own.

pub mod classify;
pub mod recorder;
pub mod scope;
pub mod whatsapp;

pub use classify::{
    ContactStatus, Coverage, CoverageReport, STALE_AFTER_DAYS, StaleClient, UnmanagedClient,
    classify, status_of,
};
pub use recorder::{FollowUp, record_follow_up};
pub use scope::{ALL_SENTINEL, Scope, salespeople, salespeople_sorted};
pub use whatsapp::{DEFAULT_GREETING, whatsapp_link};
