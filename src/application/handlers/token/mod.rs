//! Session token handlers.

mod issue_session_token;

pub use issue_session_token::{IssueSessionTokenCommand, IssueSessionTokenHandler};
