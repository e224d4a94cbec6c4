mod account;
mod draft;
mod envelope;
mod evaluator;
mod listing;
mod personnel;
mod rule_check;
mod verdict;


pub use account::{AccountError, NewUser, PasswordChange, PasswordChangeRequest, UserDraft};
pub use draft::{ActivityDraft, DraftError, DraftProduct, NewActivity, NewActivityProduct};
pub use envelope::{DoseClass, DoseEnvelope};
pub use evaluator::{assess, evaluate, ComplianceReport, MovementAssessment};
pub use listing::{ActivityFilter, ActivityRow, ActivitySnapshot, Listing};
pub use personnel::{
    DocumentDraft, NewDocument, NewPersonnel, PersonnelDraft, PersonnelError,
};
pub use rule_check::{check_rule, check_rule_set, RuleCheckError};
pub use verdict::{Badge, BadgeColor, Verdict};
