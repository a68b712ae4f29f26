//! Product form: field normalization, validation and the submit lifecycle.

pub mod machine;
pub mod values;

pub use machine::{validate, FieldErrors, FormPhase, ProductForm, SubmitAttempt, SubmitOutcome};
pub use values::{Entry, FormField, FormValues};
