//! Party intake form: validation, normalization, id generation and the
//! state machine that ties them together.

pub mod context;
pub mod controller;
pub mod identifier;
pub mod normalizer;
pub mod scheduler;
pub mod validator;

pub use context::FormContext;
pub use controller::{
    EditOutcome, FormEvent, FormServices, FormSettings, FormState, Navigation, Notice,
    NoticeLevel, PartyForm, SubmitOutcome,
};
pub use identifier::{generate, GeneratedId, IdEntropy, SystemEntropy};
pub use normalizer::{normalize, Normalized};
pub use validator::{validate, ErrorMap, FieldError, FieldErrorKind, FieldValidator};
