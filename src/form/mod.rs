//! Contact form: live phone masking, validation and result banners.

mod banner;
mod phone;
mod pipeline;
mod validator;

pub use banner::{banner_text, BannerController, DEFAULT_BANNER_TIMEOUT};
pub use phone::format_phone_input;
pub use pipeline::{
    ContactForm, FormDelivery, LoggingDelivery, SubmissionOutcome, SubmitEvent, PHONE_FIELD_ID,
};
pub use validator::{FormSubmission, FormValidator, ValidationFailure, REQUIRED_FIELDS};
