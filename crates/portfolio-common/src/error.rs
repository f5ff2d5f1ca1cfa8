/// Error types shared by the portfolio controllers.
///
/// These cover input the controllers refuse to act on (unknown scroll-spy targets,
/// contact submissions that would not pass the form's native constraints). Transport
/// failures talking to the contact backend live in `contact::ContactError`; the site
/// crate wraps `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}
