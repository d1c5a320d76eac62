use std::fmt;

pub const NOT_FOUND_MESSAGE: &str = "Project not found!";

/// Outcome of an entry manager operation that did not succeed.
#[derive(Debug)]
pub enum Error {
    /// Submitted data was rejected. Nothing was written.
    Validation(Invalid),
    /// No project carries the requested id.
    NotFound(i64),
    /// Reading or writing the backing store or an upload failed.
    Storage(anyhow::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(invalid) => write!(f, "{invalid}"),
            Self::NotFound(_) => f.write_str(NOT_FOUND_MESSAGE),
            Self::Storage(err) => write!(f, "Storage failure: {err:#}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Invalid> for Error {
    fn from(invalid: Invalid) -> Self {
        Self::Validation(invalid)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.into())
    }
}

/// Reason a submission was rejected, reported for the first failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    ImageRequired,
    TitleRequired,
    WebsiteUrlRequired,
    GithubUrlRequired,
    DescriptionTooShort,
    ProfileImageRequired,
}

impl Invalid {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ImageRequired => "Project image is required!",
            Self::TitleRequired => "Title is required!",
            Self::WebsiteUrlRequired => "Website URL is required!",
            Self::GithubUrlRequired => "GitHub URL is required!",
            Self::DescriptionTooShort => "Description must be at least 100 characters long!",
            Self::ProfileImageRequired => "Profile image is required!",
        }
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_form_feedback() {
        assert_eq!(
            Error::from(Invalid::TitleRequired).to_string(),
            "Title is required!"
        );
        assert_eq!(Error::NotFound(7).to_string(), "Project not found!");
    }

    #[test]
    fn io_errors_become_storage() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(matches!(err, Error::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
