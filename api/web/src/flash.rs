use std::str::FromStr;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    HttpRequest,
};
use pf_error::{Invalid, NOT_FOUND_MESSAGE};
use strum_macros::{EnumString, IntoStaticStr};

pub const FLASH_COOKIE: &str = "pf_flash";

/// One-shot notice shown on the next rendered page.
#[derive(EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum Flash {
    LoginSuccessful,
    IncorrectPassword,
    LoggedOut,
    ConfigUpdated,
    ProjectAdded,
    ProjectUpdated,
    ProjectDeleted,
    ProjectNotFound,
    ImageRequired,
    TitleRequired,
    WebsiteUrlRequired,
    GithubUrlRequired,
    DescriptionTooShort,
    ProfileImageRequired,
}

impl Flash {
    /// Bootstrap alert variant.
    pub fn level(&self) -> &'static str {
        match self {
            Self::LoginSuccessful
            | Self::ConfigUpdated
            | Self::ProjectAdded
            | Self::ProjectUpdated
            | Self::ProjectDeleted => "success",
            Self::LoggedOut => "info",
            _ => "danger",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::LoginSuccessful => "Login successful!",
            Self::IncorrectPassword => "Incorrect password.",
            Self::LoggedOut => "Logged out successfully!",
            Self::ConfigUpdated => "Configuration updated!",
            Self::ProjectAdded => "Project added successfully!",
            Self::ProjectUpdated => "Project updated successfully!",
            Self::ProjectDeleted => "Project deleted!",
            Self::ProjectNotFound => NOT_FOUND_MESSAGE,
            Self::ImageRequired => Invalid::ImageRequired.message(),
            Self::TitleRequired => Invalid::TitleRequired.message(),
            Self::WebsiteUrlRequired => Invalid::WebsiteUrlRequired.message(),
            Self::GithubUrlRequired => Invalid::GithubUrlRequired.message(),
            Self::DescriptionTooShort => Invalid::DescriptionTooShort.message(),
            Self::ProfileImageRequired => Invalid::ProfileImageRequired.message(),
        }
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, <&'static str>::from(*self))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, "")
            .path("/")
            .max_age(Duration::ZERO)
            .finish()
    }

    /// Unknown values are ignored.
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.cookie(FLASH_COOKIE)
            .and_then(|cookie| Self::from_str(cookie.value()).ok())
    }
}

impl From<Invalid> for Flash {
    fn from(invalid: Invalid) -> Self {
        match invalid {
            Invalid::ImageRequired => Self::ImageRequired,
            Invalid::TitleRequired => Self::TitleRequired,
            Invalid::WebsiteUrlRequired => Self::WebsiteUrlRequired,
            Invalid::GithubUrlRequired => Self::GithubUrlRequired,
            Invalid::DescriptionTooShort => Self::DescriptionTooShort,
            Invalid::ProfileImageRequired => Self::ProfileImageRequired,
        }
    }
}
