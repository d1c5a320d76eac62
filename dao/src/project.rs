use chrono::Utc;
use pf_error::{Error, Invalid, Result};
use pf_sanitizer::{newlines_to_markup, Sanitizer};
use pf_store_json::model::project::ProjectModel;

use crate::{image::ImageSubmission, DaoCtx};

pub const DESCRIPTION_MIN_LENGTH: usize = 100;

pub struct ProjectDao {
    id: i64,
    image: String,
    title: String,
    website_url: String,
    github_url: String,
    description: String,
}

/// Fields of an add or edit form as submitted.
#[derive(Default)]
pub struct ProjectSubmission {
    title: String,
    website_url: String,
    github_url: String,
    description: String,
    image: ImageSubmission,
}

impl ProjectSubmission {
    pub fn new(
        title: &str,
        website_url: &str,
        github_url: &str,
        description: &str,
        image: ImageSubmission,
    ) -> Self {
        Self {
            title: title.to_owned(),
            website_url: website_url.to_owned(),
            github_url: github_url.to_owned(),
            description: description.to_owned(),
            image,
        }
    }
}

struct CheckedFields {
    title: String,
    website_url: String,
    github_url: String,
    description: String,
}

impl CheckedFields {
    /// First failing rule wins: image, title, website URL, GitHub URL,
    /// description length.
    fn check(
        sanitizer: &Sanitizer,
        data: &ProjectSubmission,
        has_image: bool,
        trim_description: bool,
    ) -> std::result::Result<Self, Invalid> {
        if !has_image {
            return Err(Invalid::ImageRequired);
        }

        let title = data.title.trim();
        if title.is_empty() {
            return Err(Invalid::TitleRequired);
        }
        let website_url = data.website_url.trim();
        if website_url.is_empty() {
            return Err(Invalid::WebsiteUrlRequired);
        }
        let github_url = data.github_url.trim();
        if github_url.is_empty() {
            return Err(Invalid::GithubUrlRequired);
        }

        let raw_description = if trim_description {
            data.description.trim()
        } else {
            data.description.as_str()
        };
        let description = sanitizer.clean(&newlines_to_markup(raw_description));
        if sanitizer.text_length(&description) < DESCRIPTION_MIN_LENGTH {
            return Err(Invalid::DescriptionTooShort);
        }

        Ok(Self {
            title: title.to_owned(),
            website_url: website_url.to_owned(),
            github_url: github_url.to_owned(),
            description,
        })
    }
}

impl ProjectDao {
    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    pub fn github_url(&self) -> &str {
        &self.github_url
    }

    /// Sanitized HTML.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description as plain text for the editor, `<br>` turned back into newlines.
    pub fn editable_description(&self, sanitizer: &Sanitizer) -> String {
        sanitizer.markup_to_newlines(&self.description)
    }

    pub async fn db_insert(ctx: &DaoCtx, data: &ProjectSubmission) -> Result<Self> {
        let choice = data.image.choose();
        let fields = CheckedFields::check(ctx.sanitizer(), data, choice.is_present(""), false)?;
        let image = choice.resolve(ctx.images(), "").await?;

        let mut project = Self {
            id: Utc::now().timestamp_millis(),
            image,
            title: fields.title,
            website_url: fields.website_url,
            github_url: fields.github_url,
            description: fields.description,
        };
        project.id = match ctx.store().insert_project(&project.to_model()).await {
            Ok(id) => id,
            Err(err) => {
                choice.discard(ctx.images(), &project.image).await;
                return Err(err.into());
            }
        };

        pf_log::info(
            Some("📝"),
            format!("[ProjectDao] Added project {} '{}'", project.id, project.title),
        );

        Ok(project)
    }

    pub async fn db_select(ctx: &DaoCtx, id: &i64) -> Result<Self> {
        match ctx.store().select_project(id).await? {
            Some(model) => Ok(Self::from_model(&model)),
            None => Err(Error::NotFound(*id)),
        }
    }

    pub async fn db_select_many(ctx: &DaoCtx) -> Result<Vec<Self>> {
        Ok(ctx
            .store()
            .select_many_projects()
            .await?
            .iter()
            .map(Self::from_model)
            .collect())
    }

    /// Re-validates everything like `db_insert`; the stored image is kept
    /// when the form carries no new one.
    pub async fn db_update(ctx: &DaoCtx, id: &i64, data: &ProjectSubmission) -> Result<Self> {
        let current = Self::db_select(ctx, id).await?;

        let choice = data.image.choose();
        let fields = CheckedFields::check(
            ctx.sanitizer(),
            data,
            choice.is_present(&current.image),
            true,
        )?;
        let image = choice.resolve(ctx.images(), &current.image).await?;

        let project = Self {
            id: current.id,
            image,
            title: fields.title,
            website_url: fields.website_url,
            github_url: fields.github_url,
            description: fields.description,
        };
        let outcome = match ctx.store().update_project(&project.to_model()).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::NotFound(*id)),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = outcome {
            choice.discard(ctx.images(), &project.image).await;
            return Err(err);
        }

        pf_log::info(
            Some("📝"),
            format!("[ProjectDao] Updated project {}", project.id),
        );

        Ok(project)
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn db_delete(ctx: &DaoCtx, id: &i64) -> Result<()> {
        if ctx.store().delete_project(id).await? {
            pf_log::info(Some("🗑️"), format!("[ProjectDao] Deleted project {id}"));
        }
        Ok(())
    }

    fn to_model(&self) -> ProjectModel {
        ProjectModel::new(
            &self.id,
            &self.image,
            &self.title,
            &self.website_url,
            &self.github_url,
            &self.description,
        )
    }

    fn from_model(model: &ProjectModel) -> Self {
        Self {
            id: *model.id(),
            image: model.image().to_owned(),
            title: model.title().to_owned(),
            website_url: model.website_url().to_owned(),
            github_url: model.github_url().to_owned(),
            description: model.description().to_owned(),
        }
    }
}
