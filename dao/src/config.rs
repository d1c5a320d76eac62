use pf_error::{Invalid, Result};
use pf_store_json::model::config::ConfigModel;

use crate::{image::ImageSubmission, DaoCtx};

/// Site-wide settings shown on every page.
pub struct ConfigDao {
    model: ConfigModel,
}

#[derive(Default)]
pub struct ConfigSubmission {
    name: String,
    course_number: String,
    course_description: String,
    profile_info: String,
    linkedin: String,
    theme: String,
    image: ImageSubmission,
}

impl ConfigSubmission {
    pub fn new(
        name: &str,
        course_number: &str,
        course_description: &str,
        profile_info: &str,
        linkedin: &str,
        theme: &str,
        image: ImageSubmission,
    ) -> Self {
        Self {
            name: name.to_owned(),
            course_number: course_number.to_owned(),
            course_description: course_description.to_owned(),
            profile_info: profile_info.to_owned(),
            linkedin: linkedin.to_owned(),
            theme: theme.to_owned(),
            image,
        }
    }
}

impl ConfigDao {
    pub fn name(&self) -> &str {
        self.model.name()
    }

    pub fn course_number(&self) -> &str {
        self.model.course_number()
    }

    pub fn course_description(&self) -> &str {
        self.model.course_description()
    }

    pub fn profile_info(&self) -> &str {
        self.model.profile_info()
    }

    pub fn linkedin(&self) -> &str {
        self.model.linkedin()
    }

    pub fn theme(&self) -> &str {
        self.model.theme()
    }

    pub fn profile_image(&self) -> &str {
        self.model.profile_image()
    }

    pub async fn db_select(ctx: &DaoCtx) -> Result<Self> {
        Ok(Self {
            model: ctx.store().select_config().await?,
        })
    }

    /// Text fields are trimmed. The profile image is replaced by a new upload
    /// or URL when given and must not end up empty.
    pub async fn db_update(ctx: &DaoCtx, data: &ConfigSubmission) -> Result<Self> {
        let current = ctx.store().select_config().await?;

        let choice = data.image.choose();
        if !choice.is_present(current.profile_image()) {
            return Err(Invalid::ProfileImageRequired.into());
        }
        let profile_image = choice.resolve(ctx.images(), current.profile_image()).await?;

        let model = ConfigModel::new(
            data.name.trim(),
            data.course_number.trim(),
            data.course_description.trim(),
            data.profile_info.trim(),
            data.linkedin.trim(),
            data.theme.trim(),
            &profile_image,
        )
        .with_extra_from(&current);
        if let Err(err) = ctx.store().update_config(&model).await {
            choice.discard(ctx.images(), &profile_image).await;
            return Err(err.into());
        }

        pf_log::info(Some("🛠️"), "[ConfigDao] Updated site configuration");

        Ok(Self { model })
    }
}
