use std::borrow::Cow;

use crate::domain::DEFAULT_FOOTER;

pub const TEXT_PLACEHOLDER: &str = "please enter";
pub const SELECT_PLACEHOLDER: &str = "please choose";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_NOTICE: &str = "Something went wrong while loading the form. See the log for details.";
pub const EXPORT_SCALE: f32 = 2.0;
pub const EXPORT_FILE_NAME: &str = "my-profile-card.png";

#[derive(Debug, Clone)]
pub struct CardOptions {
    pub text_placeholder: String,
    pub select_placeholder: String,
    pub default_footer: String,
    pub loading_text: String,
    pub error_notice: String,
    pub export_scale: f32,
    pub export_file_name: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            text_placeholder: TEXT_PLACEHOLDER.to_string(),
            select_placeholder: SELECT_PLACEHOLDER.to_string(),
            default_footer: DEFAULT_FOOTER.to_string(),
            loading_text: LOADING_TEXT.to_string(),
            error_notice: ERROR_NOTICE.to_string(),
            export_scale: EXPORT_SCALE,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl CardOptions {
    pub fn with_text_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.text_placeholder = placeholder.into().into_owned();
        self
    }

    pub fn with_select_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.select_placeholder = placeholder.into().into_owned();
        self
    }

    /// Caption used when the schema header carries none.
    pub fn with_default_footer(mut self, footer: impl Into<Cow<'static, str>>) -> Self {
        self.default_footer = footer.into().into_owned();
        self
    }

    pub fn with_loading_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.loading_text = text.into().into_owned();
        self
    }

    pub fn with_error_notice(mut self, notice: impl Into<Cow<'static, str>>) -> Self {
        self.error_notice = notice.into().into_owned();
        self
    }

    pub fn with_export_scale(mut self, scale: f32) -> Self {
        self.export_scale = scale;
        self
    }

    pub fn with_export_file_name(mut self, file_name: impl Into<Cow<'static, str>>) -> Self {
        self.export_file_name = file_name.into().into_owned();
        self
    }
}
