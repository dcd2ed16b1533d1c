use std::str::FromStr;

use serde::Serialize;
use validator::Validate;
use vitrine_shared::Error;

use crate::{Field, Subject};

pub const NAME_MAX_LEN: usize = 80;
pub const EMAIL_MAX_LEN: usize = 254;
pub const PHONE_MAX_LEN: usize = 30;
pub const MESSAGE_MAX_LEN: usize = 500;

/// Contact request as typed by the visitor.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormFields {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(email, length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: String,
    #[validate(required)]
    pub subject: Option<Subject>,
    #[validate(length(min = 1, max = 500))]
    pub message: String,
}

impl FormFields {
    /// Stores `value` in `field`, replacing the previous value.
    ///
    /// The message is cut to its input limit; other text is stored as given and left to
    /// validation. An empty subject clears the selection and an unknown one is rejected
    /// without touching the stored subject.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> vitrine_shared::Result<()> {
        let value = value.into();

        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = clamp(value, MESSAGE_MAX_LEN),
            Field::Subject if value.is_empty() => self.subject = None,
            Field::Subject => {
                let subject =
                    Subject::from_str(&value).map_err(|_| Error::InvalidSubject(value))?;
                self.subject = Some(subject);
            }
        }

        Ok(())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => self.subject.as_ref().map_or("", |s| s.as_ref()),
            Field::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn clamp(mut value: String, max: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(max) {
        value.truncate(idx);
    }

    value
}
