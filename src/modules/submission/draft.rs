use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::message::model::InsertMessage;

pub const MIN_CHILD_AGE: i32 = 1;
pub const MAX_CHILD_AGE: i32 = 18;

/// The form's fields as typed. `child_age` stays text until submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MessageDraft {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub parent_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub parent_email: String,
    pub child_age: String,
    #[validate(length(min = 1, message = "Please tell us about your child"))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    ParentName,
    ParentEmail,
    ChildAge,
    Message,
}

/// Leading-integer parse: surrounding whitespace and anything after the digits is ignored,
/// so `" 7 years"` reads as 7.
pub fn parse_child_age(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| n * sign)
}

impl MessageDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::ParentName => self.parent_name = value,
            DraftField::ParentEmail => self.parent_email = value,
            DraftField::ChildAge => self.child_age = value,
            DraftField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == MessageDraft::default()
    }

    /// Applies the input constraints and returns the row to insert.
    pub fn to_insert(&self) -> Result<InsertMessage, String> {
        self.validate().map_err(|e| first_message(&e))?;

        let child_age = parse_child_age(&self.child_age)
            .filter(|age| (MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(age))
            .ok_or_else(|| {
                format!("Child's age must be between {MIN_CHILD_AGE} and {MAX_CHILD_AGE}")
            })?;

        Ok(InsertMessage {
            parent_name: self.parent_name.clone(),
            parent_email: self.parent_email.clone(),
            child_age,
            message: self.message.clone(),
        })
    }
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
