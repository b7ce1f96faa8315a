use std::rc::Rc;

use log::warn;
use yew::Reducible;

use super::mailto::MailtoLink;
use crate::config;

/// What the visitor is writing about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subject {
    #[default]
    Availability,
    Application,
    General,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Availability, Subject::Application, Subject::General];

    /// Form value, also used verbatim in the mail subject.
    pub fn value(self) -> &'static str {
        match self {
            Subject::Availability => "Availability",
            Subject::Application => "Application",
            Subject::General => "General",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Availability => "Current Availability",
            Subject::Application => "Application Process",
            Subject::General => "General Inquiry",
        }
    }

    pub fn from_value(value: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn from_name(name: &str) -> Option<FormField> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "subject" => Some(FormField::Subject),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl FormState {
    /// Overwrites one field by its form name. Unknown names are ignored and
    /// a subject outside the known options keeps the current one.
    pub fn handle_change(&mut self, field_name: &str, value: impl Into<String>) {
        let value = value.into();
        match FormField::from_name(field_name) {
            Some(FormField::Name) => self.name = value,
            Some(FormField::Email) => self.email = value,
            Some(FormField::Message) => self.message = value,
            Some(FormField::Subject) => match Subject::from_value(&value) {
                Some(subject) => self.subject = subject,
                None => warn!("Ignoring unknown subject {:?}", value),
            },
            None => warn!("Ignoring change to unknown field {:?}", field_name),
        }
    }

    pub fn mail_subject(&self) -> String {
        format!("Inquiry: {}", self.subject.value())
    }

    pub fn mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self) -> MailtoLink {
        MailtoLink::new(config::CONTACT_EMAIL, self.mail_subject(), self.mail_body())
    }
}

/// One field edit coming from the form.
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

impl Reducible for FormState {
    type Action = FieldChange;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.handle_change(&action.name, action.value);
        Rc::new(next)
    }
}
