use maud::{html, Markup};

use crate::domain::forms::{FormErrors, FormValues};

/// What kind of `<input>` / control to render.
pub enum Control {
    Text,
    Email,
    Date,
    Number { min: i64, step: &'static str },
    TextArea,
    /// File picker; never pre-filled.
    File { accept: &'static str },
    Select(&'static [(&'static str, &'static str)]),
}

pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
    pub required: bool,
}

impl Field {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            control: Control::Text,
            required: true,
        }
    }

    pub fn with(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

fn control(field: &Field, value: &str) -> Markup {
    let style = "padding: 8px; width: 100%; box-sizing: border-box;";
    html! {
        @match &field.control {
            Control::Text => {
                input type="text" id=(field.name) name=(field.name) value=(value) required[field.required] style=(style);
            }
            Control::Email => {
                input type="email" id=(field.name) name=(field.name) value=(value) required[field.required] style=(style);
            }
            Control::Date => {
                input type="date" id=(field.name) name=(field.name) value=(value) required[field.required] style=(style);
            }
            Control::Number { min, step } => {
                input type="number" id=(field.name) name=(field.name) value=(value) min=(min) step=(step) required[field.required] style=(style);
            }
            Control::File { accept } => {
                input type="file" id=(field.name) name=(field.name) accept=(accept) required[field.required] style=(style);
            }
            Control::TextArea => {
                textarea id=(field.name) name=(field.name) rows="4" required[field.required] style=(style) { (value) }
            }
            Control::Select(options) => {
                select id=(field.name) name=(field.name) required[field.required] style=(style) {
                    @for (opt, label) in options.iter() {
                        option value=(opt) selected[value == *opt] { (label) }
                    }
                }
            }
        }
    }
}

/// A labelled control with its validation message underneath.
pub fn form_field(field: &Field, values: &FormValues, errors: &FormErrors) -> Markup {
    let value = values.get(field.name).map(String::as_str).unwrap_or("");
    let error = errors.get(field.name);

    html! {
        div class=(if error.is_some() { "field has-error" } else { "field" }) style="margin-bottom: 1rem;" {
            label for=(field.name) style="display: block; font-weight: 600; margin-bottom: 4px;" { (field.label) }
            (control(field, value))
            @if let Some(message) = error {
                p class="field-error" style="color: #dc2626; margin: 4px 0 0 0;" { (message) }
            }
        }
    }
}

/// Full POST form with every field plus submit and cancel.
pub fn edit_form(
    action: &str,
    cancel_href: &str,
    fields: &[Field],
    values: &FormValues,
    errors: &FormErrors,
) -> Markup {
    let has_file = fields.iter().any(|f| matches!(f.control, Control::File { .. }));
    html! {
        @if !errors.is_empty() {
            div class="card error" role="alert" style="border-left: 4px solid #dc2626; padding: 1rem; margin-bottom: 1rem;" {
                "Please fix the " (errors.len()) " highlighted field(s)."
            }
        }
        form action=(action) method="post" enctype=[has_file.then_some("multipart/form-data")]
            class="card" style="max-width: 640px;"
        {
            @for field in fields {
                (form_field(field, values, errors))
            }
            div style="display: flex; gap: 10px;" {
                button type="submit" class="btn" { "Save" }
                a href=(cancel_href) { "Cancel" }
            }
        }
    }
}
