use dioxus::prelude::*;

use crate::components::widgets::{Card, CardHeader};
use crate::core::contact::{self, ContactField, ContactForm, SubmitStatus};
use crate::t;

fn field_label(field: ContactField) -> String {
    match field {
        ContactField::Name => t!("field-name"),
        ContactField::Email => t!("field-email"),
        ContactField::Subject => t!("field-subject"),
        ContactField::Message => t!("field-message"),
    }
}

fn field_placeholder(field: ContactField) -> String {
    match field {
        ContactField::Name => t!("contact-name-placeholder"),
        ContactField::Email => t!("contact-email-placeholder"),
        ContactField::Subject => t!("contact-subject-placeholder"),
        ContactField::Message => t!("contact-message-placeholder"),
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        _ => "text",
    }
}

/// Text shown under the form for a submit outcome.
fn status_message(status: &SubmitStatus) -> Option<(&'static str, String)> {
    match status {
        SubmitStatus::Idle => None,
        SubmitStatus::Acknowledged => Some(("form__status form__status--ok", t!("contact-submitted"))),
        SubmitStatus::Blocked(field) => Some((
            "form__status form__status--error",
            t!("contact-missing-field", field = field_label(*field)),
        )),
    }
}

#[component]
pub fn Contact(dark_mode: bool) -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(SubmitStatus::default);
    let theme_class = if dark_mode { "dark" } else { "" };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = contact::submit(&form.read());
        match &outcome {
            SubmitStatus::Acknowledged => tracing::info!("contact form submitted"),
            SubmitStatus::Blocked(field) => {
                tracing::debug!(field = field.id(), "contact form blocked")
            }
            SubmitStatus::Idle => {}
        }
        status.set(outcome);
    };

    rsx! {
        section { class: "page page-contact {theme_class}",
            Card { class: "contact",
                CardHeader {
                    title: t!("contact-title"),
                    description: t!("contact-description"),
                }
                form { class: "form", onsubmit: on_submit,
                    div { class: "form-grid",
                        for field in [ContactField::Name, ContactField::Email] {
                            div { key: "{field.id()}", class: "field",
                                label { r#for: field.id(), {field_label(field)} }
                                input {
                                    id: field.id(),
                                    class: "input",
                                    r#type: input_type(field),
                                    placeholder: field_placeholder(field),
                                    required: true,
                                    value: "{form.read().value(field)}",
                                    oninput: move |evt| form.write().set(field, evt.value()),
                                }
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: ContactField::Subject.id(), {field_label(ContactField::Subject)} }
                        input {
                            id: ContactField::Subject.id(),
                            class: "input",
                            placeholder: field_placeholder(ContactField::Subject),
                            required: true,
                            value: "{form.read().subject}",
                            oninput: move |evt| form.write().set(ContactField::Subject, evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: ContactField::Message.id(), {field_label(ContactField::Message)} }
                        textarea {
                            id: ContactField::Message.id(),
                            class: "input textarea",
                            placeholder: field_placeholder(ContactField::Message),
                            required: true,
                            value: "{form.read().message}",
                            oninput: move |evt| form.write().set(ContactField::Message, evt.value()),
                        }
                    }
                    if let Some((class, text)) = status_message(&status()) {
                        p { class: class, role: "status", "{text}" }
                    }
                    button { r#type: "submit", class: "button button--primary button--block",
                        {t!("contact-send")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render::to_html;

    #[test]
    fn status_messages_follow_outcome() {
        crate::i18n::init();
        assert!(status_message(&SubmitStatus::Idle).is_none());

        let (class, text) = status_message(&SubmitStatus::Acknowledged).unwrap();
        assert!(class.ends_with("--ok"));
        assert_eq!(text, "Form submitted");

        let (class, text) = status_message(&SubmitStatus::Blocked(ContactField::Email)).unwrap();
        assert!(class.ends_with("--error"));
        assert!(text.contains("Email"), "{text}");
    }

    #[test]
    fn form_has_required_fields_and_submit_inside() {
        fn app() -> Element {
            rsx! { Contact { dark_mode: false } }
        }
        let html = to_html(app);
        assert_eq!(html.matches("required").count(), ContactField::ALL.len());
        for field in ContactField::ALL {
            assert!(html.contains(&format!("id=\"{}\"", field.id())), "{field:?}");
        }

        let form_end = html.find("</form>").expect("form rendered");
        let submit = html.find("type=\"submit\"").expect("submit button rendered");
        assert!(submit < form_end);
        assert!(!html.contains("form__status"));
    }
}
