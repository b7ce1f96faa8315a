use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{FieldChange, FormField, FormState, Subject};

// Inputs, the textarea and the select all report through their `name` attribute.
fn field_change(e: &Event) -> Option<FieldChange> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(FieldChange { name: input.name(), value: input.value() });
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(FieldChange { name: area.name(), value: area.value() });
    }
    let select = target.dyn_ref::<HtmlSelectElement>()?;
    Some(FieldChange { name: select.name(), value: select.value() })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormState::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(change) = field_change(&e) {
                form.dispatch(change);
            }
        })
    };

    let onchange = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(change) = field_change(&e) {
                form.dispatch(change);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.mailto().open() {
                warn!("{}", err);
            }
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1.25rem;
                        background: var(--color-input);
                        border-radius: 12px;
                        padding: 0.6rem 0.9rem 0.4rem;
                    }
                    .form-field label {
                        font-size: 0.75rem;
                        color: var(--color-text-secondary);
                        margin-bottom: 0.2rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        background: transparent;
                        border: none;
                        outline: none;
                        color: var(--color-text);
                        font-family: var(--font-family);
                        font-size: 1rem;
                        padding: 0.25rem 0;
                        resize: vertical;
                    }
                    .form-field select option {
                        color: #292524;
                    }
                    .submit-button {
                        border: none;
                        border-radius: 12px;
                        padding: 14px 24px;
                        font-size: 1rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        background: var(--color-primary);
                        color: #fff;
                        cursor: pointer;
                        box-shadow: none;
                        transition: box-shadow 0.2s ease;
                    }
                    .submit-button:hover {
                        box-shadow: var(--shadow-hover);
                    }
                "#}
            </style>
            <form class="contact-form" onsubmit={onsubmit}>
                <div class="form-field">
                    <label for="contact-name">{"Full Name"}</label>
                    <input
                        id="contact-name"
                        name={FormField::Name.name()}
                        type="text"
                        value={form.name.clone()}
                        oninput={oninput.clone()}
                        required=true
                    />
                </div>
                <div class="form-field">
                    <label for="contact-email">{"Email Address"}</label>
                    <input
                        id="contact-email"
                        name={FormField::Email.name()}
                        type="email"
                        value={form.email.clone()}
                        oninput={oninput.clone()}
                        required=true
                    />
                </div>
                <div class="form-field">
                    <label for="contact-subject">{"I am interested in"}</label>
                    <select id="contact-subject" name={FormField::Subject.name()} onchange={onchange}>
                        { for Subject::ALL.iter().map(|subject| html! {
                            <option
                                value={subject.value()}
                                selected={*subject == form.subject}
                            >
                                { subject.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name={FormField::Message.name()}
                        rows="4"
                        value={form.message.clone()}
                        oninput={oninput}
                        required=true
                    />
                </div>
                <button type="submit" class="submit-button">{"Send Message"}</button>
            </form>
        </>
    }
}
