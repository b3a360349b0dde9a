//! This module contains the frontend components for the landing page.
use crate::Website;
use crate::config::{
    APP_SUBTITLE, APP_TITLE, CRN_ID, CRN_LABEL, CRN_PLACEHOLDER, ERROR_ICON, PROFESSOR_ID,
    PROFESSOR_LABEL, PROFESSOR_PLACEHOLDER,
};
use crate::form::LookupForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const SHAPE_COUNT: usize = 4;

/// The whole landing page: backdrop, heading and the lookup form.
///
/// ### Parameters
/// `site`: the state the page renders from and writes to
#[component]
pub fn LandingPage(site: Website) -> impl IntoView {
    let form = site.form;
    on_cleanup(move || site.teardown());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        site.submit();
    };

    view! {
        <div class="landing-container">
            <FloatingShapes />
            <div class="content-wrapper">
                <Hero />
                <div class="form-container">
                    <form on:submit=on_submit class="registration-form">
                        <TextField
                            id=PROFESSOR_ID
                            label=PROFESSOR_LABEL
                            placeholder=PROFESSOR_PLACEHOLDER
                            value=Signal::derive(move || form.with(|f| f.professor().to_string()))
                            on_input=Callback::new(move |text: String| {
                                form.update(|f| f.set_professor(text))
                            })
                        />
                        <TextField
                            id=CRN_ID
                            label=CRN_LABEL
                            placeholder=CRN_PLACEHOLDER
                            value=Signal::derive(move || form.with(|f| f.crn().to_string()))
                            on_input=Callback::new(move |text: String| {
                                form.update(|f| f.set_crn(text))
                            })
                        />
                        <ErrorBanner message=Signal::derive(move || {
                            form.with(LookupForm::error_message)
                        }) />
                        <SubmitButton form=form.read_only() />
                    </form>
                </div>
            </div>
        </div>
    }
}

/// Decorative shapes drifting behind the content
#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="floating-shapes">
            {(1..=SHAPE_COUNT)
                .map(|n| view! { <div class=format!("shape shape-{n}")></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Title and one-line prompt above the form
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero-section">
            <h1 class="hero-title">{APP_TITLE}</h1>
            <p class="hero-subtitle">{APP_SUBTITLE}</p>
        </div>
    }
}

/// A labelled, required text input.
///
/// ### Parameters
/// `id`: element id, also the label's `for`
///
/// `value`: the text to show
///
/// `on_input`: receives the whole new text on every edit
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <label for=id class="input-label">
                {label}
            </label>
            <input
                type="text"
                id=id
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required
            />
        </div>
    }
}

/// Shows the form error, or nothing when there is none.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-message">
                    <span class="error-icon">{ERROR_ICON}</span>
                    {text}
                </div>
            }
        })
    }
}

/// Submit button, disabled with a spinner while a submission is in flight.
#[component]
pub fn SubmitButton(form: ReadSignal<LookupForm>) -> impl IntoView {
    let submitting = move || form.with(LookupForm::is_submitting);
    let label = move || form.with(LookupForm::button_label);

    view! {
        <button
            type="submit"
            class=move || form.with(LookupForm::button_class)
            prop:disabled=submitting
        >
            <Show when=submitting fallback=label>
                <span class="loading-text">
                    <span class="spinner"></span>
                    {label}
                </span>
            </Show>
        </button>
    }
}
