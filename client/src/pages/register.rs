//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use storefront::{Page, RegistrationError};

use crate::state::session::use_session;
use crate::util::auth::{RegistrationForm, validate_registration};

/// Text shown when the backend refuses a registration.
pub fn registration_error_message(err: &RegistrationError) -> String {
    match err {
        RegistrationError::Conflict(_) => "That email is already registered.".to_owned(),
        RegistrationError::Validation(message) | RegistrationError::Service { message, .. } => {
            format!("Registration failed: {message}")
        }
        RegistrationError::Transport(_) => format!("Registration failed: {err}"),
    }
}

/// One labelled text input bound to a form field.
#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="register-field">
            <span>{label}</span>
            <input
                class="login-input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let school_id = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let grade = RwSignal::new(String::new());
    let class_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            school_id: school_id.get(),
            student_id: student_id.get(),
            grade: grade.get(),
            class_name: class_name.get(),
        };
        let registration = match validate_registration(&form) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = session.store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.register(&registration).await {
                    Ok(_) => {
                        info.set(String::new());
                        navigate(Page::Home.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(registration_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, registration);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <FormField label="Username" value=username />
                    <FormField label="Email" kind="email" value=email />
                    <FormField label="Password" kind="password" value=password />
                    <FormField label="First name" value=first_name />
                    <FormField label="Last name" value=last_name />
                    <FormField label="School ID" value=school_id />
                    <FormField label="Student ID (optional)" value=student_id />
                    <FormField label="Grade (optional)" value=grade />
                    <FormField label="Class (optional)" value=class_name />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=Page::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
