use dioxus::prelude::*;

use foodnest_common::form::SignupForm;

use super::app::Route;
use super::browser;
use super::toast::use_toasts;

/// Simulated account-creation round-trip. There is no signup backend; the
/// flow validates, waits, and sends the user to the login page.
const SIGNUP_LATENCY_MS: u32 = 2_000;

#[component]
pub fn SignupView() -> Element {
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut form = use_signal(SignupForm::default);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        let snapshot = form.read().clone();
        if let Err(err) = snapshot.validate() {
            toasts.write().error(err.to_string());
            return;
        }

        submitting.set(true);
        spawn(async move {
            browser::sleep_ms(SIGNUP_LATENCY_MS).await;
            toasts
                .write()
                .success("Account created! Please sign in to continue.");
            submitting.set(false);
            nav.push(Route::Login {
                redirect: String::new(),
            });
        });
    };

    let current = form.read().clone();
    let password_type = if *show_password.read() { "text" } else { "password" };
    let is_submitting = *submitting.read();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Join FoodNest" }
                p { class: "auth-subtitle", "Create an account to start ordering" }

                div { class: "form-row",
                    div { class: "form-group",
                        label { "First Name" }
                        input {
                            r#type: "text",
                            placeholder: "First name",
                            value: "{current.first_name}",
                            oninput: move |evt| form.write().first_name = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Last Name" }
                        input {
                            r#type: "text",
                            placeholder: "Last name",
                            value: "{current.last_name}",
                            oninput: move |evt| form.write().last_name = evt.value(),
                        }
                    }
                }

                div { class: "form-group",
                    label { "Email Address" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{current.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { "Phone Number" }
                    input {
                        r#type: "tel",
                        placeholder: "e.g. 98765 43210",
                        value: "{current.phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { "Password" }
                    div { class: "password-row",
                        input {
                            r#type: "{password_type}",
                            placeholder: "At least 6 characters",
                            value: "{current.password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                        button {
                            class: "password-toggle",
                            onclick: move |_| show_password.set(!show_password()),
                            if *show_password.read() { "Hide" } else { "Show" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "Confirm Password" }
                    input {
                        r#type: "{password_type}",
                        placeholder: "Repeat your password",
                        value: "{current.confirm_password}",
                        oninput: move |evt| form.write().confirm_password = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { class: "filter-option",
                        input {
                            r#type: "checkbox",
                            checked: current.agreed_to_terms,
                            onchange: move |evt| form.write().agreed_to_terms = evt.checked(),
                        }
                        span { " I agree to the Terms of Service" }
                    }
                }

                button {
                    class: "auth-submit",
                    disabled: is_submitting,
                    onclick: submit,
                    if is_submitting { "Creating your account..." } else { "Create Account" }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            nav.push(Route::Login { redirect: String::new() });
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
