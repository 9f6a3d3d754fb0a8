use dioxus::prelude::*;

use foodnest_common::form::LoginForm;
use foodnest_common::session::{MOCK_EMAIL, MOCK_PASSWORD};

use super::app::Route;
use super::auth_state::{self, use_auth};
use super::toast::use_toasts;

#[component]
pub fn LoginView(redirect: String) -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        let form = LoginForm {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        if let Err(err) = form.validate() {
            toasts.write().error(err.to_string());
            return;
        }

        let target = redirect.clone();
        submitting.set(true);
        spawn(async move {
            match auth_state::login(auth, form.email, form.password).await {
                Ok(_) => {
                    toasts.write().success("Welcome back to FoodNest!");
                    let fallback = Route::Foods {
                        category: String::new(),
                    };
                    match target.parse::<Route>() {
                        Ok(route) if !target.is_empty() => {
                            nav.push(route);
                        }
                        _ => {
                            nav.push(fallback);
                        }
                    }
                }
                Err(err) => {
                    toasts.write().error(err.to_string());
                }
            }
            submitting.set(false);
        });
    };

    let password_type = if *show_password.read() { "text" } else { "password" };
    let is_submitting = *submitting.read();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to manage your FoodNest menu" }

                div { class: "form-group",
                    label { "Email Address" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Password" }
                    div { class: "password-row",
                        input {
                            r#type: "{password_type}",
                            placeholder: "Your password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "password-toggle",
                            onclick: move |_| show_password.set(!show_password()),
                            if *show_password.read() { "Hide" } else { "Show" }
                        }
                    }
                }

                button {
                    class: "auth-submit",
                    disabled: is_submitting,
                    onclick: submit,
                    if is_submitting { "Signing you in..." } else { "Sign In" }
                }

                p { class: "demo-hint", "Demo login: {MOCK_EMAIL} / {MOCK_PASSWORD}" }

                p { class: "auth-switch",
                    "New to FoodNest? "
                    button {
                        class: "link-button",
                        onclick: move |_| { nav.push(Route::Signup {}); },
                        "Create an account"
                    }
                }
            }
        }
    }
}
