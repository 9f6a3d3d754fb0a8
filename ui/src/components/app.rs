use dioxus::prelude::*;

use foodnest_common::guard::{self, GuardDecision};

use super::add_food_view::AddFoodView;
use super::admin_view::AdminView;
use super::auth_state::{use_auth, AuthState};
use super::cart_state::CartStore;
use super::cart_view::CartDrawer;
use super::food_detail::FoodDetailView;
use super::foods_view::FoodsView;
use super::home_view::HomeView;
use super::login_view::LoginView;
use super::navbar::Navbar;
use super::signup_view::SignupView;
use super::toast::{ToastHost, Toasts};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/foods?:category")]
    Foods { category: String },
    #[route("/foods/:food_id")]
    FoodDetail { food_id: String },
    #[route("/login?:redirect")]
    Login { redirect: String },
    #[route("/signup")]
    Signup {},
    #[route("/admin")]
    Admin {},
    #[route("/admin/add-food")]
    AddFood {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AuthState::load()));
    use_context_provider(|| Signal::new(CartStore::load()));
    use_context_provider(|| Signal::new(Toasts::new()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Gate every navigation before anything renders.
    let path = route.to_string();
    match guard::evaluate(&path, auth.read().is_authenticated()) {
        GuardDecision::RedirectToLogin { redirect } => {
            nav.replace(Route::Login { redirect });
            return rsx! {};
        }
        GuardDecision::RedirectToCatalog => {
            nav.replace(Route::Foods {
                category: String::new(),
            });
            return rsx! {};
        }
        GuardDecision::Allow => {}
    }

    rsx! {
        div { class: "foodnest-app",
            Navbar {}
            main { Outlet::<Route> {} }
            CartDrawer {}
            ToastHost {}
        }
    }
}

/// Route component: renders the landing page.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Route component: renders the catalog, optionally pre-filtered to a category.
#[component]
fn Foods(category: String) -> Element {
    rsx! { FoodsView { category } }
}

/// Route component: renders one food by id from the URL.
#[component]
fn FoodDetail(food_id: String) -> Element {
    rsx! { FoodDetailView { food_id } }
}

/// Route component: renders the login form, carrying the post-login target.
#[component]
fn Login(redirect: String) -> Element {
    rsx! { LoginView { redirect } }
}

/// Route component: renders the signup form.
#[component]
fn Signup() -> Element {
    rsx! { SignupView {} }
}

/// Route component: renders the admin dashboard.
#[component]
fn Admin() -> Element {
    rsx! { AdminView {} }
}

/// Route component: renders the add-food form.
#[component]
fn AddFood() -> Element {
    rsx! { AddFoodView {} }
}
