use crate::components::guard::RequireAuth;
use crate::pages::*;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The client-visible routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    /// Registration form.
    #[at("/")]
    SignUp,
    /// Sign-in form.
    #[at("/sign-in")]
    SignIn,
    /// The notes dashboard; requires a stored session token.
    #[at("/dashboard")]
    Dashboard,
    /// Catch-all for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::SignUp => html! { <SignUpPage /> },
        MainRoute::SignIn => html! { <SignInPage /> },
        MainRoute::Dashboard => html! {
            <RequireAuth>
                <DashboardPage />
            </RequireAuth>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}
