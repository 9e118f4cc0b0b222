use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

/// Catch-all page for unknown paths.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 text-center gap-4">
            <h1 class="text-5xl font-bold text-error">{"404 - Page Not Found"}</h1>
            <p class="text-lg">{"Oops! It seems like you're lost in space."}</p>
            <Link<MainRoute> to={MainRoute::SignUp} classes="btn btn-primary">
                {"Go to Home"}
            </Link<MainRoute>>
        </div>
    }
}
