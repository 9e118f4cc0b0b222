use crate::components::toaster::Toaster;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

/// Application shell: router plus the global toast overlay.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Toaster />
                <Switch<MainRoute> render={crate::routes::switch} />
            </BrowserRouter>
        </YewduxRoot>
    }
}
