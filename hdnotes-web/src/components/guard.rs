use crate::routes::MainRoute;
use crate::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Session guard around protected content.
///
/// Admits on token presence alone; validity is confirmed lazily by the
/// dashboard's profile fetch. A missing token is a hard redirect to sign-in,
/// not an error, and nothing is rendered in that case.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let admitted = Session::token().is_some();
    let navigator = use_navigator();

    use_effect_with(admitted, move |&admitted| {
        if !admitted {
            if let Some(navigator) = navigator {
                navigator.push(&MainRoute::SignIn);
            }
        }
        || ()
    });

    if admitted {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {}
    }
}
