mod api;
mod app;
mod components;
mod config;
mod models;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use yew::Renderer;

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting HD Notes".into());

    // Mount the app to the document body
    Renderer::<App>::with_root(
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_elements_by_tag_name("body")
            .item(0)
            .unwrap(),
    )
    .render();
}
