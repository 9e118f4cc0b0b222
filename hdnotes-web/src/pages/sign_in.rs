use crate::api::HdNotesClient;
use crate::models::auth_flow::AuthPhase;
use crate::models::toast::ToastQueue;
use crate::routes::MainRoute;
use crate::session::Session;
use shared::models::{SendOtpRequest, VerifyOtpRequest};
use shared::validation::{Field, FieldErrors, SignInForm, email_is_valid};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Sign-in form: email plus a mailed one-time code.
#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let form = use_state(SignInForm::default);
    let errors = use_state(FieldErrors::default);
    let phase = use_state(AuthPhase::default);
    let navigator = use_navigator();
    let (_, toast_dispatch) = use_store::<ToastQueue>();

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(SignInForm {
                    email: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_otp_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(SignInForm {
                    otp: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_send_otp = {
        let form = form.clone();
        let phase = phase.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |_| {
            let email = form.email.clone();
            if !email_is_valid(&email) {
                toast_dispatch.reduce_mut(|queue| queue.error("Enter a valid email first"));
                return;
            }
            let phase = phase.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = HdNotesClient::shared();
                match client.send_otp(&SendOtpRequest { email }).await {
                    Ok(()) => {
                        phase.set((*phase).otp_sent());
                        toast_dispatch.reduce_mut(|queue| queue.success("OTP sent to your email!"));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error sending OTP: {err}").into());
                        toast_dispatch
                            .reduce_mut(|queue| queue.error("Failed to send OTP. Please try again."));
                    }
                }
            });
        })
    };

    let on_verify_otp = {
        let form = form.clone();
        let phase = phase.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |_| {
            let request = VerifyOtpRequest {
                email: form.email.clone(),
                otp: form.otp.clone(),
            };
            let phase = phase.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = HdNotesClient::shared();
                match client.verify_otp(&request).await {
                    Ok(true) => {
                        phase.set((*phase).otp_confirmed());
                        toast_dispatch
                            .reduce_mut(|queue| queue.success("OTP verified successfully!"));
                    }
                    Ok(false) => {
                        toast_dispatch
                            .reduce_mut(|queue| queue.error("Invalid OTP. Please try again."));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error verifying OTP: {err}").into());
                        toast_dispatch.reduce_mut(|queue| {
                            queue.error("Failed to verify OTP. Please try again.");
                        });
                    }
                }
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let toast_dispatch = toast_dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(request) => {
                    errors.set(FieldErrors::default());
                    let resume = *phase;
                    phase.set(resume.submit_started());
                    let phase = phase.clone();
                    let toast_dispatch = toast_dispatch.clone();
                    let navigator = navigator.clone();
                    spawn_local(async move {
                        let client = HdNotesClient::shared();
                        match client.login(&request).await {
                            Ok(auth) => {
                                Session::store(&auth.token);
                                toast_dispatch
                                    .reduce_mut(|queue| queue.success("Signed in successfully!"));
                                if let Some(navigator) = navigator {
                                    navigator.push(&MainRoute::Dashboard);
                                }
                            }
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Error during login: {err}").into(),
                                );
                                toast_dispatch.reduce_mut(|queue| {
                                    queue.error("Something went wrong. Please try again.");
                                });
                                // Back to the previous interactive state, form intact.
                                phase.set(resume);
                            }
                        }
                    });
                }
            }
        })
    };

    let is_busy = phase.is_submitting();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <p class="text-base-content/60">{"Please login to continue to your account."}</p>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <div class="join w-full">
                            <input
                                id="email"
                                class="input input-bordered join-item w-full"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email_input}
                            />
                            <button
                                class="btn join-item"
                                type="button"
                                onclick={on_send_otp}
                            >
                                { if phase.otp_was_sent() { "Resend OTP" } else { "Send OTP" } }
                            </button>
                        </div>
                        { super::inline_error(&errors, Field::Email) }
                    </div>
                    <div class="form-control">
                        <label class="label" for="otp">
                            <span class="label-text">{"OTP"}</span>
                        </label>
                        <div class="join w-full">
                            <input
                                id="otp"
                                class="input input-bordered join-item w-full"
                                type="password"
                                value={form.otp.clone()}
                                oninput={on_otp_input}
                            />
                            <button
                                class="btn join-item"
                                type="button"
                                onclick={on_verify_otp}
                            >
                                {
                                    if phase.is_verified() {
                                        html! {
                                            <Icon
                                                icon_id={IconId::HeroiconsSolidCheckCircle}
                                                class="text-success"
                                                width="18"
                                                height="18"
                                            />
                                        }
                                    } else {
                                        html! { {"Verify"} }
                                    }
                                }
                            </button>
                        </div>
                        { super::inline_error(&errors, Field::Otp) }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { "Signing in..." } else { "Sign in" } }
                        </button>
                    </div>
                    <div class="divider">{"or"}</div>
                    <p class="text-center text-base-content/60">
                        {"Need an account? "}
                        <Link<MainRoute> to={MainRoute::SignUp} classes="link link-primary">
                            {"Sign up"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
