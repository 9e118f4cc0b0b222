use crate::api::HdNotesClient;
use crate::models::auth_flow::AuthPhase;
use crate::models::toast::ToastQueue;
use crate::routes::MainRoute;
use crate::session::Session;
use shared::models::{SendOtpRequest, VerifyOtpRequest};
use shared::validation::{Field, FieldErrors, RegistrationForm, email_is_valid};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Registration form: name, date of birth, email and a mailed one-time code.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let form = use_state(RegistrationForm::default);
    let errors = use_state(FieldErrors::default);
    let phase = use_state(AuthPhase::default);
    let show_otp = use_state(|| false);
    let navigator = use_navigator();
    let (_, toast_dispatch) = use_store::<ToastQueue>();

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(RegistrationForm {
                    name: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_dob_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(RegistrationForm {
                    dob: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(RegistrationForm {
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
                form.set(RegistrationForm {
                    otp: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_toggle_otp = {
        let show_otp = show_otp.clone();
        Callback::from(move |_| show_otp.set(!*show_otp))
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
                        match client.register(&request).await {
                            Ok(auth) => {
                                Session::store(&auth.token);
                                toast_dispatch
                                    .reduce_mut(|queue| queue.success("Registration successful!"));
                                if let Some(navigator) = navigator {
                                    navigator.push(&MainRoute::Dashboard);
                                }
                            }
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Error registering user: {err}").into(),
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
    let otp_type = if *show_otp { "text" } else { "password" };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign up"}</h2>
                    <p class="text-base-content/60">{"Sign up to enjoy the features of HD"}</p>
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Your Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            placeholder="Enter your name"
                            value={form.name.clone()}
                            oninput={on_name_input}
                        />
                        { super::inline_error(&errors, Field::Name) }
                    </div>
                    <div class="form-control">
                        <label class="label" for="dob">
                            <span class="label-text">{"Date of Birth"}</span>
                        </label>
                        <input
                            id="dob"
                            class="input input-bordered"
                            type="date"
                            value={form.dob.clone()}
                            oninput={on_dob_input}
                        />
                        { super::inline_error(&errors, Field::Dob) }
                    </div>
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
                                type={otp_type}
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
                            <button
                                class="btn btn-ghost join-item"
                                type="button"
                                onclick={on_toggle_otp}
                            >
                                <Icon
                                    icon_id={
                                        if *show_otp {
                                            IconId::HeroiconsOutlineEye
                                        } else {
                                            IconId::HeroiconsOutlineEyeSlash
                                        }
                                    }
                                    width="18"
                                    height="18"
                                />
                            </button>
                        </div>
                        { super::inline_error(&errors, Field::Otp) }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { "Signing up..." } else { "Sign up" } }
                        </button>
                    </div>
                    <div class="divider">{"or"}</div>
                    <p class="text-center text-base-content/60">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::SignIn} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
