use crate::api::HdNotesClient;
use crate::components::loading::NoteListSkeleton;
use crate::components::note_modal::NoteModal;
use crate::models::toast::ToastQueue;
use crate::routes::MainRoute;
use crate::session::Session;
use shared::models::{Note, NotePayload, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::*;

const DELETE_PROMPT: &str = "Delete this note? You won't be able to revert this!";

/// Ask the user to approve a destructive note deletion. Treats a missing
/// window or a dialog failure as a decline.
fn confirm_note_delete() -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(DELETE_PROMPT).unwrap_or(false))
        .unwrap_or(false)
}

/// Run `delete` only when the confirmation dialog was accepted. Deletion and
/// the list refresh that follows are unreachable on a decline.
fn delete_when_confirmed<F: FnOnce()>(confirmed: bool, delete: F) {
    if confirmed {
        delete();
    }
}

/// The notes session: profile header, note list and the editor modal.
///
/// Profile and notes are fetched concurrently on mount. A profile failure is
/// treated as "not authenticated" and clears the session; a notes failure
/// degrades to an empty list so a transient error cannot lock the user out.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let profile = use_state(|| None::<UserProfile>);
    let notes = use_state(Vec::<Note>::new);
    let loading = use_state(|| true);
    let modal_open = use_state(|| false);
    let selected = use_state(|| None::<Note>);
    let navigator = use_navigator();
    let is_mounted = use_is_mounted();
    let (_, toast_dispatch) = use_store::<ToastQueue>();

    {
        let profile = profile.clone();
        let notes = notes.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| {
            let client = HdNotesClient::shared();
            client.set_bearer_token(Session::token());

            {
                let client = client.clone();
                let is_mounted = is_mounted.clone();
                spawn_local(async move {
                    match client.get_profile().await {
                        Ok(response) => {
                            if is_mounted() {
                                profile.set(Some(response.user));
                            }
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error fetching user profile: {err}").into(),
                            );
                            // Any failure here means the token is no good.
                            Session::clear();
                            client.set_bearer_token(None);
                            if let Some(navigator) = navigator {
                                navigator.push(&MainRoute::SignIn);
                            }
                        }
                    }
                });
            }

            spawn_local(async move {
                match client.list_notes().await {
                    Ok(list) => {
                        if is_mounted() {
                            notes.set(list);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error fetching notes: {err}").into());
                    }
                }
                if is_mounted() {
                    loading.set(false);
                }
            });

            || ()
        });
    }

    let on_sign_out = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            Session::clear();
            HdNotesClient::shared().set_bearer_token(None);
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::SignIn);
            }
        })
    };

    let on_create_note = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            selected.set(None);
            modal_open.set(true);
        })
    };

    let on_edit_note = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |note: Note| {
            selected.set(Some(note));
            modal_open.set(true);
        })
    };

    let on_modal_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };

    let on_modal_submit = {
        let selected = selected.clone();
        let notes = notes.clone();
        let toast_dispatch = toast_dispatch.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |payload: NotePayload| {
            let selected_note = (*selected).clone();
            let notes = notes.clone();
            let toast_dispatch = toast_dispatch.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let client = HdNotesClient::shared();
                let result = match &selected_note {
                    Some(note) => client.update_note(&note.id, &payload).await.map(|_| ()),
                    None => client.create_note(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        // The list is always re-fetched after a mutation so
                        // the display mirrors server state.
                        match client.list_notes().await {
                            Ok(list) => {
                                if is_mounted() {
                                    notes.set(list);
                                }
                            }
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Error refreshing notes: {err}").into(),
                                );
                            }
                        }
                        let message = if selected_note.is_some() {
                            "Note updated successfully!"
                        } else {
                            "Note created successfully!"
                        };
                        toast_dispatch.reduce_mut(|queue| queue.success(message));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error submitting note: {err}").into());
                        toast_dispatch.reduce_mut(|queue| {
                            queue.error("Something went wrong. Please try again.");
                        });
                    }
                }
            });
        })
    };

    let on_delete_note = {
        let notes = notes.clone();
        let toast_dispatch = toast_dispatch.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |note_id: String| {
            let notes = notes.clone();
            let toast_dispatch = toast_dispatch.clone();
            let is_mounted = is_mounted.clone();
            delete_when_confirmed(confirm_note_delete(), move || {
                spawn_local(async move {
                    let client = HdNotesClient::shared();
                    match client.delete_note(&note_id).await {
                        Ok(()) => {
                            match client.list_notes().await {
                                Ok(list) => {
                                    if is_mounted() {
                                        notes.set(list);
                                    }
                                }
                                Err(err) => {
                                    web_sys::console::error_1(
                                        &format!("Error refreshing notes: {err}").into(),
                                    );
                                }
                            }
                            toast_dispatch.reduce_mut(|queue| queue.success("Note deleted."));
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error deleting note: {err}").into(),
                            );
                            toast_dispatch.reduce_mut(|queue| {
                                queue.error("Something went wrong. Please try again.");
                            });
                        }
                    }
                });
            });
        })
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow px-4">
                <div class="flex-1 flex items-center gap-3">
                    <Icon icon_id={IconId::HeroiconsSolidPencilSquare} width="24" height="24" />
                    <span class="text-xl font-medium">{"Dashboard"}</span>
                </div>
                <button class="link link-primary" onclick={on_sign_out}>
                    {"Sign out"}
                </button>
            </header>
            <main class="max-w-3xl mx-auto p-4 flex flex-col gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body flex-row justify-between items-center">
                        {
                            match &*profile {
                                Some(user) => html! {
                                    <div>
                                        <h1 class="text-2xl font-bold">
                                            { format!("Welcome, {} !", user.name) }
                                        </h1>
                                        <p class="text-base-content/70">
                                            { format!("Email: {}", user.email) }
                                        </p>
                                    </div>
                                },
                                None => html! { <p>{"Loading..."}</p> },
                            }
                        }
                        <button class="btn btn-primary" onclick={on_create_note}>
                            {"Create Note"}
                        </button>
                    </div>
                </div>
                <h2 class="text-xl font-medium">{"Notes"}</h2>
                {
                    if *loading {
                        html! { <NoteListSkeleton /> }
                    } else if notes.is_empty() {
                        html! { <p>{"No notes available."}</p> }
                    } else {
                        html! {
                            <div class="flex flex-col gap-4">
                                {
                                    for notes.iter().map(|note| {
                                        let on_title_click = {
                                            let on_edit_note = on_edit_note.clone();
                                            let note = note.clone();
                                            Callback::from(move |_| {
                                                on_edit_note.emit(note.clone());
                                            })
                                        };
                                        let on_delete_click = {
                                            let on_delete_note = on_delete_note.clone();
                                            let note_id = note.id.clone();
                                            Callback::from(move |_| {
                                                on_delete_note.emit(note_id.clone());
                                            })
                                        };
                                        html! {
                                            <div
                                                key={note.id.clone()}
                                                class="card bg-base-100 shadow p-4 flex flex-row justify-between items-center"
                                            >
                                                <h3
                                                    class="cursor-pointer"
                                                    onclick={on_title_click}
                                                >
                                                    { note.display_title() }
                                                </h3>
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    onclick={on_delete_click}
                                                >
                                                    <Icon
                                                        icon_id={IconId::HeroiconsSolidTrash}
                                                        width="18"
                                                        height="18"
                                                    />
                                                </button>
                                            </div>
                                        }
                                    })
                                }
                            </div>
                        }
                    }
                }
            </main>
            {
                if *modal_open {
                    html! {
                        <NoteModal
                            note={(*selected).clone()}
                            on_submit={on_modal_submit}
                            on_close={on_modal_close}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
