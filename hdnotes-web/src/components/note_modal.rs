use crate::models::toast::ToastQueue;
use shared::models::{Note, NotePayload};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoteModalProps {
    /// Note being edited; `None` means the modal creates a new note.
    #[prop_or_default]
    pub note: Option<Note>,
    /// Emits the validated {title, content} pair.
    pub on_submit: Callback<NotePayload>,
    /// Asks the parent to close (and thereby unmount) the modal.
    pub on_close: Callback<()>,
}

/// Modal editor producing a validated `{title, content}` pair.
///
/// Pre-fills from `note` when editing. The parent mounts a fresh instance per
/// open, so fields are cleared on any close path without bookkeeping here.
#[function_component(NoteModal)]
pub fn note_modal(props: &NoteModalProps) -> Html {
    let title = use_state(|| {
        props
            .note
            .as_ref()
            .map(|note| note.title.clone())
            .unwrap_or_default()
    });
    let content = use_state(|| {
        props
            .note
            .as_ref()
            .map(|note| note.content.clone())
            .unwrap_or_default()
    });
    let (_, toast_dispatch) = use_store::<ToastQueue>();

    let editing = props.note.is_some();
    let heading = if editing { "Edit Note" } else { "Create Note" };
    let action = if editing { "Update" } else { "Create" };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(input.value());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_submit_click = {
        let title = title.clone();
        let content = content.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if title.trim().is_empty() || content.trim().is_empty() {
                toast_dispatch
                    .reduce_mut(|queue| queue.error("Both title and content are required!"));
                return;
            }
            on_submit.emit(NotePayload {
                title: (*title).clone(),
                content: (*content).clone(),
            });
            on_close.emit(());
        })
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box relative">
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    onclick={on_close_click}
                >
                    <Icon icon_id={IconId::HeroiconsSolidXMark} width="16" height="16" />
                </button>
                <h3 class="font-bold text-lg">{heading}</h3>
                <div class="form-control mt-4">
                    <label class="label" for="note-title">
                        <span class="label-text">{"Note Title"}</span>
                    </label>
                    <input
                        id="note-title"
                        class="input input-bordered"
                        type="text"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />
                </div>
                <div class="form-control mt-2">
                    <label class="label" for="note-content">
                        <span class="label-text">{"Note Content"}</span>
                    </label>
                    <textarea
                        id="note-content"
                        class="textarea textarea-bordered"
                        rows="4"
                        value={(*content).clone()}
                        oninput={on_content_input}
                    />
                </div>
                <div class="modal-action">
                    <button class="btn btn-primary" onclick={on_submit_click}>
                        {action}
                    </button>
                </div>
            </div>
        </div>
    }
}
