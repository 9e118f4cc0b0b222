use yew::{Html, function_component, html};

/// Placeholder rows shown while the note list is being fetched.
#[function_component(NoteListSkeleton)]
pub fn note_list_skeleton() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            {
                for (0..5).map(|index: u32| html! {
                    <div key={index.to_string()} class="card bg-base-100 shadow p-4 flex flex-row justify-between">
                        <div class="skeleton h-5 w-48"></div>
                        <div class="skeleton h-5 w-5"></div>
                    </div>
                })
            }
        </div>
    }
}
