use crate::models::toast::{ToastKind, ToastQueue};
use gloo_timers::callback::Timeout;
use std::collections::HashSet;
use yew::prelude::*;
use yewdux::prelude::*;

/// How long a toast stays up before dismissing itself.
const AUTO_DISMISS_MS: u32 = 4_000;

/// Top-right stack of transient notifications.
///
/// Toasts auto-dismiss after [`AUTO_DISMISS_MS`] and can be dismissed early
/// by clicking them.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let (queue, dispatch) = use_store::<ToastQueue>();
    let scheduled = use_mut_ref(HashSet::<u32>::new);

    {
        let queue = queue.clone();
        let dispatch = dispatch.clone();
        use_effect_with(queue, move |queue| {
            for toast in queue.toasts() {
                // Schedule each toast's dismissal exactly once.
                if scheduled.borrow_mut().insert(toast.id) {
                    let dispatch = dispatch.clone();
                    let id = toast.id;
                    Timeout::new(AUTO_DISMISS_MS, move || {
                        dispatch.reduce_mut(|queue| queue.dismiss(id));
                    })
                    .forget();
                }
            }
            || ()
        });
    }

    html! {
        <div class="toast toast-top toast-end z-50">
            {
                for queue.toasts().iter().map(|toast| {
                    let alert_class = match toast.kind {
                        ToastKind::Success => "alert alert-success cursor-pointer",
                        ToastKind::Error => "alert alert-error cursor-pointer",
                    };
                    let onclick = {
                        let dispatch = dispatch.clone();
                        let id = toast.id;
                        Callback::from(move |_| {
                            dispatch.reduce_mut(|queue| queue.dismiss(id));
                        })
                    };
                    html! {
                        <div key={toast.id} class={alert_class} {onclick}>
                            <span>{toast.message.clone()}</span>
                        </div>
                    }
                })
            }
        </div>
    }
}
