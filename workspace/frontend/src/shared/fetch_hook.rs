use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use common::PollFence;
use gloo_timers::callback::Interval;
use crate::hooks::FetchState;

/// Fetches on mount and again every `interval_ms` while mounted.
///
/// Failures land in `FetchState::Error` without a toast; the next tick is
/// the retry. Earlier data is not blanked while a refresh is in flight.
/// A response is dropped if the component has unmounted or a newer poll was
/// issued after it, so a slow request can never overwrite a fresher one.
#[hook]
pub fn use_polling_fetch<T, F, Fut>(fetch_fn: F, interval_ms: u32) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let fence = use_mut_ref(PollFence::new);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();
        let fence = fence.clone();

        use_callback((), move |_: (), _| {
            let fetch_state = fetch_state.clone();
            let fetch_fn = fetch_fn.clone();
            let fence = fence.clone();

            let ticket = fence.borrow_mut().issue();
            log::trace!("Polling fetch #{} started", ticket);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                let result = fut.await;

                let fence = *fence.borrow();
                if !fence.accepts(ticket) {
                    if fence.is_open() {
                        log::debug!("Polling fetch #{} superseded, dropped", ticket);
                    } else {
                        log::debug!("Polling fetch #{} finished after unmount, dropped", ticket);
                    }
                    return;
                }

                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
        })
    };

    // Fetch on mount, then on every tick until unmount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            let tick = refetch.clone();
            let interval = Interval::new(interval_ms, move || {
                log::debug!("Polling interval elapsed, refetching");
                tick.emit(());
            });

            move || {
                fence.borrow_mut().close();
                drop(interval);
            }
        });
    }

    fetch_state
}
