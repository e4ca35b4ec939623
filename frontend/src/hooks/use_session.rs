use shared::SessionState;
use yew::prelude::*;

use crate::services::session::SessionHandle;

/// Current session state, re-rendering whenever the session changes
#[hook]
pub fn use_session(session: &SessionHandle) -> SessionState {
    let state = use_state(|| session.state());

    use_effect_with(session.clone(), {
        let state = state.clone();
        move |session| {
            // the session may have changed between render and effect
            state.set(session.state());
            let id = session.subscribe(move |next| state.set(next.clone()));

            let session = session.clone();
            move || session.unsubscribe(id)
        }
    });

    (*state).clone()
}
