mod components;
mod hooks;
mod services;

use gloo::events::EventListener;
use gloo::utils::window;
use shared::{resolve_route, Route};
use tracing::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::appointments_page::AppointmentsPage;
use components::booking_page::BookingPage;
use components::forms::login_form::LoginPage;
use components::forms::registration_form::RegistrationPage;
use components::navbar::Navbar;
use components::toast_list::ToastList;
use hooks::use_session::use_session;
use hooks::use_toasts::use_toasts;
use services::api::ApiClient;
use services::config::load_config;
use services::session::{current_route, set_hash, SessionHandle};

#[derive(Properties, PartialEq)]
struct AppProps {
    session: SessionHandle,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let session_state = use_session(&props.session);
    let requested = use_state(current_route);
    let toasts = use_toasts();

    // Follow the fragment as the user navigates
    use_effect_with((), {
        let requested = requested.clone();
        move |_| {
            let listener = EventListener::new(&window(), "hashchange", move |_| {
                requested.set(current_route());
            });
            move || drop(listener)
        }
    });

    let route = resolve_route(*requested, &session_state);

    // Keep the address bar on the screen actually shown
    use_effect_with(route, |route| {
        debug!(component = "router", path = route.path(), "Showing route");
        set_hash(*route);
        || ()
    });

    let session = props.session.clone();
    let notifier = toasts.notifier.clone();

    let page = match route {
        Route::Login => html! { <LoginPage {session} {notifier} /> },
        Route::Register => html! { <RegistrationPage {session} {notifier} /> },
        Route::Booking => html! { <BookingPage {session} {notifier} /> },
        Route::MyAppointments => html! { <AppointmentsPage {session} {notifier} /> },
    };

    html! {
        <>
            <Navbar
                session={props.session.clone()}
                state={session_state.clone()}
                current_route={route}
            />
            <main class="main">
                {page}
            </main>
            <ToastList toasts={toasts.toasts.clone()} notifier={toasts.notifier.clone()} />
        </>
    }
}

fn main() {
    services::logging::init();

    spawn_local(async {
        let config = load_config().await;
        let api = ApiClient::new(&config);
        info!(component = "app", api_base = api.base_url(), "Starting barbershop frontend");

        let session = SessionHandle::new(api);
        yew::Renderer::<App>::with_props(AppProps { session }).render();
    });
}
