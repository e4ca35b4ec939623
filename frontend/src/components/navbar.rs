use shared::{Route, SessionState};
use yew::prelude::*;

use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub session: SessionHandle,
    pub state: SessionState,
    pub current_route: Route,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    if !props.state.authenticated {
        return html! {};
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let session = props.session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            session.logout();
        })
    };

    let greeting = format!(
        "Bem-vindo(a), {}",
        props.session.user_name().unwrap_or_default()
    );

    let link = |route: Route, label: &'static str| {
        let menu_open = menu_open.clone();
        html! {
            <a
                href={format!("#{}", route.path())}
                class={classes!("nav-link", (props.current_route == route).then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| menu_open.set(false))}
            >
                {label}
            </a>
        }
    };

    html! {
        <nav class="navbar">
            <div class="container">
                <div class="navbar-brand">
                    <span class="navbar-logo">{"💈"}</span>
                    <span class="navbar-title">{"Barbearia Mano Peri"}</span>
                </div>
                <button type="button" class="navbar-toggle" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <div class={classes!("navbar-menu", (*menu_open).then_some("open"))}>
                    {if !props.state.is_barber() {
                        link(Route::Booking, "Agendar")
                    } else {
                        html! {}
                    }}
                    {link(Route::MyAppointments, "Meus Agendamentos")}
                    <span class="navbar-divider"></span>
                    <span class="navbar-greeting">{greeting}</span>
                    <button type="button" class="btn btn-danger" onclick={on_logout}>
                        {"Sair"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
