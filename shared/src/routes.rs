use crate::session::SessionState;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Booking,
    MyAppointments,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/registro",
            Route::Booking => "/agendamento",
            Route::MyAppointments => "/meus-agendamentos",
        }
    }

    /// Unknown paths land on the login screen
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/registro" => Route::Register,
            "/agendamento" => Route::Booking,
            "/meus-agendamentos" => Route::MyAppointments,
            _ => Route::Login,
        }
    }

    /// Where an authenticated user goes by default
    pub fn home_for(state: &SessionState) -> Self {
        if state.is_barber() {
            Route::MyAppointments
        } else {
            Route::Booking
        }
    }
}

/// Apply the route guards to a requested screen.
///
/// Login and registration are for visitors only; booking is for
/// authenticated clients; the appointment list needs any authenticated user.
pub fn resolve_route(requested: Route, state: &SessionState) -> Route {
    match requested {
        Route::Login | Route::Register if state.authenticated => Route::home_for(state),
        Route::Login | Route::Register => requested,
        Route::Booking | Route::MyAppointments if !state.authenticated => Route::Login,
        Route::Booking if state.is_barber() => Route::MyAppointments,
        Route::Booking | Route::MyAppointments => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{barber, client};

    fn visitor() -> SessionState {
        SessionState::default()
    }

    fn signed_in(user: Option<crate::User>) -> SessionState {
        SessionState { authenticated: true, current_user: user, ..SessionState::default() }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Login, Route::Register, Route::Booking, Route::MyAppointments] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("#/agendamento"), Route::Booking);
        assert_eq!(Route::from_path("/agendamento/"), Route::Booking);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/admin"), Route::Login);
    }

    #[test]
    fn test_visitors_only_reach_public_screens() {
        let state = visitor();
        assert_eq!(resolve_route(Route::Login, &state), Route::Login);
        assert_eq!(resolve_route(Route::Register, &state), Route::Register);
        assert_eq!(resolve_route(Route::Booking, &state), Route::Login);
        assert_eq!(resolve_route(Route::MyAppointments, &state), Route::Login);
    }

    #[test]
    fn test_clients_are_sent_to_booking() {
        let state = signed_in(Some(client()));
        assert_eq!(resolve_route(Route::Login, &state), Route::Booking);
        assert_eq!(resolve_route(Route::Register, &state), Route::Booking);
        assert_eq!(resolve_route(Route::Booking, &state), Route::Booking);
        assert_eq!(resolve_route(Route::MyAppointments, &state), Route::MyAppointments);
    }

    #[test]
    fn test_barbers_cannot_book() {
        let state = signed_in(Some(barber()));
        assert_eq!(resolve_route(Route::Login, &state), Route::MyAppointments);
        assert_eq!(resolve_route(Route::Booking, &state), Route::MyAppointments);
        assert_eq!(resolve_route(Route::MyAppointments, &state), Route::MyAppointments);
    }

    #[test]
    fn test_token_without_user_is_treated_as_client() {
        let state = signed_in(None);
        assert_eq!(resolve_route(Route::Booking, &state), Route::Booking);
        assert_eq!(resolve_route(Route::Login, &state), Route::Booking);
    }
}
