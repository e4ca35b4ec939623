use gloo::timers::future::TimeoutFuture;
use shared::validation::error_for;
use shared::{Navigator, RegistrationForm, RegistrationResult, Route};
use tracing::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::TextField;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toasts::Notifier;
use crate::services::session::{HashNavigator, SessionHandle};

/// Pause between the success message and the redirect to login
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct RegistrationPageProps {
    pub session: SessionHandle,
    pub notifier: Notifier,
}

#[function_component(RegistrationPage)]
pub fn registration_page(props: &RegistrationPageProps) -> Html {
    let form = use_state(RegistrationForm::default);
    let submitted = use_state(|| false);
    let loading = use_session(&props.session).loading;

    let errors = if *submitted { form.validate() } else { Vec::new() };

    let update = |apply: fn(&mut RegistrationForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_barber_toggle = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(RegistrationForm {
                is_barber: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let session = props.session.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.is_loading() {
                return;
            }

            submitted.set(true);
            if !form.validate().is_empty() {
                return;
            }

            let request = form.to_request();
            let session = session.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                match session.register(&request).await {
                    RegistrationResult::Success(_) => {
                        info!(component = "registration", "Account created");
                        notifier.success(
                            "Cadastro realizado",
                            "Seu cadastro foi realizado com sucesso. Faça login para continuar.",
                        );
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        HashNavigator.navigate(Route::Login);
                    }
                    RegistrationResult::Failure { message } => {
                        notifier.error("Erro no cadastro", &message);
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <p class="auth-welcome">{"Bem-vindo(a)!"}</p>
                    <h1>{"💈 Barbearia Mano Peri"}</h1>
                </div>
                <hr />
                <h2>{"Crie sua conta"}</h2>

                <form class="auth-form" onsubmit={on_submit} novalidate={true}>
                    <TextField
                        id="nome"
                        label="Nome"
                        value={form.name.clone()}
                        error={error_for(&errors, "name")}
                        disabled={loading}
                        on_change={update(|form, value| form.name = value)}
                    />
                    <TextField
                        id="email"
                        label="E-mail"
                        input_type="email"
                        value={form.email.clone()}
                        error={error_for(&errors, "email")}
                        disabled={loading}
                        on_change={update(|form, value| form.email = value)}
                    />
                    <TextField
                        id="senha"
                        label="Senha"
                        input_type="password"
                        value={form.password.clone()}
                        error={error_for(&errors, "password")}
                        disabled={loading}
                        on_change={update(|form, value| form.password = value)}
                    />
                    <TextField
                        id="confirmarSenha"
                        label="Confirme a senha"
                        input_type="password"
                        value={form.password_confirmation.clone()}
                        error={error_for(&errors, "password_confirmation")}
                        disabled={loading}
                        on_change={update(|form, value| form.password_confirmation = value)}
                    />

                    <div class="form-group checkbox">
                        <input
                            type="checkbox"
                            id="ehBarbeiro"
                            checked={form.is_barber}
                            disabled={loading}
                            onchange={on_barber_toggle}
                        />
                        <label for="ehBarbeiro">{"Sou barbeiro"}</label>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={loading}>
                        {if loading { "Processando..." } else { "Cadastrar" }}
                    </button>

                    <div class="auth-switch">
                        <span>{"Já tem uma conta?"}</span>
                        <a href={format!("#{}", Route::Login.path())}>{"Faça login"}</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
