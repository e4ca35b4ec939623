use shared::validation::error_for;
use shared::{LoginForm, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::TextField;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toasts::Notifier;
use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub session: SessionHandle,
    pub notifier: Notifier,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let form = use_state(LoginForm::default);
    // Errors only show after the first submit attempt
    let submitted = use_state(|| false);
    let loading = use_session(&props.session).loading;

    let errors = if *submitted { form.validate() } else { Vec::new() };

    let on_email_change = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(LoginForm { email, ..(*form).clone() });
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm { password, ..(*form).clone() });
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

            let credentials = (*form).clone();
            let session = session.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let success = session
                    .login(credentials.email.trim(), &credentials.password)
                    .await;
                if !success {
                    notifier.error(
                        "Erro no login",
                        "E-mail ou senha inválidos. Por favor, tente novamente.",
                    );
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <p class="auth-welcome">{"Bem-vindo(a) de volta!"}</p>
                    <h1>{"💈 Barbearia Mano Peri"}</h1>
                </div>
                <hr />
                <h2>{"Entre com sua conta"}</h2>

                <form class="auth-form" onsubmit={on_submit} novalidate={true}>
                    <TextField
                        id="email"
                        label="E-mail"
                        input_type="email"
                        value={form.email.clone()}
                        error={error_for(&errors, "email")}
                        disabled={loading}
                        on_change={on_email_change}
                    />
                    <TextField
                        id="password"
                        label="Senha"
                        input_type="password"
                        value={form.password.clone()}
                        error={error_for(&errors, "password")}
                        disabled={loading}
                        on_change={on_password_change}
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled={loading}>
                        {if loading { "Processando..." } else { "Entrar" }}
                    </button>

                    <div class="auth-switch">
                        <span>{"Não tem uma conta?"}</span>
                        <a href={format!("#{}", Route::Register.path())}>{"Cadastre-se"}</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
