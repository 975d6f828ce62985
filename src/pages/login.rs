//! Login Page
//!
//! Sign-in and registration in one form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (is_login, set_is_login) = signal(true);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        let full_name = full_name.get_untracked();
        let login = is_login.get_untracked();

        spawn_local(async move {
            let result = if login {
                auth.login(email.trim(), &password).await
            } else {
                auth.register(email.trim(), &password, &full_name).await
            };
            if let Err(message) = result {
                let _ = set_error.try_set(Some(message));
            }
            // The page unmounts on success
            let _ = set_loading.try_set(false);
        });
    };

    let toggle_mode = move |_| {
        set_is_login.update(|l| *l = !*l);
        set_error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-header">
                <span class="login-logo">"📜"</span>
                <h1>"Acta Diurna"</h1>
                <p class="tagline">"\"The daily acts\" - Your social newspaper network"</p>
            </div>

            <Show when=move || auth.session_error().is_some()>
                <div class="session-banner">{move || auth.session_error().unwrap_or_default()}</div>
            </Show>

            <form class="login-form" on:submit=on_submit>
                <h2>{move || if is_login.get() { "Welcome Back" } else { "Join Acta Diurna" }}</h2>
                <p class="login-subtitle">
                    {move || {
                        if is_login.get() {
                            "Sign in to your account"
                        } else {
                            "Create your account to start sharing stories"
                        }
                    }}
                </p>

                <Show when=move || !is_login.get()>
                    <label class="form-field">
                        <span>"Full Name"</span>
                        <input
                            type="text"
                            autocomplete="name"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="form-field">
                    <span>"Email Address"</span>
                    <input
                        type="email"
                        required=true
                        autocomplete="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span>"Password"</span>
                    <div class="password-field">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            required=true
                            autocomplete=move || if is_login.get() { "current-password" } else { "new-password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            title=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" class="btn primary wide" disabled=move || loading.get()>
                    {move || match (loading.get(), is_login.get()) {
                        (true, _) => "Please wait...",
                        (false, true) => "Sign In",
                        (false, false) => "Create Account",
                    }}
                </button>

                <p class="login-switch">
                    {move || if is_login.get() { "Don't have an account? " } else { "Already have an account? " }}
                    <button type="button" class="link-btn" on:click=toggle_mode>
                        {move || if is_login.get() { "Sign up" } else { "Sign in" }}
                    </button>
                </p>
            </form>
        </div>
    }
}
