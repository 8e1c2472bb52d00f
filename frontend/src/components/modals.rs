//! Signup and login modals.
//!
//! The forms post straight to `/auth`; the server renders any error back
//! into the page as a `.modal-error` element, which reopens the matching
//! modal on load with the message shown inside it.

use leptos::ev::MouseEvent;
use leptos::*;
use proconverter::{
    AuthModal, AUTH_MODE_FIELD, AUTH_PATH, EMAIL_FIELD, PASSWORD_FIELD, USERNAME_FIELD,
};

use crate::services::server_modal_error;

/// Whether a click landed on the modal backdrop rather than its content.
fn is_backdrop(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[component]
pub fn AuthModals(modal: RwSignal<AuthModal>) -> impl IntoView {
    let server_error = server_modal_error().map(|text| text.trim().to_string());
    let reopened = server_error.as_deref().map(AuthModal::for_error);
    if let (Some(error), Some(which)) = (&server_error, reopened) {
        log::warn!("Auth error from server: {}", error);
        modal.set(which);
    }

    // The server message belongs to the modal it reopened
    let error_for = move |which: AuthModal| {
        let text = server_error.clone().filter(|_| reopened == Some(which));
        text.map(|text| view! { <p class="auth-error">{text}</p> })
    };

    let close = move |_: MouseEvent| modal.set(AuthModal::Closed);
    let close_on_backdrop = move |ev: MouseEvent| {
        if is_backdrop(&ev) {
            modal.set(AuthModal::Closed);
        }
    };
    let switch = move |ev: MouseEvent| {
        ev.prevent_default();
        modal.update(|m| *m = m.switched());
    };

    view! {
        <div
            id="signup-modal"
            class="modal"
            style:display=move || if modal.get().shows_signup() { "flex" } else { "none" }
            on:click=close_on_backdrop
        >
            <div class="modal-content">
                <span id="close-signup" class="close" on:click=close>"×"</span>
                <h2>"Create an account"</h2>
                {error_for(AuthModal::Signup)}
                <form action=AUTH_PATH method="post">
                    <input type="hidden" name=AUTH_MODE_FIELD value=AuthModal::Signup.form_mode()/>
                    <input type="text" name=USERNAME_FIELD placeholder="Username" required=true/>
                    <input type="email" name=EMAIL_FIELD placeholder="Email" required=true/>
                    <input type="password" name=PASSWORD_FIELD placeholder="Password" required=true/>
                    <button type="submit" class="modal-btn">"Sign up"</button>
                </form>
                <p class="modal-switch">
                    "Already have an account? "
                    <a href="#" id="switch-to-login" on:click=switch>"Log in"</a>
                </p>
            </div>
        </div>

        <div
            id="login-modal"
            class="modal"
            style:display=move || if modal.get().shows_login() { "flex" } else { "none" }
            on:click=close_on_backdrop
        >
            <div class="modal-content">
                <span id="close-login" class="close" on:click=close>"×"</span>
                <h2>"Welcome back"</h2>
                {error_for(AuthModal::Login)}
                <form action=AUTH_PATH method="post">
                    <input type="hidden" name=AUTH_MODE_FIELD value=AuthModal::Login.form_mode()/>
                    <input type="text" name=USERNAME_FIELD placeholder="Username" required=true/>
                    <input type="password" name=PASSWORD_FIELD placeholder="Password" required=true/>
                    <button type="submit" class="modal-btn">"Log in"</button>
                </form>
                <p class="modal-switch">
                    "No account yet? "
                    <a href="#" id="switch-to-signup" on:click=switch>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
