//! Toast notification component

use leptos::*;

use crate::types::SharedController;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let state = *expect_context::<SharedController>().view();
    let toast = move || state.toast.get();

    view! {
        <div
            id="notification"
            class=move || match toast() {
                Some(t) => format!("notification show {}", t.notification.kind.css_class()),
                None => "notification".to_string(),
            }
        >
            <i class=move || toast().map(|t| t.notification.kind.icon_class()).unwrap_or_default()></i>
            <span>{move || toast().map(|t| t.notification.message).unwrap_or_default()}</span>
        </div>
    }
}
