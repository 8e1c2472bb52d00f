//! Site header: brand, navigation with active-section highlighting,
//! hamburger menu for small screens, and auth modal links.

use leptos::ev::MouseEvent;
use leptos::*;
use proconverter::{active_section, is_header_scrolled, link_targets, AuthModal, MenuState};
use wasm_bindgen::JsCast;

use crate::services::{page_sections, scroll_y, smooth_scroll_to_anchor};
use crate::{APP_NAME, NAV_LINKS};

#[component]
pub fn Header(modal: RwSignal<AuthModal>) -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(is_header_scrolled(scroll_y()));
    let (active, set_active) = create_signal(None::<String>);
    let menu = create_rw_signal(MenuState::default());
    let header_ref = create_node_ref::<html::Header>();

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let y = scroll_y();
        set_scrolled.set(is_header_scrolled(y));
        let sections = page_sections();
        set_active.set(active_section(y, &sections).map(str::to_string));
    });

    // Close the mobile menu on any click outside the header
    let click_handle = window_event_listener(ev::click, move |ev| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = match (header_ref.get_untracked(), target) {
            (Some(header), Some(node)) => header.contains(Some(&node)),
            _ => false,
        };
        menu.update(|m| m.on_document_click(inside));
    });

    on_cleanup(move || {
        scroll_handle.remove();
        click_handle.remove();
    });

    let open_modal = move |ev: MouseEvent, which: AuthModal| {
        ev.prevent_default();
        menu.update(MenuState::close);
        modal.set(which);
    };

    view! {
        <header class="main-header" class:scrolled=move || scrolled.get() node_ref=header_ref>
            <a href="#home" class="logo" on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                smooth_scroll_to_anchor("#home");
            }>
                <i class="fas fa-sync-alt"></i>
                {APP_NAME}
            </a>

            <nav id="nav-links" class="header-nav" class:open=move || menu.get().is_open()>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                href=href
                                class:active=move || {
                                    active.get().is_some_and(|id| link_targets(href, &id))
                                }
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    menu.update(MenuState::close);
                                    smooth_scroll_to_anchor(href);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href="#" id="open-login" class="nav-auth" on:click=move |ev| open_modal(ev, AuthModal::Login)>
                    "Log in"
                </a>
                <a href="#" id="open-signup" class="nav-auth nav-auth-primary" on:click=move |ev| open_modal(ev, AuthModal::Signup)>
                    "Sign up"
                </a>
            </nav>

            <button
                id="hamburger"
                class="hamburger"
                class:active=move || menu.get().is_open()
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    menu.update(MenuState::toggle);
                }
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
        </header>
    }
}
