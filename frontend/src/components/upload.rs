//! Upload area with drag & drop support.
//!
//! Files picked or dropped here go straight to the controller, which
//! checks the tool selection and posts them to the conversion server.

use leptos::ev::{DragEvent, MouseEvent};
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::ProgressSection;
use crate::services::files_from_list;
use crate::types::SharedController;

#[component]
pub fn UploadSection(area_ref: NodeRef<html::Div>) -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let state = *controller.view();
    let (dragging, set_dragging) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let submit = move |files: Vec<File>| {
        let controller = controller.clone();
        spawn_local(async move {
            let outcome = controller.submit(files).await;
            log::debug!("Upload finished: {:?}", outcome);
        });
    };

    // Keep the browser from opening files dropped outside the area
    let dragover_handle = window_event_listener(ev::dragover, |ev| ev.prevent_default());
    let drop_handle = window_event_listener(ev::drop, |ev| ev.prevent_default());
    on_cleanup(move || {
        dragover_handle.remove();
        drop_handle.remove();
    });

    let open_picker = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_dragging.set(false);
    };

    let on_drop = {
        let submit = submit.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_dragging.set(false);

            let files = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| files_from_list(&list))
                .unwrap_or_default();
            submit(files);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| files_from_list(&list)).unwrap_or_default();
        // Allow picking the same file again
        input.set_value("");
        submit(files);
    };

    view! {
        <section id="upload" class="upload-section">
            <div
                class="upload-area"
                id="uploadArea"
                class:dragover=move || dragging.get()
                node_ref=area_ref
                on:click=move |_| open_picker()
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
                <h3 id="uploadHeading">{move || state.upload_heading()}</h3>
                <p class="upload-hint">"Drag & drop files here or"</p>

                <button
                    class="upload-btn"
                    id="uploadBtn"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        open_picker();
                    }
                >
                    "Browse files"
                </button>

                <input
                    type="file"
                    id="fileInput"
                    multiple=true
                    accept=move || state.selected_tool.get().map(|t| t.accept_attr()).unwrap_or_default()
                    style="display:none"
                    node_ref=input_ref
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                    on:change=on_file_change
                />
            </div>

            <ProgressSection/>
        </section>
    }
}
