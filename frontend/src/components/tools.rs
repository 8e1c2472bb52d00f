//! Tool grid, grouped by category.

use leptos::*;
use proconverter::{Tool, ToolCategory};

use crate::services::smooth_scroll_into_view;
use crate::types::SharedController;

const CATEGORIES: [ToolCategory; 3] = [ToolCategory::Pdf, ToolCategory::Office, ToolCategory::Image];

fn icon_for(category: ToolCategory) -> &'static str {
    match category {
        ToolCategory::Pdf => "fas fa-file-pdf",
        ToolCategory::Office => "fas fa-file-word",
        ToolCategory::Image => "fas fa-image",
    }
}

#[component]
pub fn ToolsSection(upload_area: NodeRef<html::Div>) -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let state = *controller.view();

    let card = move |tool: Tool| {
        let controller = controller.clone();
        view! {
            <div
                class="tool-card"
                data-tool=tool.id()
                class:selected=move || state.selected_tool.get() == Some(tool)
                on:click=move |_| {
                    controller.select_tool(tool);
                    if let Some(area) = upload_area.get_untracked() {
                        smooth_scroll_into_view(&area);
                    }
                }
            >
                <i class=icon_for(tool.category())></i>
                <h4>{tool.label()}</h4>
                <p>{tool.description()}</p>
            </div>
        }
    };

    view! {
        <section id="tools" class="tools-section">
            <h2>"Conversion tools"</h2>
            {CATEGORIES
                .into_iter()
                .map(|category| {
                    let card = card.clone();
                    view! {
                        <div class="tool-category">
                            <h3>{category.title()}</h3>
                            <div class="tools-grid">
                                {Tool::ALL
                                    .iter()
                                    .copied()
                                    .filter(|tool| tool.category() == category)
                                    .map(card)
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
