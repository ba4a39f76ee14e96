use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / "Page X of Y" / Next under an admin table.
///
/// Pages are 1-based. Nothing is rendered while everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Receives the page to show; never called with an out-of-range page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <span class="pagination-info">
                    {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                </span>
                <div class="pagination-controls__buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page > 1 {
                                on_page_change.run(page - 1);
                            }
                        }
                        disabled=is_first
                    >
                        {icon("chevron-left")}
                        "Previous"
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page < total_pages.get() {
                                on_page_change.run(page + 1);
                            }
                        }
                        disabled=is_last
                    >
                        "Next"
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
