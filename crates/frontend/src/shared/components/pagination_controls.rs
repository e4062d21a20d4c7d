use leptos::prelude::*;

/// Previous / next navigation over the client-side pages.
///
/// Pages are 1-based. With an empty result set `total_pages` is 0: both
/// buttons stay disabled and the label reads "Page 1 of 0".
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__btn"
                aria-label="Previous page"
                disabled=move || current_page.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination__info">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination__btn"
                aria-label="Next page"
                disabled=move || current_page.get() >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
