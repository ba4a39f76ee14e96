pub mod state;

use contracts::domain::a002_customer::{Customer, CustomerId};
use contracts::shared::notice::Notice;
use leptos::prelude::*;
use thaw::*;

use self::state::create_state;
use super::details::CustomerDetailsDialog;
use crate::layout::notifications::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::CustomerStatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::export_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn CustomerList() -> impl IntoView {
    let notifications = use_notifications();
    let state = create_state();
    let details_open = RwSignal::new(false);

    Effect::new(move |_| {
        if !details_open.get() && state.with_untracked(|s| s.selected().is_some()) {
            state.update(|s| s.clear_selection());
        }
    });

    let search = move || {
        state.update(|s| s.apply_filters());
        log::info!(
            "customer search applied: {} rows",
            state.with_untracked(|s| s.filtered().len())
        );
    };

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search_term(term));
        search();
    });

    let open_details = move |id: CustomerId| {
        if state.try_update(|s| s.select(id)).unwrap_or(false) {
            details_open.set(true);
        }
    };

    let export = move |_| {
        let rows = state.with_untracked(|s| s.filtered().to_vec());
        if let Err(e) = export_csv(&rows, "customers.csv") {
            notifications.notify(Notice::error("Export failed", e));
        }
    };

    let page = Memo::new(move |_| state.with(|s| s.current_page()));
    let search_term = Signal::derive(move || state.with(|s| s.search_term().to_string()));

    view! {
        <PageFrame page_id="a002_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Customer Management"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=export>
                    {icon("download")}
                    "Export Data"
                </Button>
            </div>

            <div class="page__content">
                <Card>
                    <div class="card__header">
                        <h2 class="card__title">"Customers"</h2>
                        <p class="card__description">"Manage registered customer accounts"</p>
                    </div>
                    <div class="filter-bar">
                        <SearchInput
                            value=search_term
                            on_change=on_search
                            placeholder="Search by name, email, or username..."
                        />
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| search()>
                            "Search"
                        </Button>
                    </div>

                    <div class="table-wrapper">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Username"</TableHeaderCell>
                                    <TableHeaderCell>"Date Created"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Inquiries"</TableHeaderCell>
                                    <TableHeaderCell class="table__cell--right">"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <Show
                                    when=move || !page.with(|p| p.is_empty())
                                    fallback=|| view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6" class="table__empty">
                                                "No customers found matching your search"
                                            </TableCell>
                                        </TableRow>
                                    }
                                >
                                    <For
                                        each=move || page.with(|p| p.items.clone())
                                        key=|c| c.id
                                        children=move |customer: Customer| {
                                            let id = customer.id;
                                            let jobs = customer.job_summary();
                                            let Customer { name, email, username, created_at, status, .. } = customer;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>
                                                                <p class="table__primary">{move || highlight_matches(&name, &search_term.get())}</p>
                                                                <p class="table__secondary">{move || highlight_matches(&email, &search_term.get())}</p>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{move || highlight_matches(&username, &search_term.get())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{format_date(&created_at)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout><CustomerStatusBadge status=status /></TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{jobs}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_details(id)
                                                        >
                                                            "View"
                                                        </Button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </Show>
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        on_page_change=Callback::new(move |n: usize| state.update(|s| s.go_to_page(n)))
                    />
                </Card>
            </div>

            <CustomerDetailsDialog
                open=details_open
                customer=Signal::derive(move || state.with(|s| s.selected().cloned()))
            />
        </PageFrame>
    }
}
