pub mod state;

use contracts::domain::a001_inquiry::{Inquiry, InquiryId, InquiryStatus};
use contracts::shared::list::StatusFilter;
use contracts::shared::notice::Notice;
use contracts::usecases::u501_accept_inquiry::AcceptInquiry;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::*;

use self::state::{create_state, select_value};
use super::details::InquiryDetailsDialog;
use crate::layout::notifications::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::InquiryStatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::export_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::usecases::u501_accept_inquiry::view::AcceptInquiryDialog;

#[component]
pub fn InquiryList() -> impl IntoView {
    let notifications = use_notifications();
    let query = use_query_map();
    let state = create_state();
    let workflow = RwSignal::new(AcceptInquiry::new());

    let details_open = RwSignal::new(false);
    let status_value = RwSignal::new(select_value(StatusFilter::All));

    // ?status=new from the dashboard cards, ?search=<email> from a customer card
    Effect::new(move |_| {
        let (status, search) = query.with(|q| (q.get("status"), q.get("search")));
        if status.is_none() && search.is_none() {
            return;
        }
        let filter = status
            .as_deref()
            .map(StatusFilter::<InquiryStatus>::parse)
            .unwrap_or_default();
        log::debug!("inquiry list from query: status={} search={:?}", filter, search);
        state.update(|s| {
            s.set_status_filter(filter);
            s.set_search_term(search.unwrap_or_default());
            s.apply_filters();
        });
        status_value.set(select_value(filter));
    });

    // Select applies at once
    Effect::new(move |_| {
        let filter = StatusFilter::<InquiryStatus>::parse(&status_value.get());
        if state.with_untracked(|s| s.status_filter()) != filter {
            state.update(|s| {
                s.set_status_filter(filter);
                s.apply_filters();
            });
        }
    });

    // Selection closes with the details dialog
    Effect::new(move |_| {
        if !details_open.get() && state.with_untracked(|s| s.selected().is_some()) {
            state.update(|s| s.clear_selection());
        }
    });

    let apply_filters = move || {
        state.update(|s| s.apply_filters());
        log::info!(
            "inquiry filters applied: {} rows",
            state.with_untracked(|s| s.filtered().len())
        );
    };

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search_term(term));
        apply_filters();
    });

    let open_details = move |id: InquiryId| {
        if state.try_update(|s| s.select(id)).unwrap_or(false) {
            details_open.set(true);
        }
    };

    let begin_accept = Callback::new(move |inquiry: Inquiry| {
        let outcome = workflow.try_update(|w| w.begin(&inquiry).map(|_| ()));
        match outcome {
            Some(Ok(())) => {
                log::info!("accepting inquiry {}", inquiry.id);
                details_open.set(false);
            }
            Some(Err(e)) => notifications.notify(Notice::error("Cannot accept inquiry", e.to_string())),
            None => {}
        }
    });

    let export = move |_| {
        let rows = state.with_untracked(|s| s.filtered().to_vec());
        if let Err(e) = export_csv(&rows, "inquiries.csv") {
            notifications.notify(Notice::error("Export failed", e));
        }
    };

    let page = Memo::new(move |_| state.with(|s| s.current_page()));
    let search_term = Signal::derive(move || state.with(|s| s.search_term().to_string()));

    view! {
        <PageFrame page_id="a001_inquiry--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Customer Inquiries"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=export>
                    {icon("download")}
                    "Export Data"
                </Button>
            </div>

            <div class="page__content">
                <Card>
                    <div class="card__header">
                        <h2 class="card__title">"Filter Inquiries"</h2>
                        <p class="card__description">"Search and filter customer inquiries"</p>
                    </div>
                    <div class="filter-bar">
                        <SearchInput
                            value=search_term
                            on_change=on_search
                            placeholder="Search by name, email, or service..."
                        />
                        <Select value=status_value>
                            <option value="all">"All Statuses"</option>
                            {InquiryStatus::ALL
                                .iter()
                                .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_filters()>
                            "Apply Filters"
                        </Button>
                    </div>
                </Card>

                <Card>
                    <div class="card__header">
                        <h2 class="card__title">"Inquiry List"</h2>
                        <p class="card__description">
                            {move || page.with(|p| {
                                format!("Showing {}-{} of {} inquiries", p.first_index(), p.last_index(), p.total_count)
                            })}
                        </p>
                    </div>
                    <div class="table-wrapper">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Service"</TableHeaderCell>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell class="table__cell--right">"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <Show
                                    when=move || !page.with(|p| p.is_empty())
                                    fallback=|| view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5" class="table__empty">
                                                "No inquiries found matching your criteria"
                                            </TableCell>
                                        </TableRow>
                                    }
                                >
                                    <For
                                        each=move || page.with(|p| p.items.clone())
                                        key=|i| (i.id, i.status)
                                        children=move |inquiry: Inquiry| {
                                            let id = inquiry.id;
                                            let Inquiry { name, email, service, status, submitted_at, .. } = inquiry.clone();
                                            let accept = inquiry.is_new().then(|| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    size=ButtonSize::Small
                                                    attr:title="Accept"
                                                    on_click=move |_| begin_accept.run(inquiry.clone())
                                                >
                                                    {icon("check")}
                                                </Button>
                                            });
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
                                                        <TableCellLayout>{move || highlight_matches(&service, &search_term.get())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{format_date(&submitted_at)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout><InquiryStatusBadge status=status /></TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <div class="table__actions">
                                                            <Button
                                                                appearance=ButtonAppearance::Secondary
                                                                size=ButtonSize::Small
                                                                on_click=move |_| open_details(id)
                                                            >
                                                                "View"
                                                            </Button>
                                                            {accept}
                                                        </div>
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

            <InquiryDetailsDialog
                open=details_open
                inquiry=Signal::derive(move || state.with(|s| s.selected().cloned()))
                on_accept=begin_accept
            />
            <AcceptInquiryDialog workflow=workflow list=state />
        </PageFrame>
    }
}
