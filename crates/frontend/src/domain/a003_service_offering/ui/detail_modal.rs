use contracts::domain::a003_service_offering::ServiceOffering;
use leptos::prelude::*;
use thaw::*;

/// Full description of one service. Closed while `service` is `None`.
#[component]
pub fn ServiceDetailModal(service: RwSignal<Option<&'static ServiceOffering>>) -> impl IntoView {
    let open = RwSignal::new(false);

    // Dialog and selection close together, from either side.
    Effect::new(move |_| {
        let want_open = service.with(Option::is_some);
        if open.get_untracked() != want_open {
            open.set(want_open);
        }
    });
    Effect::new(move |_| {
        if !open.get() && service.with_untracked(Option::is_some) {
            service.set(None);
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    {move || service.get().map(|s| view! {
                        <DialogTitle>{s.title}</DialogTitle>
                        <DialogContent>
                            <p class="service-detail__lead">{s.full_description}</p>
                            <ul class="service-detail__list">
                                {s.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                            </ul>
                        </DialogContent>
                    })}
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
