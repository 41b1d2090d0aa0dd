use super::{
    repository::DashboardRepository,
    utils::{initial_range, DashboardKind, DashboardView},
};
use crate::{
    api::{ApiClient, ApiError, TimeRange},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub kind: DashboardKind,
    pub range: RwSignal<TimeRange>,
    pub resource: Resource<TimeRange, Result<DashboardView, ApiError>>,
}

impl DashboardViewModel {
    /// Latest loaded view, or the zeroed placeholder while nothing has loaded.
    pub fn view(&self) -> DashboardView {
        match self.resource.get() {
            Some(Ok(view)) => view,
            _ => DashboardView::placeholder(self.kind),
        }
    }

    pub fn error(&self) -> Option<ApiError> {
        self.resource.get().and_then(Result::err)
    }

    pub fn loading(&self) -> bool {
        self.resource.loading().get()
    }

    pub fn select_range(&self, range: TimeRange) {
        if self.range.get_untracked() != range {
            log::debug!("dashboard range changed to {}", range.as_query());
            self.range.set(range);
        }
    }

    pub fn retry(&self) {
        self.resource.refetch();
    }
}

pub fn use_dashboard_view_model(kind: DashboardKind) -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = DashboardRepository::new_with_client(Rc::new(api));
    let range = create_rw_signal(initial_range(
        navigation::query_param("range").as_deref(),
    ));

    let resource = create_local_resource(
        move || range.get(),
        move |range| {
            let repo = repo.clone();
            async move { load(&repo, kind, range).await }
        },
    );

    DashboardViewModel {
        kind,
        range,
        resource,
    }
}

pub async fn load(
    repo: &DashboardRepository,
    kind: DashboardKind,
    range: TimeRange,
) -> Result<DashboardView, ApiError> {
    let view = match kind {
        DashboardKind::Customer => DashboardView::from(&repo.load_user(range).await?),
        DashboardKind::Seller => DashboardView::from(&repo.load_seller(range).await?),
        DashboardKind::Admin => DashboardView::from(&repo.load_admin(range).await?),
    };
    Ok(view)
}
