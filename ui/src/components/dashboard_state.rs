use dioxus::prelude::*;

use revdash_common::filter::FilterDraft;
use revdash_common::style::TypeStyleMap;

/// Dashboard view state shared between the page and the filter sheet.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub filters: FilterDraft,
    pub styles: TypeStyleMap,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn use_dashboard_state() -> Signal<DashboardState> {
    use_context::<Signal<DashboardState>>()
}
