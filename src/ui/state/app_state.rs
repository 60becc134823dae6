use dioxus::prelude::*;

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::pagination::PageControl;
use crate::usecase::ports::render::RenderTarget;
use crate::usecase::services::pager_service::PagerService;

#[derive(Clone, Copy)]
pub struct AppState {
    pub rows: Signal<Vec<CustomerRecord>>,
    pub controls: Signal<Vec<PageControl>>,
    pub data_info: Signal<String>,
    pub status: Signal<Option<String>>,
}

impl AppState {
    /// Signals start out holding the pager's current views.
    pub fn new(pager: &PagerService) -> Self {
        Self {
            rows: use_signal(|| pager.visible_slice().to_vec()),
            controls: use_signal(|| pager.page_controls()),
            data_info: use_signal(|| pager.display_range_text()),
            status: use_signal(|| None::<String>),
        }
    }
}

impl RenderTarget for AppState {
    fn draw_rows(&mut self, rows: &[CustomerRecord]) {
        *self.rows.write() = rows.to_vec();
    }

    fn draw_controls(&mut self, controls: &[PageControl]) {
        *self.controls.write() = controls.to_vec();
    }

    fn draw_data_info(&mut self, text: &str) {
        *self.data_info.write() = text.to_string();
    }
}
