use std::sync::Arc;

use dioxus::logger::tracing::{debug, warn};

use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::pagination::{
    display_range, navigate, page_controls, step_target, visible_range, PageControl, PagerConfig,
    PagerState, StepDirection,
};
use crate::domain::error::CrmError;
use crate::usecase::ports::render::RenderTarget;

/// Sole owner of the pager state over an immutable dataset.
#[derive(Debug, Clone)]
pub struct PagerService {
    customers: Arc<[CustomerRecord]>,
    state: PagerState,
}

impl PagerService {
    pub fn new(
        config: PagerConfig,
        customers: impl Into<Arc<[CustomerRecord]>>,
    ) -> Result<Self, CrmError> {
        let state = PagerState::new(config)?;
        let customers = customers.into();
        let expected = usize::try_from(state.total_entries()).unwrap_or(usize::MAX);
        if customers.len() != expected {
            return Err(CrmError::InvalidConfiguration(format!(
                "dataset has {} records but total_entries is {}",
                customers.len(),
                state.total_entries()
            )));
        }
        Ok(Self { customers, state })
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    #[cfg(test)]
    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn visible_slice(&self) -> &[CustomerRecord] {
        &self.customers[visible_range(&self.state)]
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        page_controls(&self.state)
    }

    pub fn display_range_text(&self) -> String {
        display_range(&self.state).to_string()
    }

    /// Moves to `page`. Out-of-range targets are rejected and leave the
    /// current page untouched.
    pub fn navigate(&mut self, page: i64) -> Result<(), CrmError> {
        match navigate(&self.state, page) {
            Ok(next) => {
                debug!(
                    from = self.state.current_page(),
                    to = page,
                    "navigating customer table"
                );
                self.state = next;
                Ok(())
            }
            Err(err) => {
                warn!(page, "rejected navigation: {err}");
                Err(err)
            }
        }
    }

    pub fn step_target(&self, direction: StepDirection) -> Option<i64> {
        step_target(&self.state, direction)
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        target.draw_rows(self.visible_slice());
        target.draw_controls(&self.page_controls());
        target.draw_data_info(&self.display_range_text());
    }

    /// Navigates and redraws `target`; nothing is drawn when navigation fails.
    pub fn navigate_and_render(
        &mut self,
        page: i64,
        target: &mut dyn RenderTarget,
    ) -> Result<(), CrmError> {
        self.navigate(page)?;
        self.render(target);
        Ok(())
    }
}
