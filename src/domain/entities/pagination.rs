use std::ops::Range;

use crate::domain::error::CrmError;

pub const DEFAULT_TOTAL_ENTRIES: i64 = 320;
pub const DEFAULT_ENTRIES_PER_PAGE: i64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    pub total_entries: i64,
    pub entries_per_page: i64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            total_entries: DEFAULT_TOTAL_ENTRIES,
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
        }
    }
}

impl PagerConfig {
    pub fn validate(&self) -> Result<(), CrmError> {
        if self.total_entries < 0 {
            return Err(CrmError::InvalidConfiguration(format!(
                "total_entries must not be negative, got {}",
                self.total_entries
            )));
        }
        if self.entries_per_page <= 0 {
            return Err(CrmError::InvalidConfiguration(format!(
                "entries_per_page must be positive, got {}",
                self.entries_per_page
            )));
        }
        Ok(())
    }
}

/// Current position in the dataset. Only ever built from a validated
/// [`PagerConfig`] and moved by [`navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current_page: i64,
    entries_per_page: i64,
    total_entries: i64,
}

impl PagerState {
    pub fn new(config: PagerConfig) -> Result<Self, CrmError> {
        config.validate()?;
        Ok(Self {
            current_page: 1,
            entries_per_page: config.entries_per_page,
            total_entries: config.total_entries,
        })
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn total_entries(&self) -> i64 {
        self.total_entries
    }

    /// `ceil(total_entries / entries_per_page)`; zero for an empty dataset.
    pub fn total_pages(&self) -> i64 {
        let full = self.total_entries / self.entries_per_page;
        full + i64::from(self.total_entries % self.entries_per_page != 0)
    }

    /// Highest reachable page. An empty dataset still has page 1.
    pub fn last_page(&self) -> i64 {
        self.total_pages().max(1)
    }

    pub fn contains_page(&self, page: i64) -> bool {
        (1..=self.last_page()).contains(&page)
    }
}

fn to_index(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Row indices shown on the current page, clamped to the dataset length.
pub fn visible_range(state: &PagerState) -> Range<usize> {
    let start = (state.current_page - 1)
        .saturating_mul(state.entries_per_page)
        .min(state.total_entries);
    let end = start
        .saturating_add(state.entries_per_page)
        .min(state.total_entries);
    to_index(start)..to_index(end)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    /// Zero-based index of the first row on the page.
    pub start: i64,
    /// Nominal end, `start + entries_per_page`, never clamped to `total`.
    pub end: i64,
    pub total: i64,
}

impl std::fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing data {} to {} of {} entries",
            self.start + 1,
            self.end,
            self.total
        )
    }
}

pub fn display_range(state: &PagerState) -> DisplayRange {
    let start = (state.current_page - 1).saturating_mul(state.entries_per_page);
    DisplayRange {
        start,
        end: start.saturating_add(state.entries_per_page),
        total: state.total_entries,
    }
}

pub const NAV_BUTTON_CLASS: &str = "footer__nav-button";
pub const PAGE_BUTTON_CLASS: &str = "footer__page-button";
pub const ACTIVE_PAGE_BUTTON_CLASS: &str = "footer__page-button footer__page-button--active";
pub const DOTS_CLASS: &str = "pagination__dots";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageControl {
    NavPrev { enabled: bool },
    PageNumber { page: i64, is_active: bool },
    Ellipsis,
    NavNext { enabled: bool },
}

impl PageControl {
    pub fn label(&self) -> String {
        match self {
            PageControl::NavPrev { .. } => "<".to_string(),
            PageControl::NavNext { .. } => ">".to_string(),
            PageControl::PageNumber { page, .. } => page.to_string(),
            PageControl::Ellipsis => "...".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PageControl::NavPrev { .. } | PageControl::NavNext { .. } => NAV_BUTTON_CLASS,
            PageControl::PageNumber {
                is_active: true, ..
            } => ACTIVE_PAGE_BUTTON_CLASS,
            PageControl::PageNumber { .. } => PAGE_BUTTON_CLASS,
            PageControl::Ellipsis => DOTS_CLASS,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            PageControl::NavPrev { enabled } | PageControl::NavNext { enabled } => *enabled,
            PageControl::PageNumber { .. } => true,
            PageControl::Ellipsis => false,
        }
    }

    /// Page a click on this control navigates to, relative to `current_page`.
    pub fn target_page(&self, current_page: i64) -> Option<i64> {
        match self {
            PageControl::NavPrev { enabled: true } => Some(current_page - 1),
            PageControl::NavNext { enabled: true } => Some(current_page + 1),
            PageControl::PageNumber { page, .. } => Some(*page),
            _ => None,
        }
    }
}

/// Pagination bar for the current state: up to four consecutive pages
/// starting one before the current page, then a jump to the last page
/// once it sits more than three pages ahead.
pub fn page_controls(state: &PagerState) -> Vec<PageControl> {
    let current = state.current_page;
    let total = state.last_page();
    let mut controls = Vec::with_capacity(8);

    controls.push(PageControl::NavPrev {
        enabled: current > 1,
    });
    if current > 1 {
        controls.push(PageControl::PageNumber {
            page: current - 1,
            is_active: false,
        });
    }
    controls.push(PageControl::PageNumber {
        page: current,
        is_active: true,
    });
    if current < total {
        controls.push(PageControl::PageNumber {
            page: current + 1,
            is_active: false,
        });
    }
    if current + 1 < total {
        controls.push(PageControl::PageNumber {
            page: current + 2,
            is_active: false,
        });
    }
    if current + 2 < total - 1 {
        controls.push(PageControl::Ellipsis);
        controls.push(PageControl::PageNumber {
            page: total,
            is_active: false,
        });
    }
    controls.push(PageControl::NavNext {
        enabled: current < total,
    });

    controls
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}

/// Page the prev/next control for `direction` opens; `None` when that
/// control is disabled.
pub fn step_target(state: &PagerState, direction: StepDirection) -> Option<i64> {
    page_controls(state)
        .into_iter()
        .find(|control| {
            matches!(
                (direction, control),
                (StepDirection::Previous, PageControl::NavPrev { .. })
                    | (StepDirection::Next, PageControl::NavNext { .. })
            )
        })
        .and_then(|control| control.target_page(state.current_page))
}

pub fn navigate(state: &PagerState, page: i64) -> Result<PagerState, CrmError> {
    if !state.contains_page(page) {
        return Err(CrmError::InvalidNavigationTarget {
            page,
            last_page: state.last_page(),
        });
    }
    Ok(PagerState {
        current_page: page,
        ..*state
    })
}
