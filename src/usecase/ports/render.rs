use crate::domain::entities::customer::CustomerRecord;
use crate::domain::entities::pagination::PageControl;

/// Surface the pager draws into. Implementations replace whatever they
/// showed before on every call.
pub trait RenderTarget {
    fn draw_rows(&mut self, rows: &[CustomerRecord]);
    fn draw_controls(&mut self, controls: &[PageControl]);
    fn draw_data_info(&mut self, text: &str);
}
