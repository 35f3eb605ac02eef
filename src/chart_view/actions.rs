use super::RangeChartView;
use crate::panel::PanelEvent;
use crate::resizable_view::LayoutEvent;
use gpui::*;

actions!(
    instrument_ranges,
    [
        IncreaseRows,
        DecreaseRows,
        IncreaseColumns,
        DecreaseColumns,
        ClosePanel
    ]
);

#[derive(Clone)]
pub struct ChartActionHandler {
    pub view: WeakEntity<RangeChartView>,
}

impl ChartActionHandler {
    pub fn new(view: WeakEntity<RangeChartView>) -> Self {
        Self { view }
    }

    fn dispatch(&self, event: PanelEvent, cx: &mut App) {
        let _ = self.view.update(cx, |v, cx| v.apply(event, cx));
    }

    pub fn handle_increase_rows(&self, _: &IncreaseRows, _win: &mut Window, cx: &mut App) {
        self.dispatch(LayoutEvent::IncreaseRows.into(), cx);
    }

    pub fn handle_decrease_rows(&self, _: &DecreaseRows, _win: &mut Window, cx: &mut App) {
        self.dispatch(LayoutEvent::DecreaseRows.into(), cx);
    }

    pub fn handle_increase_columns(&self, _: &IncreaseColumns, _win: &mut Window, cx: &mut App) {
        self.dispatch(LayoutEvent::IncreaseColumns.into(), cx);
    }

    pub fn handle_decrease_columns(&self, _: &DecreaseColumns, _win: &mut Window, cx: &mut App) {
        self.dispatch(LayoutEvent::DecreaseColumns.into(), cx);
    }

    pub fn handle_close(&self, _: &ClosePanel, _win: &mut Window, cx: &mut App) {
        self.dispatch(PanelEvent::Close, cx);
    }
}
