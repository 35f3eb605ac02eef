use crate::data_types::InstrumentCategory;
use d3rs::color::ColorScheme;
use gpui::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub heading: Hsla,
    pub heading_size: Pixels,
    pub legend_label_size: Pixels,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,
    pub accent: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: rgb(0x1e1e1e).into(),
            grid_line: gpui::white().alpha(0.15),
            axis_line: gpui::white().alpha(0.4),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(11.0),
            heading: gpui::white(),
            heading_size: px(16.0),
            legend_label_size: px(13.0),
            tooltip_background: gpui::black().alpha(0.8),
            tooltip_text: gpui::white(),
            accent: rgb(0x4e79a7).into(),
        }
    }
}

/// Palette index of each category within the Tableau 10 scheme, in `InstrumentCategory::ALL` order.
const CATEGORY_PALETTE_INDEX: [usize; 5] = [2, 0, 1, 4, 3];

/// Fixed fill colour per instrument category, iterated in category order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryColorMap {
    colors: BTreeMap<InstrumentCategory, Hsla>,
}

impl CategoryColorMap {
    pub fn new(colors: impl IntoIterator<Item = (InstrumentCategory, Hsla)>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    pub fn get(&self, category: InstrumentCategory) -> Option<Hsla> {
        self.colors.get(&category).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstrumentCategory, Hsla)> + '_ {
        self.colors.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for CategoryColorMap {
    fn default() -> Self {
        let scheme = ColorScheme::tableau10();
        Self::new(
            InstrumentCategory::ALL
                .into_iter()
                .zip(CATEGORY_PALETTE_INDEX)
                .map(|(category, idx)| {
                    let color: Hsla = scheme.color(idx).to_rgba().into();
                    (category, color)
                }),
        )
    }
}
