use instrument_ranges::data_types::{DrawCommand, Margin, ResizeConfig, ViewportSize};
use instrument_ranges::theme::{CategoryColorMap, ChartTheme};
use instrument_ranges::utils::PixelsExt;
use instrument_ranges::{
    ChartConfig, InstrumentCategory, InstrumentRange, LayoutState, MidiNoteTable, RangeChart,
};
use d3rs::color::ColorScheme;
use gpui::Hsla;
use std::sync::Arc;
use std::time::Instant;

fn initialized_chart() -> RangeChart {
    let mut chart = RangeChart::new(
        &[InstrumentRange::new("Piano", InstrumentCategory::Keys, 21, 108)],
        Arc::new(MidiNoteTable::new()),
        ChartConfig::default(),
    );
    let layout = LayoutState::new(
        ViewportSize::new(1000.0, 500.0),
        Margin::range_chart(),
        ResizeConfig::default(),
    );
    chart.resize(&layout, Instant::now());
    chart
}

#[test]
fn test_legend_entries_in_category_order() {
    let chart = initialized_chart();
    let entries = chart.legend_entries();
    let categories: Vec<_> = entries.iter().map(|e| e.category).collect();
    assert_eq!(categories, InstrumentCategory::ALL.to_vec());

    // Evenly spread across the 800px drawable width, starting at the left margin
    let xs: Vec<_> = entries.iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![180.0, 340.0, 500.0, 660.0, 820.0]);
    assert!(entries.iter().all(|e| e.y == 45.0));
}

#[test]
fn test_legend_colors_match_bars() {
    let chart = initialized_chart();
    let keys = chart
        .legend_entries()
        .into_iter()
        .find(|e| e.category == InstrumentCategory::Keys)
        .expect("keys entry");
    assert_eq!(Some(keys.color), chart.bars()[0].fill);
}

#[test]
fn test_default_palette_assignment() {
    let colors = CategoryColorMap::default();
    let scheme = ColorScheme::tableau10();
    let tableau = |idx: usize| -> Hsla { scheme.color(idx).to_rgba().into() };
    assert_eq!(colors.len(), 5);
    assert_eq!(colors.get(InstrumentCategory::Keys), Some(tableau(0)));
    assert_eq!(colors.get(InstrumentCategory::Strings), Some(tableau(1)));
    assert_eq!(colors.get(InstrumentCategory::Brass), Some(tableau(2)));
    assert_eq!(colors.get(InstrumentCategory::Woodwind), Some(tableau(3)));
    assert_eq!(colors.get(InstrumentCategory::TunedPercussion), Some(tableau(4)));
    // Keys is the scheme's first colour, #4e79a7
    let keys: Hsla = gpui::rgb(0x4e79a7).into();
    let got = colors.get(InstrumentCategory::Keys).expect("keys colour");
    assert!((got.h - keys.h).abs() < 1e-3 && (got.l - keys.l).abs() < 1e-3);
}

#[test]
fn test_legend_labels_use_category_names() {
    let chart = initialized_chart();
    let legend = chart.render_legend();
    let labels: Vec<_> = DrawCommand::find_group(std::slice::from_ref(&legend), "legend")
        .expect("legend group")
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec!["Brass", "Keys", "Strings", "Tuned percussion", "Woodwind"]
    );
}

#[test]
fn test_legend_labels_sit_on_baseline() {
    let chart = initialized_chart();
    let size = ChartTheme::default().legend_label_size.as_f32();
    let legend = chart.render_legend();
    let centres: Vec<_> = DrawCommand::find_group(std::slice::from_ref(&legend), "legend")
        .expect("legend group")
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { origin, .. } => Some(origin.y),
            _ => None,
        })
        .collect();
    // Entries report the baseline; the text centre is half a font size above it
    assert!(chart.legend_entries().iter().all(|e| e.y == 45.0));
    assert!(centres.iter().all(|&y| (y - (45.0 - size / 2.0)).abs() < 1e-4));
}

#[test]
fn test_octave_gridlines() {
    let chart = initialized_chart();
    let theme = ChartTheme::default();
    let markers = chart.render_octave_gridlines();
    let children = DrawCommand::find_group(std::slice::from_ref(&markers), "octave-markers")
        .expect("marker group");
    assert_eq!(children.len(), 11);

    let x = &chart.transform().x_scale;
    for (k, marker) in children.iter().enumerate() {
        match marker {
            DrawCommand::Rect { bounds, fill, .. } => {
                assert!((bounds.origin.x - x.map((k * 12) as f64)).abs() < 1e-3);
                assert_eq!(bounds.origin.y, 0.0);
                assert_eq!(bounds.size.width, 1.0);
                assert_eq!(bounds.size.height, 400.0);
                assert_eq!(*fill, Some(theme.grid_line));
            }
            other => panic!("expected marker rect, got {other:?}"),
        }
    }
}

#[test]
fn test_gridlines_drawn_behind_and_over_bars() {
    let chart = initialized_chart();
    let frame = chart.frame(Instant::now());
    let names: Vec<_> = frame
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Group { name, .. } => Some(*name),
            _ => None,
        })
        .collect();
    assert_eq!(
        names,
        vec!["legend", "octave-markers", "x-axis", "y-axis", "bars", "octave-markers"]
    );
}
