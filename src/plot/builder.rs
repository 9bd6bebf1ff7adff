use super::{Axis, Layout, Marker, MarkerColor, Mode, PlotSpec, Series, SeriesType, Title};
use crate::core::Politician;

pub const PLOT_TITLE: &str =
    "Correlation between Computed Stance Score and Age (+ stance score means better approval of crypto)";
pub const X_AXIS_TITLE: &str = "Age";
pub const Y_AXIS_TITLE: &str = "Computed Stance Score";

/// Red for Republicans, blue for everyone else.
pub fn point_color(politician: &Politician) -> MarkerColor {
    if politician.is_republican() {
        MarkerColor::Red
    } else {
        MarkerColor::Blue
    }
}

fn politician_series(politician: &Politician) -> Option<Series> {
    let score = politician.computed_stance_score?;
    let Some(age) = politician.age else {
        log::debug!(
            "{} has a stance score but no age, leaving it off the plot",
            politician.display_name()
        );
        return None;
    };

    Some(Series {
        name: politician.display_name(),
        x: vec![f64::from(age)],
        y: vec![score],
        mode: Mode::Markers,
        series_type: SeriesType::Scatter,
        marker: Marker {
            color: point_color(politician),
        },
    })
}

/// One single-point series per politician with both an age and a stance score.
pub fn build_stance_plot(politicians: &[Politician]) -> PlotSpec {
    PlotSpec {
        data: politicians.iter().filter_map(politician_series).collect(),
        layout: Layout {
            title: Title::new(PLOT_TITLE),
            xaxis: Axis {
                title: Title::new(X_AXIS_TITLE),
            },
            yaxis: Axis {
                title: Title::new(Y_AXIS_TITLE),
            },
            show_legend: false,
        },
    }
}
