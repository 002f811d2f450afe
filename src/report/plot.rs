//! SVG line chart of benchmark samples.
//!
//! Plots sample size against seconds for the insert and search batches:
//! insert as a solid line with circle markers, search as a dashed line with
//! square markers, on a grid with a legend. The output is plain SVG text.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::ReportResult;
use crate::benchmark::BenchmarkSample;
use crate::error::report::ReportError;

/// Chart title used by the report writer.
pub const DEFAULT_TITLE: &str = "Ternary Search Tree Performance";

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

const INSERT_COLOR: &str = "#1f77b4";
const SEARCH_COLOR: &str = "#ff7f0e";

/// Linear mapping from data space to pixel space.
struct Axes {
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Axes {
    fn fit(samples: &[BenchmarkSample]) -> Self {
        let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
        let mut y_max: f64 = 0.0;
        for sample in samples {
            let x = sample.sample_size as f64;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(sample.insert_secs).max(sample.search_secs);
        }

        if samples.is_empty() {
            x_min = 0.0;
            x_max = 1.0;
        } else if x_max <= x_min {
            // A single sample size still needs a non-empty x range.
            x_min -= 1.0;
            x_max += 1.0;
        }

        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

        Self { x_min, x_max, y_max }
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, value: f64) -> f64 {
        MARGIN_LEFT + (value - self.x_min) / (self.x_max - self.x_min) * Self::plot_width()
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + Self::plot_height() - value / self.y_max * Self::plot_height()
    }
}

/// Renders samples as an SVG document.
pub fn render_svg(samples: &[BenchmarkSample], title: &str) -> String {
    let axes = Axes::fit(samples);
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="20" text-anchor="middle">{}</text>"#,
        WIDTH / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        escape(title)
    );

    write_grid(&mut svg, &axes);
    write_axes(&mut svg);

    write_series(&mut svg, &axes, samples, Series::Insert);
    write_series(&mut svg, &axes, samples, Series::Search);
    write_legend(&mut svg);

    svg.push_str("</svg>\n");
    svg
}

/// Renders samples and writes the SVG document to `path`.
pub fn write_svg(samples: &[BenchmarkSample], title: &str, path: &Path) -> ReportResult<()> {
    fs::write(path, render_svg(samples, title)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Clone, Copy)]
enum Series {
    Insert,
    Search,
}

impl Series {
    fn label(self) -> &'static str {
        match self {
            Series::Insert => "Insert Time",
            Series::Search => "Search Time",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Series::Insert => INSERT_COLOR,
            Series::Search => SEARCH_COLOR,
        }
    }

    fn dash(self) -> &'static str {
        match self {
            Series::Insert => "",
            Series::Search => r#" stroke-dasharray="8 5""#,
        }
    }

    fn value(self, sample: &BenchmarkSample) -> f64 {
        match self {
            Series::Insert => sample.insert_secs,
            Series::Search => sample.search_secs,
        }
    }

    fn marker(self, svg: &mut String, x: f64, y: f64) {
        let _ = match self {
            Series::Insert => writeln!(
                svg,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="{}"/>"#,
                self.color()
            ),
            Series::Search => writeln!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="8" height="8" fill="{}"/>"#,
                x - 4.0,
                y - 4.0,
                self.color()
            ),
        };
    }
}

fn write_grid(svg: &mut String, axes: &Axes) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    for i in 0..=TICKS {
        let fraction = i as f64 / TICKS as f64;

        let y_value = axes.y_max * fraction;
        let y = axes.y(y_value);
        let _ = writeln!(
            svg,
            r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" font-size="12" text-anchor="end">{}</text>"#,
            left - 8.0,
            y + 4.0,
            format_seconds(y_value)
        );

        let x_value = axes.x_min + (axes.x_max - axes.x_min) * fraction;
        let x = axes.x(x_value);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{}" font-size="12" text-anchor="middle">{}</text>"#,
            bottom + 20.0,
            x_value.round()
        );
    }
}

fn write_axes(svg: &mut String) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="14" text-anchor="middle">Number of Words</text>"#,
        (left + right) / 2.0,
        HEIGHT - 20.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{0}" font-size="14" text-anchor="middle" transform="rotate(-90 20 {0})">Time (seconds)</text>"#,
        (top + bottom) / 2.0
    );
}

fn write_series(svg: &mut String, axes: &Axes, samples: &[BenchmarkSample], series: Series) {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|sample| (axes.x(sample.sample_size as f64), axes.y(series.value(sample))))
        .collect();

    let path = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = writeln!(
        svg,
        r#"<polyline class="{}" points="{path}" fill="none" stroke="{}" stroke-width="2"{}/>"#,
        series.label(),
        series.color(),
        series.dash()
    );
    for (x, y) in points {
        series.marker(svg, x, y);
    }
}

fn write_legend(svg: &mut String) {
    let x = MARGIN_LEFT + 20.0;
    for (row, series) in [Series::Insert, Series::Search].into_iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + row as f64 * 22.0;
        let _ = writeln!(
            svg,
            r#"<line x1="{x}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="2"{}/>"#,
            x + 30.0,
            series.color(),
            series.dash()
        );
        series.marker(svg, x + 15.0, y);
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="13">{}</text>"#,
            x + 40.0,
            y + 4.0,
            series.label()
        );
    }
}

fn format_seconds(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value >= 0.01 {
        format!("{value:.3}")
    } else {
        format!("{value:.2e}")
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(size: usize, insert_secs: f64, search_secs: f64) -> BenchmarkSample {
        BenchmarkSample {
            sample_size: size,
            insert_secs,
            search_secs,
            words_stored: size,
            nodes: size * 3,
        }
    }

    #[test]
    fn test_render_contains_both_series() {
        let samples = vec![sample(500, 0.001, 0.0005), sample(1000, 0.002, 0.001)];
        let svg = render_svg(&samples, DEFAULT_TITLE);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(DEFAULT_TITLE));
        assert!(svg.contains("Number of Words"));
        assert!(svg.contains("Time (seconds)"));
        assert!(svg.contains(r#"class="Insert Time""#));
        assert!(svg.contains(r#"class="Search Time""#));
        assert!(svg.contains("stroke-dasharray"));
        // Two data markers plus one legend marker per series.
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches(r#"width="8" height="8""#).count(), 3);
    }

    #[test]
    fn test_single_sample_and_zero_times() {
        let svg = render_svg(&[sample(10, 0.0, 0.0)], "t");
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_title_is_escaped() {
        let svg = render_svg(&[sample(1, 1.0, 1.0)], "a < b & c");
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(0.5), "0.500");
        assert_eq!(format_seconds(0.00123), "1.23e-3");
    }
}
