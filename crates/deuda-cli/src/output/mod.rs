use deuda_core::ChartData;
use deuda_core::chart::ChartPoint;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.severity_color,
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_object_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a chart. Tables lay periods out as rows and series as columns.
pub fn render_chart(chart: &ChartData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_chart_table(
            chart,
            table_options(),
            ui::prefs().chart_title,
        )),
        OutputFormat::Json | OutputFormat::Raw => render(chart, format),
    }
}

pub fn output_chart(chart: &ChartData, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_chart(chart, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_chart_table(chart: &ChartData, options: table::TableOptions, title: bool) -> String {
    let mut lines = Vec::with_capacity(2);
    if title {
        lines.push(format!("{} ({})", chart.display_name, chart.identification));
    }
    if chart.series.is_empty() {
        lines.push("(no active debt)".to_string());
        return lines.join("\n");
    }

    let mut headers = vec!["period"];
    headers.extend(chart.series.iter().map(|s| s.name.as_str()));

    let rows = chart
        .period_axis
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let mut row = vec![label.clone()];
            row.extend(
                chart
                    .series
                    .iter()
                    .map(|s| s.points.get(index).map_or_else(|| "-".to_string(), point_cell)),
            );
            row
        })
        .collect::<Vec<_>>();

    lines.push(table::render_table(&headers, &rows, options));
    lines.join("\n")
}

/// `amount (situation)`, `*` when under review, `!` when in litigation.
fn point_cell(point: &ChartPoint) -> String {
    let Some(value) = point.value else {
        return "-".to_string();
    };
    let mut cell = match point.situation {
        Some(situation) => format!("{value:.2} ({situation})"),
        None => format!("{value:.2}"),
    };
    if point.under_review {
        cell.push('*');
    }
    if point.in_litigation {
        cell.push('!');
    }
    cell
}

fn render_object_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_table(&headers, &rows, options))
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
