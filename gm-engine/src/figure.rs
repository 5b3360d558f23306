//! Plotly.js figure translation.
//!
//! Turns a [`ChartSpec`] into the `{ data, layout }` object `Plotly.react`
//! expects. Categorical color channels become one trace per country (in
//! order of first appearance); metric color channels become a single trace
//! with a continuous colorscale.

use gm_data::Record;
use serde_json::{json, Map, Value};

use crate::spec::{ChartSpec, Field, Mark};

/// Largest bubble diameter in pixels.
const MAX_MARKER_SIZE: f64 = 20.0;
const CONTINUOUS_COLORSCALE: &str = "Plasma";

/// Build a Plotly figure for `spec`, `height` pixels tall.
pub fn to_plotly(spec: &ChartSpec, height: u32) -> Value {
    let enc = &spec.encoding;
    let groups = split_by_color(&spec.data, enc.color);
    let sizeref = enc.size.map(|f| size_ref(&spec.data, f));

    let traces: Vec<Value> = match enc.mark {
        Mark::Choropleth => vec![choropleth_trace(spec)],
        _ => groups
            .iter()
            .map(|(name, rows)| xy_trace(spec, name.as_deref(), rows, sizeref))
            .collect(),
    };

    json!({
        "data": traces,
        "layout": layout(spec, height),
    })
}

/// Partition rows by a categorical color field; one unnamed group otherwise.
fn split_by_color<'a>(data: &'a [Record], color: Option<Field>) -> Vec<(Option<String>, Vec<&'a Record>)> {
    match color {
        Some(field) if field.is_categorical() => {
            let mut groups: Vec<(Option<String>, Vec<&Record>)> = Vec::new();
            for r in data {
                let key = category(r, field);
                match groups.iter_mut().find(|(name, _)| name.as_deref() == Some(key)) {
                    Some((_, rows)) => rows.push(r),
                    None => groups.push((Some(key.to_string()), vec![r])),
                }
            }
            groups
        }
        _ => vec![(None, data.iter().collect())],
    }
}

fn category(r: &Record, field: Field) -> &str {
    match field {
        Field::IsoCode => &r.iso_alpha,
        _ => &r.country,
    }
}

fn value_of(r: &Record, field: Field) -> Value {
    match field {
        Field::Entity => json!(r.country),
        Field::Year => json!(r.year),
        Field::IsoCode => json!(r.iso_alpha),
        Field::Count => Value::Null,
        Field::Metric(m) => r.metric(m).map(|v| json!(v)).unwrap_or(Value::Null),
    }
}

fn column(rows: &[&Record], field: Field) -> Vec<Value> {
    rows.iter().map(|r| value_of(r, field)).collect()
}

/// Area sizing reference so the largest value is drawn `MAX_MARKER_SIZE` wide.
fn size_ref(data: &[Record], field: Field) -> f64 {
    let max = data
        .iter()
        .filter_map(|r| match field {
            Field::Metric(m) => r.metric(m),
            _ => None,
        })
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        2.0 * max / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
    } else {
        1.0
    }
}

fn continuous_color(marker: &mut Map<String, Value>, rows: &[&Record], field: Field) {
    marker.insert("color".into(), Value::Array(column(rows, field)));
    marker.insert("colorscale".into(), json!(CONTINUOUS_COLORSCALE));
    marker.insert("showscale".into(), json!(true));
    marker.insert("colorbar".into(), json!({ "title": { "text": field.key() } }));
}

fn xy_trace(spec: &ChartSpec, name: Option<&str>, rows: &[&Record], sizeref: Option<f64>) -> Value {
    let enc = &spec.encoding;
    let mut trace = Map::new();
    let mut marker = Map::new();

    let kind = match enc.mark {
        Mark::Bar => "bar",
        Mark::Histogram => "histogram",
        Mark::Box => "box",
        _ => "scatter",
    };
    trace.insert("type".into(), json!(kind));
    match enc.mark {
        Mark::Scatter => {
            trace.insert("mode".into(), json!("markers"));
        }
        Mark::Line => {
            let mode = if enc.markers { "lines+markers" } else { "lines" };
            trace.insert("mode".into(), json!(mode));
        }
        _ => {}
    }

    if let Some(x) = enc.x {
        trace.insert("x".into(), Value::Array(column(rows, x.field)));
        if let Some(bins) = x.bins {
            trace.insert("nbinsx".into(), json!(bins));
        }
    }
    if let Some(y) = enc.y {
        if y.field != Field::Count {
            trace.insert("y".into(), Value::Array(column(rows, y.field)));
        }
    }
    if let Some(hover) = enc.hover_name {
        trace.insert("hovertext".into(), Value::Array(column(rows, hover)));
    }
    if let (Some(size), Some(sizeref)) = (enc.size, sizeref) {
        marker.insert("size".into(), Value::Array(column(rows, size)));
        marker.insert("sizemode".into(), json!("area"));
        marker.insert("sizeref".into(), json!(sizeref));
    }
    if let Some(color) = enc.color.filter(|c| !c.is_categorical()) {
        continuous_color(&mut marker, rows, color);
    }
    match name {
        Some(name) => {
            trace.insert("name".into(), json!(name));
            trace.insert("legendgroup".into(), json!(name));
            trace.insert("showlegend".into(), json!(true));
        }
        None => {
            trace.insert("showlegend".into(), json!(false));
        }
    }
    if !marker.is_empty() {
        trace.insert("marker".into(), Value::Object(marker));
    }
    Value::Object(trace)
}

fn choropleth_trace(spec: &ChartSpec) -> Value {
    let enc = &spec.encoding;
    let rows: Vec<&Record> = spec.data.iter().collect();
    let location = enc.location.unwrap_or(Field::IsoCode);
    let mut trace = json!({
        "type": "choropleth",
        "locations": column(&rows, location),
        "colorscale": CONTINUOUS_COLORSCALE,
    });
    if let Some(color) = enc.color {
        trace["z"] = Value::Array(column(&rows, color));
        trace["colorbar"] = json!({ "title": { "text": color.key() } });
    }
    if let Some(hover) = enc.hover_name {
        trace["hovertext"] = Value::Array(column(&rows, hover));
    }
    trace
}

fn axis_layout(title: &str, log: bool) -> Value {
    let mut axis = json!({ "title": { "text": title } });
    if log {
        axis["type"] = json!("log");
    }
    axis
}

fn layout(spec: &ChartSpec, height: u32) -> Value {
    let enc = &spec.encoding;
    let mut layout = json!({ "height": height });

    if let Some(title) = &spec.title {
        layout["title"] = json!({ "text": title });
    }
    if let Some(x) = enc.x {
        layout["xaxis"] = axis_layout(x.field.key(), enc.log_x());
    }
    if let Some(y) = enc.y {
        layout["yaxis"] = axis_layout(y.field.key(), false);
    }
    if let Some(color) = enc.color.filter(|c| c.is_categorical()) {
        layout["legend"] = json!({ "title": { "text": color.key() } });
    }
    if enc.mark == Mark::Histogram {
        layout["barmode"] = json!("relative");
    }
    if let Some(projection) = enc.projection {
        layout["geo"] = json!({ "projection": { "type": projection.key() } });
    }
    layout
}
