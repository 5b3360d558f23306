//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded from its CDN at startup unless the host page already
//! provides it. Figures arrive as Plotly `{ data, layout }` JSON built by
//! `gm_engine::figure` and are drawn with `Plotly.react`, which diffs against
//! whatever the container already shows.

/// Plotly.js bundle injected when `window.Plotly` is missing.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load Plotly.js if needed and flag readiness once it is defined.
///
/// Call once at app startup. Renders issued before Plotly is ready wait on
/// `window.__gmChartsReady`.
pub fn init_charts() {
    call_js(&format!(
        r#"
        (function() {{
            if (typeof Plotly === 'undefined' && !document.getElementById('gm-plotly-js')) {{
                var s = document.createElement('script');
                s.id = 'gm-plotly-js';
                s.src = '{PLOTLY_CDN_URL}';
                document.head.appendChild(s);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__gmChartsReady = true;
                    console.log('GM charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a Plotly figure into `container_id`.
///
/// Uses a polling loop to wait for Plotly.js and the container DOM element
/// before rendering.
pub fn render_figure(container_id: &str, figure_json: &str) {
    // JSON is a valid JS expression, so the figure is inlined as an object literal.
    call_js(&format!(
        r#"
        (function() {{
            var fig = {figure_json};
            var poll = setInterval(function() {{
                if (window.__gmChartsReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        Plotly.react('{container_id}', fig.data, fig.layout, {{ responsive: true }});
                    }} catch(e) {{ console.error('[GM] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el && window.Plotly) Plotly.purge(el);",
        container_id
    ));
}
