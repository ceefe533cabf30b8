/// Default output directory for exported charts.
#[must_use]
pub fn default_charts_path() -> String {
    "airscope-charts".to_owned()
}
