//! Analytics Text Report
//!
//! Plain-text export of the current aggregates, downloaded through a Blob URL.

use chrono::{DateTime, Utc};
use wasm_bindgen::{JsCast, JsValue};

use crate::format::percent;
use crate::models::Analytics;

pub fn build_report(analytics: &Analytics, generated_at: DateTime<Utc>) -> String {
    format!(
        "TaskLift Analytics Report
Generated: {generated}

TASK STATISTICS:
- Total Tasks: {total}
- Completed Tasks: {completed}
- Pending Tasks: {pending}
- High Priority Tasks: {high}
- Completion Rate: {rate}

PROJECT STATISTICS:
- Total Projects: {projects}
- Active Projects: {active}
",
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        total = analytics.total_tasks,
        completed = analytics.completed_tasks,
        pending = analytics.pending(),
        high = analytics.high_priority_tasks,
        rate = percent(analytics.completion_rate, 1),
        projects = analytics.total_projects,
        active = analytics.active_projects,
    )
}

pub fn report_filename(generated_at: DateTime<Utc>) -> String {
    format!("tasklift-report-{}.txt", generated_at.format("%Y-%m-%d"))
}

/// Offer `text` as a file download via a temporary anchor.
pub fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_timestamp;

    #[test]
    fn test_report_lists_every_statistic() {
        let analytics = Analytics {
            total_tasks: 12,
            completed_tasks: 9,
            pending_tasks: None,
            high_priority_tasks: 4,
            total_projects: 3,
            active_projects: 2,
            completion_rate: 75.0,
        };
        let at = parse_timestamp("2024-05-02T08:30:00Z").unwrap();
        let report = build_report(&analytics, at);

        assert!(report.starts_with("TaskLift Analytics Report\nGenerated: 2024-05-02 08:30:00 UTC"));
        assert!(report.contains("- Total Tasks: 12\n"));
        assert!(report.contains("- Pending Tasks: 3\n"));
        assert!(report.contains("- High Priority Tasks: 4\n"));
        assert!(report.contains("- Completion Rate: 75.0%\n"));
        assert!(report.contains("- Active Projects: 2\n"));
        assert_eq!(report_filename(at), "tasklift-report-2024-05-02.txt");
    }
}
