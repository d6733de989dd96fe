use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

use super::ReportRow;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Export panel for the tabular report data: CSV and XLSX downloads plus a
/// JSON copy for quick sharing. Exports operate on the pre-grid rows, never
/// on the rendered matrix.
#[component]
pub fn ReportsExportPanel(rows: Vec<ReportRow>) -> Element {
    let total_days = rows.len();
    let total_tasks: f64 = rows.iter().map(|row| row.tasks).sum();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("report-export__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "report-export__meta report-export__meta--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "report-export__meta report-export__meta--error".to_string(),
            format!("Export failed: {err}"),
        )),
    };

    let csv_handler = {
        let export_rows = rows.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));
            let export_rows = export_rows.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_csv_export(export_rows).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_csv_export(export_rows));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    let xlsx_handler = {
        let export_rows = rows.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing XLSX"));
            let export_rows = export_rows.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_xlsx_export(export_rows).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_xlsx_export(export_rows));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    let json_handler = {
        let export_rows = rows.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing JSON"));
            let export_rows = export_rows.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_json_export(export_rows).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_json_export(export_rows));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        section { class: "report-export",
            div { class: "report-export__header",
                h2 { "Export" }
            }

            if total_days == 0 {
                p { class: "report-export__placeholder",
                    "Exports unlock once report data is loaded."
                }
            } else {
                ul { class: "report-export__summary",
                    li { strong { "{total_days}" } " days in window" }
                    li { strong { "{total_tasks:.0}" } " tasks total" }
                }

                div { class: "report-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: csv_handler,
                        "Export CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: xlsx_handler,
                        "Export Excel"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy(),
                        onclick: json_handler,
                        "Copy JSON"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_csv_export(rows: Vec<ReportRow>) -> Result<String, String> {
    let csv = build_csv(&rows);
    let filename = format!("pulsegrid-report-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

async fn perform_xlsx_export(rows: Vec<ReportRow>) -> Result<String, String> {
    let bytes = build_workbook(&rows)?;
    let filename = format!("pulsegrid-report-{}.xlsx", timestamp_slug());
    let delivery = download_bytes(
        &filename,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        bytes,
    )
    .await?;
    Ok(match delivery {
        Some(path) => format!("Workbook saved to {path}"),
        None => "Workbook download started".to_string(),
    })
}

async fn perform_json_export(rows: Vec<ReportRow>) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&rows).map_err(|err| err.to_string())?;
    copy_to_clipboard(json.clone()).await?;
    let filename = format!("pulsegrid-report-{}.json", timestamp_slug());
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("JSON copied and saved to {path}"),
        None => "JSON copied to clipboard and download started".to_string(),
    })
}

const CSV_HEADER: [&str; 4] = ["Date", "Tasks", "Hours", "Contents"];

fn build_csv(rows: &[ReportRow]) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.into_iter().map(String::from).collect());

    for row in rows {
        lines.push(vec![
            row.date.clone(),
            row.tasks.to_string(),
            row.hours.to_string(),
            row.contents.clone(),
        ]);
    }

    let mut csv = String::new();
    for line in lines {
        let rendered = line
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&rendered);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn build_workbook(rows: &[ReportRow]) -> Result<Vec<u8>, String> {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in CSV_HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|err| err.to_string())?;
    }

    for (index, row) in rows.iter().enumerate() {
        let excel_row = (index + 1) as u32;
        worksheet
            .write_string(excel_row, 0, &row.date)
            .map_err(|err| err.to_string())?;
        worksheet
            .write_number(excel_row, 1, row.tasks)
            .map_err(|err| err.to_string())?;
        worksheet
            .write_number(excel_row, 2, row.hours)
            .map_err(|err| err.to_string())?;
        worksheet
            .write_string(excel_row, 3, &row.contents)
            .map_err(|err| err.to_string())?;
    }

    workbook.save_to_buffer().map_err(|err| err.to_string())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "Pulsegrid", "Pulsegrid")
        .ok_or("Unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, tasks: f64, contents: &str) -> ReportRow {
        ReportRow {
            date: date.to_string(),
            tasks,
            hours: 6.5,
            contents: contents.to_string(),
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let csv = build_csv(&[row("2024-01-01", 3.0, "Bug Triage"), row("2024-01-02", 5.0, "")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Tasks,Hours,Contents");
        assert_eq!(lines[1], "2024-01-01,3,6.5,Bug Triage");
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let csv = build_csv(&[row("2024-01-01", 3.0, "Review PR, Bug Triage")]);
        assert!(csv.contains("\"Review PR, Bug Triage\""));
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn workbook_builds_for_plain_rows() {
        let bytes = build_workbook(&[row("2024-01-01", 3.0, "Bug Triage")]).unwrap();
        // XLSX is a zip container; check the magic instead of the full body.
        assert_eq!(&bytes[..2], b"PK");
    }
}
