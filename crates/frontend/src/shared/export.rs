/// Выгрузка списков админки в CSV (кнопка "Export Data")
use contracts::domain::a001_inquiry::Inquiry;
use contracts::domain::a002_customer::Customer;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::date_utils::format_datetime;

/// Trait для записей, которые можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения одной строки, в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for Inquiry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Phone", "Service", "Status", "Date", "Description"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.service.clone(),
            self.status.label().to_string(),
            format_datetime(&self.submitted_at),
            self.description.clone(),
        ]
    }
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec![
            "Name",
            "Email",
            "Phone",
            "Username",
            "Address",
            "Date Created",
            "Status",
            "Inquiries",
            "Completed Jobs",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.username.clone(),
            self.address.clone(),
            format_datetime(&self.created_at),
            self.status.label().to_string(),
            self.inquiry_count.to_string(),
            self.jobs_completed.to_string(),
        ]
    }
}

/// Builds the CSV text: header line plus one line per record, comma separated.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(","));
        csv_content.push('\n');
    }
    csv_content
}

/// Выгружает записи в CSV файл и инициирует скачивание
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Скачивание через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_inquiry::seed_inquiries;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a, b"), "\"a, b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_build_csv_inquiries() {
        let inquiries = seed_inquiries();
        let csv = build_csv(&inquiries[..1]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Name,Email,Phone,Service,Status,Date,Description")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,John Doe,john.doe@example.com,555-123-4567,PC Troubleshooting,New,"));
        assert!(row.contains("\"Apr 7, 2023, 2:30 PM\""));
        assert_eq!(lines.next(), None);
    }
}
