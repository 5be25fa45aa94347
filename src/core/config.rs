use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Settings shared by the PDF and DOCX exporters.
///
/// Leaving `issue_date` and `generated_at` unset stamps the output with the
/// current date/time; fixing them makes exports reproducible byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Document title printed at the top.
    pub title: String,
    /// Watermark text drawn once per document.
    pub watermark: String,
    /// Producer name written into DOCX document properties.
    pub application: String,
    /// Date printed in the `Date:` header line.
    pub issue_date: Option<NaiveDate>,
    /// Creation/modification timestamp for DOCX core properties.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Purchase Order".into(),
            watermark: "Generated with Docu Builder Kit · Free Plan".into(),
            application: "Docu Builder Kit".into(),
            issue_date: None,
            generated_at: None,
        }
    }
}

impl ExportConfig {
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = text.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The issue date, defaulting to today in local time.
    pub fn resolved_issue_date(&self) -> NaiveDate {
        self.issue_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// The generation timestamp, defaulting to now.
    pub fn resolved_generated_at(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }

    /// `Date:` header text, US style (`6/15/2024`).
    pub fn display_date(&self) -> String {
        self.resolved_issue_date().format("%-m/%-d/%Y").to_string()
    }

    /// W3CDTF timestamp for document properties (`2024-06-15T09:30:00Z`).
    pub fn timestamp(&self) -> String {
        self.resolved_generated_at()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
