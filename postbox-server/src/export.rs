//! CSV export of feedback records.
//!
//! Four fixed columns with RFC 4180 quoting; small enough that a serializer
//! crate is not warranted.

use crate::models::FeedbackRecord;

/// Header row, matching the columns of the feedback table.
pub const CSV_HEADER: &str = "ID,Name,Message,Is Read";

/// Render records (already ordered oldest-first by the store) as CSV.
/// Anonymous entries get an empty name field.
pub fn to_csv(records: &[FeedbackRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push_str("\r\n");

    for record in records {
        out.push_str(&record.id.to_string());
        out.push(',');
        out.push_str(&escape(record.name.as_deref().unwrap_or("")));
        out.push(',');
        out.push_str(&escape(&record.message));
        out.push(',');
        out.push_str(if record.is_read { "true" } else { "false" });
        out.push_str("\r\n");
    }

    out
}

/// Quote a field when it contains a comma, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: Option<&str>, message: &str, is_read: bool) -> FeedbackRecord {
        FeedbackRecord {
            id,
            name: name.map(str::to_owned),
            message: message.to_owned(),
            is_read,
        }
    }

    #[test]
    fn empty_export_is_just_the_header() {
        assert_eq!(to_csv(&[]), "ID,Name,Message,Is Read\r\n");
    }

    #[test]
    fn rows_follow_the_header_in_order() {
        let csv = to_csv(&[
            record(1, Some("Alice"), "Nice!", false),
            record(2, None, "Thanks!", true),
        ]);

        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "ID,Name,Message,Is Read");
        assert_eq!(lines[1], "1,Alice,Nice!,false");
        assert_eq!(lines[2], "2,,Thanks!,true");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let csv = to_csv(&[record(7, Some("A, B"), "said \"wow\"\nand left", false)]);

        assert!(csv.contains("\"A, B\""));
        assert!(csv.contains("\"said \"\"wow\"\"\nand left\""));
    }

    #[test]
    fn plain_fields_are_left_bare() {
        assert_eq!(escape("Great class!"), "Great class!");
    }
}
