// Loading the URL table

use crate::error::{CheckError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header of the column holding the URLs to check.
pub const URL_COLUMN: &str = "URL";

/// Read the `URL` column of a CSV table, in row order.
///
/// Other columns are ignored. Values are passed through as-is: duplicates
/// and malformed URLs are kept, and a short row yields an empty string.
pub fn read_urls<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let column = csv_reader
        .headers()?
        .iter()
        .position(|header| header == URL_COLUMN)
        .ok_or_else(|| CheckError::MissingColumn(URL_COLUMN.to_string()))?;

    let mut urls = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        urls.push(record.get(column).unwrap_or_default().to_string());
    }

    debug!("Loaded {} URLs", urls.len());
    Ok(urls)
}

/// Load URLs from a CSV file on disk.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| CheckError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    read_urls(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_url_column_in_order() {
        let table = "URL\nhttps://a.example\nhttps://b.example/path\n";
        let urls = read_urls(table.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.example", "https://b.example/path"]);
    }

    #[test]
    fn test_ignores_other_columns() {
        let table = "Owner,URL,Notes\nops,https://a.example,prod\nqa,https://b.example,\n";
        let urls = read_urls(table.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_keeps_duplicates_and_junk() {
        let table = "URL\nhttps://a.example\nhttps://a.example\nnot a url\n";
        let urls = read_urls(table.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.example", "https://a.example", "not a url"]);
    }

    #[test]
    fn test_missing_column_is_configuration_error() {
        let table = "Website\nhttps://a.example\n";
        let err = read_urls(table.as_bytes()).unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn(ref c) if c == "URL"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_column_name_is_case_sensitive() {
        let table = "url\nhttps://a.example\n";
        assert!(matches!(
            read_urls(table.as_bytes()),
            Err(CheckError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_header_only_gives_no_urls() {
        let urls = read_urls("URL\n".as_bytes()).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_quoted_values() {
        let table = "URL,Notes\n\"https://a.example/?q=1,2\",x\n";
        let urls = read_urls(table.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.example/?q=1,2"]);
    }

    #[test]
    fn test_short_row_yields_empty_url() {
        let table = "Owner,URL\nops\n";
        let urls = read_urls(table.as_bytes()).unwrap();
        assert_eq!(urls, vec![""]);
    }
}
