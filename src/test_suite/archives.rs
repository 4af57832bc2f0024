use polars::io::SerReader;
use polars::prelude::{CsvReadOptions, DataFrame};
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes `content` as the single CSV member of a zip archive named `name`.
pub(crate) fn write_zipped_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let member = format!("{}.csv", name.trim_end_matches(".zip"));
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file(member, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(content.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

pub(crate) fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    path
}

/// Parses CSV text the way extracts are read: header row, every column as text.
pub(crate) fn frame_from_csv(content: &str) -> DataFrame {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()
        .unwrap()
}

pub(crate) fn csv_line(values: &[Option<String>]) -> String {
    values
        .iter()
        .map(|value| value.clone().unwrap_or_default())
        .collect::<Vec<String>>()
        .join(",")
}
