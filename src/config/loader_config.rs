use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LoaderConfig {
    Csv {
        output_dir: PathBuf,
        #[serde(default)]
        create_dir: bool,
        #[serde(default)]
        file_name: Option<String>,
    },
}
