//! Error types for `folio-core`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read catalog {path:?}: {source}")]
  CatalogIo {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed catalog: {0}")]
  CatalogParse(#[from] toml::de::Error),

  #[error("duplicate project id in catalog: {0:?}")]
  DuplicateProject(String),

  #[error("skill {name:?} has level {level}; levels are percentages")]
  SkillLevel { name: String, level: u8 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
