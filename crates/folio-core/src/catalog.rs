//! Static portfolio reference data: projects and skills.
//!
//! The catalog is loaded once at startup and shared read-only between
//! handlers. A built-in copy is compiled into the crate; deployments can
//! replace it with their own TOML file.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::{Error, Result};

/// The catalog shipped with the crate.
const BUILTIN: &str = include_str!("../data/catalog.toml");

// ─── Entries ─────────────────────────────────────────────────────────────────

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
  pub id:           String,
  pub title:        String,
  pub description:  String,
  pub technologies: Vec<String>,
  /// Serialised as `null` when the source is private.
  #[serde(default)]
  pub github_url:   Option<String>,
  #[serde(default)]
  pub live_url:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url:    Option<String>,
  pub category:     String,
}

/// A single skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
  pub name:  String,
  pub level: u8,
  pub years: u8,
}

/// A named group of skills, e.g. `frontend`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
  pub category: String,
  #[serde(default)]
  pub entries:  Vec<SkillEntry>,
}

// ─── Skill table ─────────────────────────────────────────────────────────────

/// Ordered mapping of category name to skills.
///
/// Serialises as a JSON object whose keys follow catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SkillTable(Vec<SkillCategory>);

impl SkillTable {
  pub fn get(&self, category: &str) -> Option<&[SkillEntry]> {
    self
      .0
      .iter()
      .find(|c| c.category == category)
      .map(|c| c.entries.as_slice())
  }

  pub fn categories(&self) -> impl Iterator<Item = &SkillCategory> {
    self.0.iter()
  }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl Serialize for SkillTable {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for category in &self.0 {
      map.serialize_entry(&category.category, &category.entries)?;
    }
    map.end()
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Everything the read-only endpoints serve.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
  /// Service identity reported by `GET /`.
  pub title:    String,
  #[serde(default)]
  pub projects: Vec<ProjectEntry>,
  #[serde(default)]
  pub skills:   SkillTable,
}

impl Catalog {
  /// The catalog compiled into this crate.
  pub fn builtin() -> Result<Self> { Self::from_toml(BUILTIN) }

  /// Read and parse a catalog file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::CatalogIo {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml(&text)
  }

  pub fn from_toml(text: &str) -> Result<Self> {
    let catalog: Self = toml::from_str(text)?;
    catalog.check()?;
    Ok(catalog)
  }

  pub fn project(&self, id: &str) -> Option<&ProjectEntry> {
    self.projects.iter().find(|p| p.id == id)
  }

  fn check(&self) -> Result<()> {
    let mut seen = HashSet::new();
    for project in &self.projects {
      if !seen.insert(project.id.as_str()) {
        return Err(Error::DuplicateProject(project.id.clone()));
      }
    }
    for skill in self.skills.categories().flat_map(|c| &c.entries) {
      if skill.level > 100 {
        return Err(Error::SkillLevel {
          name:  skill.name.clone(),
          level: skill.level,
        });
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn builtin_catalog_has_three_projects_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let ids: Vec<_> = catalog.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(catalog.title, "Diego Perez Portfolio API");
  }

  #[test]
  fn truckatlas_has_no_github_url() {
    let catalog = Catalog::builtin().unwrap();
    let truck = catalog.project("2").unwrap();
    assert_eq!(truck.title, "TruckAtlas");
    assert!(truck.github_url.is_none());

    let value = serde_json::to_value(truck).unwrap();
    assert_eq!(value["github_url"], serde_json::Value::Null);
    assert!(value.get("image_url").is_none());
  }

  #[test]
  fn frontend_skills_start_with_react() {
    let catalog = Catalog::builtin().unwrap();
    let frontend = catalog.skills.get("frontend").unwrap();
    assert_eq!(frontend[0], SkillEntry {
      name:  "React".into(),
      level: 95,
      years: 7,
    });
    assert_eq!(frontend.len(), 7);
  }

  #[test]
  fn skill_table_serialises_as_ordered_object() {
    let catalog = Catalog::builtin().unwrap();
    let value = serde_json::to_value(&catalog.skills).unwrap();
    assert_eq!(value["mobile"][1], json!({"name": "Flutter", "level": 65, "years": 2}));

    let text = serde_json::to_string(&catalog.skills).unwrap();
    let frontend = text.find("\"frontend\"").unwrap();
    let tools = text.find("\"tools\"").unwrap();
    let mobile = text.find("\"mobile\"").unwrap();
    assert!(frontend < tools && tools < mobile);
  }

  #[test]
  fn duplicate_project_ids_are_rejected() {
    let text = r#"
      title = "t"
      [[projects]]
      id = "1"
      title = "a"
      description = "a"
      technologies = []
      category = "c"
      [[projects]]
      id = "1"
      title = "b"
      description = "b"
      technologies = []
      category = "c"
    "#;
    let err = Catalog::from_toml(text).unwrap_err();
    assert!(matches!(err, Error::DuplicateProject(id) if id == "1"));
  }

  #[test]
  fn skill_levels_above_100_are_rejected() {
    let text = r#"
      title = "t"
      [[skills]]
      category = "x"
      entries = [{ name = "Rust", level = 140, years = 1 }]
    "#;
    assert!(matches!(
      Catalog::from_toml(text),
      Err(Error::SkillLevel { level: 140, .. })
    ));
  }

  #[test]
  fn missing_catalog_file_is_an_io_error() {
    let err = Catalog::load("/nonexistent/catalog.toml").unwrap_err();
    assert!(matches!(err, Error::CatalogIo { .. }));
  }
}
