//! Registry API document types
//!
//! These mirror the JSON the npm registry serves. Documents are displayed
//! as-is; the only massaging here is tolerating the alternate shapes the
//! registry uses for people and repository fields.

use std::collections::HashMap;

/// Envelope returned by `GET /-/v1/search`
#[derive(serde::Deserialize)]
pub struct SearchResponse {
    pub objects: Vec<SearchObject>,
    #[serde(default)]
    pub total: u64,
}

#[derive(serde::Deserialize)]
pub struct SearchObject {
    pub package: PackageSummary,
}

/// Abbreviated package record from the search endpoint
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PackageSummary {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub author: Option<Person>,
    pub date: Option<String>,
    #[serde(default)]
    pub links: PackageLinks,
    pub publisher: Option<Publisher>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Clone, Default, Debug, serde::Deserialize)]
pub struct PackageLinks {
    pub npm: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Publisher {
    pub username: String,
}

/// Full metadata document from `GET /{packageName}`
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PackageDetails {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    #[serde(default)]
    pub versions: HashMap<String, VersionInfo>,
    /// `created`, `modified`, plus one timestamp per published version
    #[serde(default)]
    pub time: HashMap<String, String>,
    pub author: Option<Person>,
    #[serde(default)]
    pub maintainers: Vec<Person>,
    pub homepage: Option<String>,
    pub repository: Option<Repository>,
    pub bugs: Option<Bugs>,
    pub license: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Per-version entry in the `versions` map. Kept minimal; old documents
/// carry wildly inconsistent extra fields.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
}

/// The registry serves people either as `"Jane Doe <jane@example.com>"`
/// or as an object with name/email fields.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Person {
    Text(String),
    Full { name: String, email: Option<String> },
}

impl Person {
    pub fn name(&self) -> &str {
        match self {
            // Strip a trailing "<email>" from the combined form
            Person::Text(s) => s.split('<').next().unwrap_or(s).trim(),
            Person::Full { name, .. } => name,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Person::Text(_) => None,
            Person::Full { email, .. } => email.as_deref(),
        }
    }
}

/// `repository` is an object in modern documents, a bare URL in old ones
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Url(String),
    Full { url: Option<String> },
}

impl Repository {
    pub fn url(&self) -> Option<&str> {
        match self {
            Repository::Url(u) => Some(u),
            Repository::Full { url, .. } => url.as_deref(),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Bugs {
    Url(String),
    Full { url: Option<String> },
}

impl Bugs {
    pub fn url(&self) -> Option<&str> {
        match self {
            Bugs::Url(u) => Some(u),
            Bugs::Full { url, .. } => url.as_deref(),
        }
    }
}

impl PackageDetails {
    /// Latest published version: the `latest` dist-tag, falling back to
    /// the newest entry in the `time` map.
    pub fn latest_version(&self) -> Option<&str> {
        if let Some(v) = self.dist_tags.get("latest") {
            return Some(v);
        }
        self.recent_versions().first().map(|(v, _)| *v)
    }

    /// Version entries from the `time` map, newest first, as
    /// `(version, timestamp)` pairs. The registry emits uniform RFC 3339
    /// timestamps, so string order is publication order.
    pub fn recent_versions(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .time
            .iter()
            .filter(|(k, _)| k.as_str() != "created" && k.as_str() != "modified")
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
    }

    /// Dependency map of the latest version, if that version is present
    pub fn latest_dependencies(&self) -> Option<&HashMap<String, String>> {
        let latest = self.latest_version()?;
        Some(&self.versions.get(latest)?.dependencies)
    }

    pub fn created(&self) -> Option<&str> {
        self.time.get("created").map(String::as_str)
    }

    pub fn modified(&self) -> Option<&str> {
        self.time.get("modified").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_parses_both_forms() {
        let full: Person =
            serde_json::from_str(r#"{"name": "Jane Doe", "email": "jane@example.com"}"#).unwrap();
        assert_eq!(full.name(), "Jane Doe");
        assert_eq!(full.email(), Some("jane@example.com"));

        let text: Person = serde_json::from_str(r#""Jane Doe <jane@example.com>""#).unwrap();
        assert_eq!(text.name(), "Jane Doe");
        assert_eq!(text.email(), None);
    }

    #[test]
    fn repository_parses_both_forms() {
        let full: Repository =
            serde_json::from_str(r#"{"type": "git", "url": "git+https://github.com/serde-rs/json.git"}"#)
                .unwrap();
        assert_eq!(full.url(), Some("git+https://github.com/serde-rs/json.git"));

        let bare: Repository =
            serde_json::from_str(r#""https://github.com/serde-rs/json""#).unwrap();
        assert_eq!(bare.url(), Some("https://github.com/serde-rs/json"));
    }

    #[test]
    fn recent_versions_sorted_newest_first() {
        let doc: PackageDetails = serde_json::from_str(
            r#"{
                "name": "demo",
                "dist-tags": {"latest": "2.0.0"},
                "time": {
                    "created": "2020-01-01T00:00:00.000Z",
                    "modified": "2023-06-01T00:00:00.000Z",
                    "1.0.0": "2020-01-01T00:00:00.000Z",
                    "1.1.0": "2021-03-15T00:00:00.000Z",
                    "2.0.0": "2023-06-01T00:00:00.000Z"
                }
            }"#,
        )
        .unwrap();

        let recent = doc.recent_versions();
        let versions: Vec<&str> = recent.iter().map(|(v, _)| *v).collect();
        assert_eq!(versions, vec!["2.0.0", "1.1.0", "1.0.0"]);
        assert_eq!(doc.latest_version(), Some("2.0.0"));
    }

    #[test]
    fn latest_version_falls_back_to_time_map() {
        let doc: PackageDetails = serde_json::from_str(
            r#"{
                "name": "demo",
                "time": {
                    "created": "2020-01-01T00:00:00.000Z",
                    "0.1.0": "2020-01-01T00:00:00.000Z",
                    "0.2.0": "2020-05-01T00:00:00.000Z"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(doc.latest_version(), Some("0.2.0"));
    }
}
