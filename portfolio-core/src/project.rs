//! Project model and request payloads.

use serde::{Deserialize, Serialize};

/// Category assigned when a new project does not name one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Date format used for `date_created`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single portfolio item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Unique identifier, assigned by the store
    pub id: u64,
    /// Display title (never empty)
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Category, compared case-insensitively when filtering
    pub category: String,
    /// Creation date as `YYYY-MM-DD`
    pub date_created: String,
    /// Whether the project is highlighted
    pub featured: bool,
    /// Image filenames in display order
    pub images: Vec<String>,
}

impl Project {
    /// Build a project from a creation payload, applying defaults.
    ///
    /// The caller has already checked that `title` is present.
    pub(crate) fn from_new(id: u64, title: String, input: NewProject) -> Self {
        Self {
            id,
            title,
            description: input.description.unwrap_or_default(),
            category: input
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            date_created: input.date_created.unwrap_or_else(today),
            featured: input.featured.unwrap_or(false),
            images: input.images.unwrap_or_default(),
        }
    }

    /// Whether this project belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Overwrite the fields present in `patch`.
    ///
    /// `id` and `date_created` are never touched.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }
}

/// Payload for creating a project. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    /// Required; creation fails when missing or empty
    pub title: Option<String>,
    /// Defaults to an empty string
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_CATEGORY`]
    pub category: Option<String>,
    /// Defaults to today's local date
    pub date_created: Option<String>,
    /// Defaults to false
    pub featured: Option<bool>,
    /// Defaults to no images
    pub images: Option<Vec<String>>,
}

impl NewProject {
    /// Payload carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Partial update payload. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectPatch {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement category
    pub category: Option<String>,
    /// Replacement featured flag
    pub featured: Option<bool>,
    /// Replacement image list, in display order
    pub images: Option<Vec<String>>,
}

/// Current local date formatted as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project::from_new(7, "Sketches".to_string(), NewProject::default())
    }

    #[test]
    fn test_defaults_applied() {
        let project = sample();
        assert_eq!(project.id, 7);
        assert_eq!(project.description, "");
        assert_eq!(project.category, DEFAULT_CATEGORY);
        assert!(!project.featured);
        assert!(project.images.is_empty());
        assert!(chrono::NaiveDate::parse_from_str(&project.date_created, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_supplied_date_kept() {
        let input = NewProject {
            date_created: Some("2023-03-01".to_string()),
            ..NewProject::default()
        };
        let project = Project::from_new(1, "Old".to_string(), input);
        assert_eq!(project.date_created, "2023-03-01");
    }

    #[test]
    fn test_in_category_ignores_case() {
        let mut project = sample();
        project.category = "Photography".to_string();
        assert!(project.in_category("photography"));
        assert!(project.in_category("PHOTOGRAPHY"));
        assert!(!project.in_category("Painting"));
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut project = sample();
        let date = project.date_created.clone();
        project.apply(ProjectPatch {
            featured: Some(true),
            images: Some(vec!["a.jpg".to_string()]),
            ..ProjectPatch::default()
        });
        assert!(project.featured);
        assert_eq!(project.images, vec!["a.jpg"]);
        assert_eq!(project.title, "Sketches");
        assert_eq!(project.category, DEFAULT_CATEGORY);
        assert_eq!(project.date_created, date);
        assert_eq!(project.id, 7);
    }

    #[test]
    fn test_patch_null_is_omitted() {
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"title": null, "featured": true}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.featured, Some(true));
    }

    #[test]
    fn test_patch_ignores_date_created() {
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"date_created": "1999-01-01", "id": 40}"#).unwrap();
        assert_eq!(patch, ProjectPatch::default());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "id",
            "title",
            "description",
            "category",
            "date_created",
            "featured",
            "images",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 7);
    }
}
