//! In-memory project store.
//!
//! Holds projects in insertion order. Ids are assigned as one past the
//! current maximum, so an id freed by deleting the newest project may be
//! handed out again. The store itself is not synchronized; callers share it
//! behind a lock.

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::project::{NewProject, Project, ProjectPatch};

/// Ordered collection of projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the two sample projects.
    pub fn with_samples() -> Self {
        Self {
            projects: sample_projects(),
        }
    }

    /// Number of stored projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Whether a project with `id` exists.
    pub fn contains(&self, id: u64) -> bool {
        self.projects.iter().any(|p| p.id == id)
    }

    /// List projects in insertion order, optionally restricted to a category.
    pub fn list(&self, category: Option<&str>) -> Vec<Project> {
        match category {
            Some(category) => self
                .projects
                .iter()
                .filter(|p| p.in_category(category))
                .cloned()
                .collect(),
            None => self.projects.clone(),
        }
    }

    /// Look up a project by id.
    pub fn get(&self, id: u64) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Append a new project built from `input`.
    ///
    /// Fails with [`StoreError::InvalidInput`] when the title is missing or empty.
    pub fn create(&mut self, mut input: NewProject) -> Result<Project> {
        let title = match input.title.take() {
            Some(title) if !title.is_empty() => title,
            _ => return Err(StoreError::InvalidInput),
        };

        let project = Project::from_new(self.next_id(), title, input);
        debug!("Created project {}", project.id);
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Apply `patch` to the project with `id` and return the result.
    pub fn update(&mut self, id: u64, patch: ProjectPatch) -> Result<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;

        project.apply(patch);
        debug!("Updated project {}", id);
        Ok(project.clone())
    }

    /// Remove the project with `id`, keeping the others in order.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;

        self.projects.remove(index);
        debug!("Deleted project {}", id);
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.projects.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }
}

/// The fixed records a fresh daemon starts with.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Ocean Dreams".to_string(),
            description: "A series of paintings exploring the depths of the ocean.".to_string(),
            category: "Painting".to_string(),
            date_created: "2025-01-15".to_string(),
            featured: true,
            images: vec!["ocean1.jpg".to_string(), "ocean2.jpg".to_string()],
        },
        Project {
            id: 2,
            title: "Urban Landscapes".to_string(),
            description: "Photography project capturing city life.".to_string(),
            category: "Photography".to_string(),
            date_created: "2024-11-20".to_string(),
            featured: false,
            images: vec!["urban1.jpg".to_string()],
        },
    ]
}
