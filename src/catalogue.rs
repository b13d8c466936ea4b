//! Project cards and filter buttons, embedded from `content/projects.json`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::filter::Filter;

const PROJECTS_JSON: &str = include_str!("../content/projects.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("invalid catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("filter tag {0:?} is declared more than once")]
    DuplicateFilter(String),

    #[error("project category {0:?} has no filter button")]
    UnfilteredCategory(String),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Catalogue {
    pub filters: Vec<FilterButton>,
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FilterButton {
    pub tag: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: String,
}

impl FilterButton {
    pub fn filter(&self) -> Filter {
        Filter::parse(&self.tag)
    }
}

impl Catalogue {
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_json(PROJECTS_JSON)
    }

    /// Parses and validates a catalogue. Filter tags must be unique so at
    /// most one button can match the active filter, and every project
    /// category needs a button.
    pub fn from_json(source: &str) -> Result<Self, CatalogueError> {
        let catalogue: Self = serde_json::from_str(source)?;

        let mut tags = HashSet::new();
        for button in &catalogue.filters {
            if !tags.insert(button.tag.as_str()) {
                return Err(CatalogueError::DuplicateFilter(button.tag.clone()));
            }
        }

        if let Some(project) = catalogue
            .projects
            .iter()
            .find(|project| !tags.contains(project.category.as_str()))
        {
            return Err(CatalogueError::UnfilteredCategory(project.category.clone()));
        }

        Ok(catalogue)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(|project| project.category.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_filter;

    #[test]
    fn builtin_catalogue_parses() {
        let catalogue = Catalogue::builtin().expect("embedded catalogue");
        assert!(!catalogue.projects.is_empty());
        assert_eq!(catalogue.filters[0].filter(), Filter::All);
    }

    #[test]
    fn duplicate_filter_tags_are_rejected() {
        let source = r#"{
            "filters": [
                { "tag": "all", "label": "All" },
                { "tag": "ml", "label": "ML" },
                { "tag": "ml", "label": "Machine Learning" }
            ],
            "projects": []
        }"#;
        let err = Catalogue::from_json(source).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateFilter(ref tag) if tag == "ml"));
    }

    #[test]
    fn each_filter_matches_exactly_one_button() {
        let catalogue = Catalogue::builtin().expect("embedded catalogue");
        for button in &catalogue.filters {
            let active = catalogue
                .filters
                .iter()
                .filter(|other| other.filter() == button.filter())
                .count();
            assert_eq!(active, 1, "{}", button.tag);
        }
    }

    #[test]
    fn categories_without_a_button_are_rejected() {
        let source = r#"{
            "filters": [{ "tag": "all", "label": "All" }],
            "projects": [{
                "title": "Dashboard",
                "description": "KPIs",
                "category": "viz",
                "link": "https://example.com"
            }]
        }"#;
        let err = Catalogue::from_json(source).unwrap_err();
        assert!(matches!(err, CatalogueError::UnfilteredCategory(ref category) if category == "viz"));
    }

    #[test]
    fn ml_button_selects_only_ml_projects() {
        let catalogue = Catalogue::builtin().expect("embedded catalogue");
        let outcome = apply_filter(&Filter::parse("ml"), &catalogue.categories());
        for (card, project) in outcome.cards.iter().zip(&catalogue.projects) {
            assert_eq!(card.visible, project.category == "ml");
        }
        assert!(outcome.visible_count > 0);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = Catalogue::from_json(r#"{"filters": [], "projects": [{"title": "x"}]}"#);
        assert!(matches!(err, Err(CatalogueError::Parse(_))));
    }
}
