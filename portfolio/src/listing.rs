//! Project listing view: mounted records plus the current page.

use std::path::Path;

use serde::Serialize;

use crate::core::paging::{
    PAGE_SIZE, PageButton, Pagination, page, page_buttons, shows_controls, total_pages,
};
use crate::io::catalog_store;
use crate::project::Project;

/// Serializable snapshot of one page of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub projects: Vec<Project>,
    /// `None` when the page controls are hidden.
    pub controls: Option<Vec<PageButton>>,
}

impl ListingPage {
    pub fn build(records: &[Project], page_number: usize, page_size: usize) -> Self {
        let total = total_pages(records.len(), page_size);
        let controls =
            shows_controls(records.len(), page_size).then(|| page_buttons(total, page_number));
        Self {
            page: page_number,
            total_pages: total,
            page_size,
            total_records: records.len(),
            projects: page(records, page_number, page_size).to_vec(),
            controls,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListing {
    projects: Vec<Project>,
    pagination: Pagination,
}

impl ProjectListing {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            pagination: Pagination::default(),
        }
    }

    /// Load the initial records (bundled list when `source` is `None`).
    pub fn mount(source: Option<&Path>) -> Self {
        Self::new(catalog_store::mount(source))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.projects.len(), PAGE_SIZE)
    }

    pub fn visible(&self) -> &[Project] {
        page(&self.projects, self.current_page(), PAGE_SIZE)
    }

    pub fn controls(&self) -> Option<Vec<PageButton>> {
        shows_controls(self.projects.len(), PAGE_SIZE)
            .then(|| page_buttons(self.total_pages(), self.current_page()))
    }

    pub fn set_page(&mut self, page_number: usize) {
        self.pagination.set_page(page_number);
    }

    pub fn find(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.title == title)
    }

    pub fn snapshot(&self) -> ListingPage {
        ListingPage::build(&self.projects, self.current_page(), PAGE_SIZE)
    }
}
