use pyo3::pyclass;
use std::collections::HashMap;

#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub bio: Option<String>,
    pub sites: Vec<ArtistSite>,
    /// Discography keyed by item type
    pub discography: HashMap<String, Vec<u64>>,
}

#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct ArtistSite {
    pub url: String,
    pub title: String,
}

impl Artist {
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}
