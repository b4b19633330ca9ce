use pyo3::pyclass;

#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct ImageId {
    pub id: u64,
}

pub enum SearchResultItem {
    Artist(SearchResultItemArtist),
    Album(SearchResultItemAlbum),
}

#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct SearchResultItemArtist {
    pub id: u64,
    pub name: String,
    pub image: Option<ImageId>,
}

#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct SearchResultItemAlbum {
    pub id: u64,
    pub name: String,
    pub artist_name: String,
}
