use crate::util::get_url;
use chrono::{DateTime, Utc};
use pyo3::pyclass;
use serde::Deserialize;

#[pyclass(get_all)]
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    /// Album id
    pub id: u64,
    pub title: String,
    /// Release date, if the album has been released.
    /// Pre-orders have no date yet.
    pub release_date: Option<DateTime<Utc>>,
    // Raw bandcamp field, renamed on the way in
    #[serde(rename = "tralbum_artist")]
    pub artist: String,

    pub tracks: Vec<AlbumTrack>,
    pub tags: Vec<AlbumTag>,
    pub price: Option<f32>,
}

#[pyclass(get_all)]
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTrack {
    pub track_id: u64,
    pub title: String,
    /// Duration in seconds
    pub duration: f32,
    pub number: Option<u32>,
}

#[pyclass(get_all)]
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTag {
    pub name: String,
    pub normalized_name: String,
}

pub fn fetch_album(artist_id: u64, album_id: u64) -> Result<Album, crate::Error> {
    let url = format!("https://bandcamp.com/api/mobile/25/tralbum_details?band_id={artist_id}&tralbum_id={album_id}&tralbum_type=a");
    let (body, _) = get_url(url)?;
    serde_json::from_str(&body).map_err(Into::into)
}
