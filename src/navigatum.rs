use crate::error::{Error, Result};
use log::{debug, info};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

lazy_static! {
    static ref ROOM_NUMBER: Regex = Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap();
}

pub const DEFAULT_BASE_URL: &str = "https://nav.tum.de";
const SEARCH_PATH: &str = "api/search";

pub struct NavigatumClient {
    search_url: Url,
}

impl NavigatumClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // `join` replaces the last path segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(NavigatumClient {
            search_url: base_url.join(SEARCH_PATH)?,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Resolves the first room number mentioned in `message` to a room id.
    ///
    /// `Ok(None)` means nothing was found: no room number in the message, or
    /// no usable `rooms` hit. No request is sent when the message carries no
    /// room number.
    pub async fn find_room_id(
        &self,
        http_client: &Client,
        message: &str,
    ) -> Result<Option<String>> {
        let room_number = match extract_room_number(message) {
            Some(room_number) => room_number,
            None => return Ok(None),
        };
        debug!("Extracted room number {}.", room_number);

        let result = self.search(http_client, room_number).await?;
        Ok(result.first_room_id().map(str::to_string))
    }

    pub async fn search(&self, http_client: &Client, query: &str) -> Result<SearchResult> {
        info!("GET {} q={}", self.search_url, query);
        let response = http_client
            .get(self.search_url.clone())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(Error::from)?
            .error_for_status()?;
        let text = response.text().await?;
        let result: SearchResult = serde_json::from_str(&text)?;
        Ok(result)
    }
}

impl Default for NavigatumClient {
    fn default() -> Self {
        NavigatumClient::new(DEFAULT_BASE_URL).expect("Malformed default base url.")
    }
}

/// Looks the message up against the public NavigaTUM instance.
pub async fn find_room_id(http_client: &Client, message: &str) -> Result<Option<String>> {
    NavigatumClient::default()
        .find_room_id(http_client, message)
        .await
}

/// Returns the leftmost `<digits>.<digits>.<digits>` token in `message`.
pub fn extract_room_number(message: &str) -> Option<&str> {
    ROOM_NUMBER.find(message).map(|m| m.as_str())
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
pub struct Section {
    pub facet: Facet,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Rooms,
    SitesBuildings,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: Option<String>,
}

impl SearchResult {
    pub fn rooms(&self) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.facet == Facet::Rooms)
    }

    pub fn first_room_id(&self) -> Option<&str> {
        let rooms = self.rooms()?;
        debug!("Rooms section has {} entries.", rooms.entries.len());
        rooms.entries.first().and_then(|entry| entry.id.as_deref())
    }
}
