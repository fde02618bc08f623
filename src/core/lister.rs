use crate::domain::model::{CharacterRef, Film, FilmId};
use crate::domain::ports::{ConfigProvider, FilmTransport};
use crate::utils::error::{Result, SwapiError};
use serde_json::Value;
use std::io::Write;

pub const CHARACTERS_FIELD: &str = "characters";

pub struct FilmCharacterLister<T: FilmTransport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: FilmTransport, C: ConfigProvider> FilmCharacterLister<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    /// Plain concatenation of the base URL and the identifier.
    pub fn film_url(&self, film_id: &FilmId) -> String {
        format!("{}{}", self.config.base_url(), film_id)
    }

    pub async fn fetch_film(&self, film_id: &FilmId) -> Result<Film> {
        let url = self.film_url(film_id);
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            tracing::warn!("Film API answered {} for {}", response.status, url);
        }

        parse_film(&response.body)
    }

    /// Writes one character reference per line, in API order. Nothing is written
    /// unless the whole response was valid.
    pub async fn list_characters<W: Write>(&self, film_id: &FilmId, out: &mut W) -> Result<usize> {
        let film = self.fetch_film(film_id).await?;
        tracing::debug!("Film {} references {} characters", film_id, film.characters.len());

        for character in &film.characters {
            writeln!(out, "{}", character)?;
        }
        out.flush()?;

        Ok(film.characters.len())
    }
}

pub fn parse_film(body: &str) -> Result<Film> {
    let document: Value = serde_json::from_str(body)?;

    let characters = document
        .get(CHARACTERS_FIELD)
        .ok_or_else(|| SwapiError::shape(CHARACTERS_FIELD, "field is missing"))?;

    let items = characters.as_array().ok_or_else(|| {
        SwapiError::shape(
            CHARACTERS_FIELD,
            format!("expected a list, found {}", json_kind(characters)),
        )
    })?;

    let characters = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(url) => Ok(CharacterRef(url.clone())),
            other => Err(SwapiError::shape(
                &format!("{}[{}]", CHARACTERS_FIELD, index),
                format!("expected a string, found {}", json_kind(other)),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Film { characters })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
