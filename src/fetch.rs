//! Article retrieval from the Wiktionary API.
//!
//! A thin blocking client over the MediaWiki `opensearch` and `parse`
//! actions. Response decoding is split into pure functions
//! ([`parse_opensearch`], [`parse_article_response`]) so it can be tested
//! without a network.
//!
//! Enabled by the `fetch` feature (on by default).

use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::extractor;
use crate::language::Language;
use crate::options::Options;
use crate::result::{Article, WordInfo};

/// Blocking Wiktionary API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    options: Options,
}

impl Client {
    /// Creates a client with default [`Options`].
    pub fn new() -> Result<Self> {
        Self::with_options(Options::default())
    }

    /// Creates a client with custom [`Options`].
    pub fn with_options(options: Options) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(Self { http, options })
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Titles matching `query` in the given language edition.
    #[instrument(skip(self))]
    pub fn search_words_for_language(&self, query: &str, language: &str) -> Result<Vec<String>> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let language: Language = language.parse()?;

        let limit = self.options.search_limit.to_string();
        let url = api_url(
            &self.options.api_url_template,
            language,
            &[
                ("action", "opensearch"),
                ("format", "json"),
                ("search", query),
                ("limit", &limit),
            ],
        )?;

        parse_opensearch(&self.get(url)?)
    }

    /// Titles matching `query` in the English edition.
    pub fn search_words(&self, query: &str) -> Result<Vec<String>> {
        self.search_words_for_language(query, Language::English.code())
    }

    /// Rendered article for `word` in the given language edition.
    #[instrument(skip(self))]
    pub fn retrieve_article_for_language(&self, word: &str, language: &str) -> Result<Article> {
        let language: Language = language.parse()?;
        if word.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }

        let url = api_url(
            &self.options.api_url_template,
            language,
            &[
                ("action", "parse"),
                ("format", "json"),
                ("page", word),
                ("prop", "text"),
                ("formatversion", "2"),
            ],
        )?;

        parse_article_response(&self.get(url)?, language)
    }

    /// Rendered article for `word` in the English edition.
    pub fn retrieve_article(&self, word: &str) -> Result<Article> {
        self.retrieve_article_for_language(word, Language::English.code())
    }

    /// Retrieve the article for `word` and extract it.
    pub fn fetch_and_parse(&self, word: &str, language: &str) -> Result<(Article, WordInfo)> {
        let article = self.retrieve_article_for_language(word, language)?;
        let info = extractor::extract(&article)?;
        Ok((article, info))
    }

    fn get(&self, url: Url) -> Result<String> {
        debug!(%url, "requesting");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| Error::Request(format!("error while querying data: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Request(format!("unexpected status code: {}", status.as_u16())));
        }

        response
            .text()
            .map_err(|e| Error::Request(format!("error while reading the response: {e}")))
    }
}

/// Build the API URL for `language` with the given query parameters.
///
/// ```rust
/// use rs_wiktionary::fetch::api_url;
/// use rs_wiktionary::{Language, options::DEFAULT_API_URL_TEMPLATE};
///
/// let url = api_url(DEFAULT_API_URL_TEMPLATE, Language::German, &[("page", "Bäume")])?;
/// assert_eq!(url.as_str(), "https://de.wiktionary.org/w/api.php?page=B%C3%A4ume");
/// # Ok::<(), rs_wiktionary::Error>(())
/// ```
pub fn api_url(template: &str, language: Language, params: &[(&str, &str)]) -> Result<Url> {
    let base = template.replace("{lang}", language.code());
    Url::parse_with_params(&base, params)
        .map_err(|e| Error::Request(format!("error parsing URL {base:?}: {e}")))
}

/// Decode an `opensearch` response: `[query, [titles], [descriptions], [urls]]`.
///
/// Non-string titles are skipped.
pub fn parse_opensearch(body: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::UnexpectedResponse(format!("error while parsing JSON: {e}")))?;

    let suggestions = value
        .get(1)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| {
            Error::UnexpectedResponse("error while extracting the suggestions".to_string())
        })?;

    let words: Vec<String> = suggestions
        .iter()
        .filter_map(serde_json::Value::as_str)
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(Error::NoSuggestions);
    }

    Ok(words)
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    parse: Option<ParsedPage>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    #[serde(default)]
    title: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

/// Decode a `parse` response (`formatversion=2`) into an [`Article`].
pub fn parse_article_response(body: &str, language: Language) -> Result<Article> {
    let response: ParseResponse = serde_json::from_str(body)
        .map_err(|e| Error::UnexpectedResponse(format!("error decoding response: {e}")))?;

    if let Some(error) = response.error.filter(|e| !e.info.is_empty()) {
        return Err(Error::Api {
            code: error.code,
            info: error.info,
        });
    }

    let page = response
        .parse
        .ok_or_else(|| Error::UnexpectedResponse("response has no parse section".to_string()))?;

    Ok(Article {
        title: page.title,
        html: page.text,
        language: language.code().to_string(),
    })
}
