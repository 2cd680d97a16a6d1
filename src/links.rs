//! Link construction for pagination items.
//!
//! Query strings are split on literal `&` and `=` and values are carried
//! verbatim, so a link produced here reproduces the incoming query byte for
//! byte apart from the `page` entry.

use crate::domain::types::{PageNumber, QueryParameters};

/// The current request as seen by the pagination renderer.
///
/// Holds the URL without its query (`scheme://host/path`) and the parsed
/// query parameters. Hosts build one per request and pass it in explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
    params: QueryParameters,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, params: QueryParameters) -> Self {
        Self {
            base_url: base_url.into(),
            params,
        }
    }

    /// Splits an absolute URL into base and query parameters.
    ///
    /// Anything after `#` is dropped before splitting.
    pub fn from_url(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let base_url = url.split_once('?').map_or(url, |(base, _)| base);
        Self::new(base_url, parse_query_parameters(url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// The full URL of the current request, query included when present.
    pub fn current_url(&self) -> String {
        if self.params.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}{}", self.base_url, query_string(&self.params))
        }
    }

    /// The URL of `page` with every other parameter carried over.
    pub fn url_for(&self, page: PageNumber) -> String {
        build_url(&self.base_url, &self.params, page)
    }
}

/// Serializes `params` as `?k1=v1&k2=v2`, or an empty string when there are none.
pub fn query_string(params: &QueryParameters) -> String {
    if params.is_empty() {
        return String::new();
    }

    let pairs = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>();
    format!("?{}", pairs.join("&"))
}

/// Returns `base_url` followed by `params` with `page` overridden.
pub fn build_url(base_url: &str, params: &QueryParameters, page: PageNumber) -> String {
    format!("{base_url}{}", query_string(&params.with_page(page)))
}

/// Extracts the query parameters of `url`.
///
/// A pair without `=` gets an empty value. Empty segments and pairs with an
/// empty key are skipped. When a key repeats, the last value wins.
pub fn parse_query_parameters(url: &str) -> QueryParameters {
    match url.split_once('?') {
        Some((_, query)) => parse_query(query),
        None => QueryParameters::new(),
    }
}

/// Parses a raw query string (without the leading `?`).
pub fn parse_query(query: &str) -> QueryParameters {
    let mut params = QueryParameters::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => {
                log::debug!("Query parameter `{pair}` has no value, using an empty string");
                (pair, "")
            }
        };
        if key.is_empty() {
            log::debug!("Skipping query parameter with empty key: `{pair}`");
            continue;
        }
        params.insert(key, value);
    }

    params
}

#[cfg(feature = "server")]
mod extract {
    use std::future::{Ready, ready};

    use actix_web::dev::Payload;
    use actix_web::{FromRequest, HttpRequest};

    use super::{RequestContext, parse_query};

    impl From<&HttpRequest> for RequestContext {
        fn from(req: &HttpRequest) -> Self {
            let base_url = {
                let info = req.connection_info();
                format!("{}://{}{}", info.scheme(), info.host(), req.path())
            };
            RequestContext::new(base_url, parse_query(req.query_string()))
        }
    }

    impl FromRequest for RequestContext {
        type Error = actix_web::Error;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
            ready(Ok(RequestContext::from(req)))
        }
    }
}
