//! Request locale negotiation from `Accept-Language`.

use std::future::{Ready, ready};

use actix_web::http::header::ACCEPT_LANGUAGE;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use crate::domain::Locale;
use crate::domain::ports::MessageSource;
use crate::inbound::http::state::HttpState;

/// Locale resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    pub fn locale(&self) -> &Locale {
        &self.0
    }
}

/// Parse an `Accept-Language` value into tags ordered by preference.
///
/// Entries with `q=0` or an unparsable quality are dropped; ties keep header
/// order.
fn ranked_tags(header: &str) -> Vec<&str> {
    let mut ranked: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(Some(1.0), |raw| raw.trim().parse::<f32>().ok())?;
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(tag, _)| tag).collect()
}

/// First tag in `header` that `messages` supports, else `fallback`.
pub fn negotiate(header: Option<&str>, messages: &dyn MessageSource, fallback: &Locale) -> Locale {
    header
        .map(ranked_tags)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| tag.parse::<Locale>().ok())
        .find(|locale| messages.supports(locale))
        .unwrap_or_else(|| fallback.clone())
}

impl FromRequest for RequestLocale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        let locale = match req.app_data::<web::Data<HttpState>>() {
            Some(state) => negotiate(header, state.messages.as_ref(), &state.default_locale),
            None => Locale::default(),
        };
        ready(Ok(Self(locale)))
    }
}
