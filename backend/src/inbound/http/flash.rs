//! One-shot feedback carried across a redirect.
//!
//! A mutation handler stores a single message under [`FEEDBACK_MESSAGE_KEY`]
//! in the cookie session before redirecting. The next page render takes it,
//! which removes it, so the message is shown exactly once.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::Error;

pub(crate) const FEEDBACK_MESSAGE_KEY: &str = "feedbackMessage";

/// Extractor exposing flash operations over the request session.
#[derive(Clone)]
pub struct FlashMessages(Session);

impl FlashMessages {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `message` for the next rendered page, replacing any pending one.
    pub fn push_feedback(&self, message: impl Into<String>) -> Result<(), Error> {
        self.0
            .insert(FEEDBACK_MESSAGE_KEY, message.into())
            .map_err(|error| Error::internal(format!("failed to store flash message: {error}")))
    }

    /// Remove and return the pending message, if any.
    ///
    /// Undecodable session data is discarded with a warning rather than
    /// failing the page.
    pub fn take_feedback(&self) -> Option<String> {
        match self.0.remove_as::<String>(FEEDBACK_MESSAGE_KEY)? {
            Ok(message) => Some(message),
            Err(raw) => {
                warn!(raw = %raw, "discarding malformed flash message");
                None
            }
        }
    }
}

impl FromRequest for FlashMessages {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(FlashMessages::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    use crate::inbound::http::test_utils::test_session_middleware;

    async fn show(flash: FlashMessages) -> HttpResponse {
        HttpResponse::Ok().body(flash.take_feedback().unwrap_or_default())
    }

    #[rstest]
    #[actix_web::test]
    async fn feedback_is_shown_exactly_once() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/push",
                    web::get().to(|flash: FlashMessages| async move {
                        flash.push_feedback("saved")?;
                        Ok::<_, Error>(HttpResponse::Found().finish())
                    }),
                )
                .route("/show", web::get().to(show)),
        )
        .await;

        let pushed = test::call_service(&app, test::TestRequest::get().uri("/push").to_request()).await;
        assert_eq!(pushed.status(), StatusCode::FOUND);
        let cookie = pushed
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let first = test::call_service(
            &app,
            test::TestRequest::get().uri("/show").cookie(cookie).to_request(),
        )
        .await;
        let consumed = first
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie rewritten")
            .into_owned();
        assert_eq!(test::read_body(first).await, "saved");

        let second = test::call_service(
            &app,
            test::TestRequest::get().uri("/show").cookie(consumed).to_request(),
        )
        .await;
        assert_eq!(test::read_body(second).await, "");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_feedback_is_discarded() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/tamper",
                    web::get().to(|session: Session| async move {
                        session
                            .insert(FEEDBACK_MESSAGE_KEY, 42_u32)
                            .expect("store number");
                        HttpResponse::Ok()
                    }),
                )
                .route("/show", web::get().to(show)),
        )
        .await;

        let tampered =
            test::call_service(&app, test::TestRequest::get().uri("/tamper").to_request()).await;
        let cookie = tampered
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/show").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "");
    }
}
