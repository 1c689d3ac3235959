//! Session helpers so handlers never touch actix-session directly.
//!
//! The cookie stores only the numeric user id under [`USER_ID_KEY`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id, rotating the session key to
    /// prevent fixation.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in user, if any. An id that does not decode counts as no
    /// session.
    pub fn user_id(&self) -> Option<UserId> {
        self.0
            .get::<i32>(USER_ID_KEY)
            .unwrap_or_else(|error| {
                warn!(%error, "undecodable user id in session cookie");
                None
            })
            .map(UserId::new)
    }

    /// The signed-in user or `401 Unauthorized`. Guards every write endpoint.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every value held by the session and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    session.persist_user(UserId::new(17))?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/set-invalid",
                web::get().to(|session: Session| async move {
                    session
                        .insert(USER_ID_KEY, "not-a-number")
                        .expect("set invalid user id");
                    HttpResponse::Ok()
                }),
            )
            .route(
                "/get",
                web::get().to(|session: SessionContext| async move {
                    let id = session.require_user_id()?;
                    Ok::<_, Error>(HttpResponse::Ok().body(id.to_string()))
                }),
            )
            .route(
                "/clear",
                web::get().to(|session: SessionContext| async move {
                    session.clear();
                    HttpResponse::Ok()
                }),
            )
    }

    fn session_cookie(
        res: &actix_web::dev::ServiceResponse,
    ) -> actix_web::cookie::Cookie<'static> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned()
    }

    #[actix_web::test]
    async fn round_trips_user_id() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res);

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "17");
    }

    #[actix_web::test]
    async fn missing_user_is_unauthorised() {
        let app = test::init_service(session_test_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn tampered_user_id_is_unauthorised() {
        let app = test::init_service(session_test_app()).await;

        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = session_cookie(&set_res);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn cleared_session_expires_cookie() {
        let app = test::init_service(session_test_app()).await;
        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = session_cookie(&set_res);

        let clear_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/clear")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let removal = session_cookie(&clear_res);
        assert_eq!(removal.value(), "");
    }
}
