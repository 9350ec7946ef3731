//! Route access gate.
//!
//! Runs once per incoming request, in fixed order: read the current session,
//! refresh it if valid, classify the path, then forward or redirect. The gate
//! itself never fails: a cookie that does not decode is simply "no session",
//! so admin paths fail closed and public paths fail open. Exempt paths (API,
//! static assets, health) bypass the gate entirely and are never redirected.

use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::config::routes::RouteClass;
use crate::session::cookie::read_session;
use crate::session::refresh::refreshed_session_cookie;
use crate::state::app_state::AppState;

/// Outcome of the gate for one request. Always exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Forward,
    RedirectToLogin,
    RedirectToAdminHome,
}

/// The decision table over (route class, session validity).
///
/// Admin protection takes precedence when prefix lists overlap: a path that
/// is both admin-protected and auth-only is treated as admin-protected.
pub fn decide(class: RouteClass, session_valid: bool) -> GateDecision {
    if class.admin_protected {
        return if session_valid {
            GateDecision::Forward
        } else {
            GateDecision::RedirectToLogin
        };
    }
    if class.auth_only {
        // Already-logged-in users should not see login forms.
        return if session_valid {
            GateDecision::RedirectToAdminHome
        } else {
            GateDecision::Forward
        };
    }
    GateDecision::Forward
}

pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware { service }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                // Without state there is nothing to gate on.
                let fut = self.service.call(req);
                return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
            }
        };

        let path = req.path().to_string();
        if state.routes.is_exempt(&path) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        // The routing decision is made from the pre-refresh validity check;
        // a refresh failure never changes it.
        let session = read_session(req.request(), &state.security);
        let refreshed = session.as_ref().and_then(|claims| {
            refreshed_session_cookie(claims, SystemTime::now(), &state.security)
                .map_err(|e| warn!(error = %e, "session refresh failed"))
                .ok()
        });

        let decision = decide(state.routes.classify(&path), session.is_some());

        if let Some(claims) = session {
            req.extensions_mut().insert(claims);
        }

        match decision {
            GateDecision::Forward => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_left_body();
                    if let Some(cookie) = refreshed {
                        if let Err(e) = res.response_mut().add_cookie(&cookie) {
                            warn!(error = %e, "failed to attach refreshed session cookie");
                        }
                    }
                    Ok(res)
                })
            }
            GateDecision::RedirectToLogin | GateDecision::RedirectToAdminHome => {
                let target = match decision {
                    GateDecision::RedirectToLogin => state.routes.login_path.clone(),
                    _ => state.routes.admin_home.clone(),
                };
                let (request, _payload) = req.into_parts();
                Box::pin(async move {
                    let mut response = HttpResponse::SeeOther()
                        .insert_header((header::LOCATION, target))
                        .finish();
                    if let Some(cookie) = refreshed {
                        if let Err(e) = response.add_cookie(&cookie) {
                            warn!(error = %e, "failed to attach refreshed session cookie");
                        }
                    }
                    Ok(ServiceResponse::new(
                        request,
                        response.map_into_right_body(),
                    ))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decide, GateDecision};
    use crate::config::routes::RouteClass;

    fn class(admin_protected: bool, auth_only: bool) -> RouteClass {
        RouteClass {
            admin_protected,
            auth_only,
        }
    }

    #[test]
    fn decision_table_is_exhaustive_and_unique() {
        // (admin, auth, session) -> expected outcome, one row each
        let table = [
            (true, false, false, GateDecision::RedirectToLogin),
            (true, false, true, GateDecision::Forward),
            (false, true, true, GateDecision::RedirectToAdminHome),
            (false, true, false, GateDecision::Forward),
            (false, false, true, GateDecision::Forward),
            (false, false, false, GateDecision::Forward),
        ];
        for (admin, auth, session, expected) in table {
            assert_eq!(
                decide(class(admin, auth), session),
                expected,
                "admin={admin} auth={auth} session={session}"
            );
        }
    }

    #[test]
    fn admin_takes_precedence_over_auth_only() {
        // Overlapping prefix lists: admin rule wins in both session states.
        assert_eq!(
            decide(class(true, true), false),
            GateDecision::RedirectToLogin
        );
        assert_eq!(decide(class(true, true), true), GateDecision::Forward);
    }

    #[test]
    fn admin_without_session_always_fails_closed() {
        for auth in [false, true] {
            assert_eq!(
                decide(class(true, auth), false),
                GateDecision::RedirectToLogin
            );
        }
    }
}
