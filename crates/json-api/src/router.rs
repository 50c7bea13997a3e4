//! App Router

use salvo::Router;

use crate::{
    auth, checkins, customers, dashboard, events, healthcheck, leaderboard, orders, products,
    reports, roles, users,
};

/// Every API route: the public shop-facing routes plus the admin subtree.
pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(public_router())
        .push(
            Router::with_path("admin")
                .push(Router::with_path("login").post(auth::login::handler))
                .push(admin_router()),
        )
}

fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("events")
                .get(events::open::handler)
                .push(
                    Router::with_path("{event}")
                        .get(events::get::handler)
                        .push(Router::with_path("checkins").post(checkins::create::handler))
                        .push(Router::with_path("orders").post(orders::create::handler))
                        .push(Router::with_path("leaderboard").get(leaderboard::handler::handler)),
                ),
        )
        .push(Router::with_path("products").get(products::active::handler))
}

fn admin_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("logout").post(auth::logout::handler))
        .push(
            Router::with_path("events")
                .get(events::index::handler)
                .post(events::create::handler)
                .push(
                    Router::with_path("{event}")
                        .get(events::get::handler)
                        .put(events::update::handler)
                        .delete(events::delete::handler)
                        .push(Router::with_path("orders").get(orders::index::handler))
                        .push(Router::with_path("checkins").get(checkins::index::handler)),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("customers")
                .get(customers::index::handler)
                .post(customers::create::handler)
                .push(
                    Router::with_path("{customer}")
                        .get(customers::get::handler)
                        .put(customers::update::handler)
                        .delete(customers::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders/{order}")
                .get(orders::get::handler)
                .delete(orders::delete::handler),
        )
        .push(Router::with_path("dashboard/{event}").get(dashboard::handler::handler))
        .push(
            Router::with_path("reports")
                .push(Router::with_path("orders").get(reports::order_rows::handler))
                .push(Router::with_path("orders.csv").get(reports::order_export::handler))
                .push(Router::with_path("checkins").get(reports::checkin_rows::handler))
                .push(Router::with_path("checkins.csv").get(reports::checkin_export::handler)),
        )
        .push(
            Router::with_path("roles")
                .get(roles::index::handler)
                .post(roles::create::handler)
                .push(
                    Router::with_path("{role}")
                        .put(roles::update::handler)
                        .delete(roles::delete::handler),
                ),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(Router::with_path("{user}").delete(users::delete::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use showfloor_app::{auth::AuthServiceError, domain::events::records::EventUuid};

    use crate::{
        events::EventResponse,
        test_helpers::{Mocks, make_event, principal},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_public_routes_need_no_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_list_open_events()
            .once()
            .return_once(|_| Ok(vec![]));

        mocks.auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com/events")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_routes_need_a_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.events.expect_list_events().never();

        let res = TestClient::get("http://example.com/admin/events")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_is_reachable_without_a_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/admin/login")
            .json(&serde_json::json!({ "username": "admin", "password": "wrong" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_event_route_uses_session_permissions() -> TestResult {
        let uuid = EventUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(principal(&["event:read"])));

        mocks
            .events
            .expect_get_event()
            .once()
            .return_once(move |_| Ok(make_event(uuid)));

        let mut res = TestClient::get(format!("http://example.com/admin/events/{uuid}"))
            .add_header("authorization", "Bearer sf_v1_token", true)
            .send(&make_service(mocks))
            .await;

        let body: EventResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }
}
