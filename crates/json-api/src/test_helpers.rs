//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date, tz::TimeZone};
use salvo::{affix_state::inject, prelude::*};

use showfloor_app::{
    auth::{MockAuthService, PermissionSet, Principal, SessionUuid},
    context::AppContext,
    domain::{
        checkins::MockCheckInsService,
        customers::{
            MockCustomersService,
            records::{CustomerRecord, CustomerUuid},
        },
        dashboard::MockDashboardService,
        events::{
            MockEventsService,
            records::{EventRecord, EventUuid},
        },
        leaderboard::MockLeaderboardService,
        orders::MockOrdersService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reports::MockReportsService,
    },
};

use crate::state::State;

/// One mock per service. A mock without expectations fails the test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub events: MockEventsService,
    pub products: MockProductsService,
    pub customers: MockCustomersService,
    pub checkins: MockCheckInsService,
    pub orders: MockOrdersService,
    pub leaderboard: MockLeaderboardService,
    pub dashboard: MockDashboardService,
    pub reports: MockReportsService,
    pub auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                events: Arc::new(self.events),
                products: Arc::new(self.products),
                customers: Arc::new(self.customers),
                checkins: Arc::new(self.checkins),
                orders: Arc::new(self.orders),
                leaderboard: Arc::new(self.leaderboard),
                dashboard: Arc::new(self.dashboard),
                reports: Arc::new(self.reports),
                auth: Arc::new(self.auth),
            },
            TimeZone::UTC,
        )
    }
}

pub(crate) fn principal(grants: &[&str]) -> Principal {
    Principal {
        session: SessionUuid::new(),
        username: "tester".to_string(),
        permissions: PermissionSet::new(grants.iter().map(ToString::to_string).collect()),
    }
}

/// A service with no signed-in admin.
pub(crate) fn public_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// A service whose requests carry an admin holding only `grants`.
pub(crate) fn service_with_grants(mocks: Mocks, grants: &[&str], route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject(principal(grants)))
            .push(route),
    )
}

/// A service whose requests carry an admin allowed to do everything.
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    service_with_grants(mocks, &["*"], route)
}

pub(crate) fn make_event(uuid: EventUuid) -> EventRecord {
    EventRecord {
        uuid,
        name: "Summer Fair".to_string(),
        description: None,
        starts_on: date(2026, 6, 1),
        ends_on: date(2026, 6, 3),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        sku: "PACK3".to_string(),
        name: "Pack 3".to_string(),
        name_local: None,
        description: None,
        description_local: None,
        image_url: None,
        pack_size: 3,
        price: 300,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid) -> CustomerRecord {
    CustomerRecord {
        uuid,
        code: "SHOP-01".to_string(),
        shop_name: "Corner Shop".to_string(),
        contact_name: None,
        phone: None,
        province: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// A storage failure as a service would report it.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
