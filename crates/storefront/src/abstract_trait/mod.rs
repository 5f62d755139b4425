mod auth;
mod backend;
mod eater_view;
mod maker_view;
mod meal;
mod order;
mod profile;
mod review;
mod session;
mod summary;

pub use self::auth::{AuthClientTrait, DynAuthClient};
pub use self::backend::{BackendHealthTrait, DynBackendHealth};
pub use self::eater_view::{DynEaterViewService, EaterViewServiceTrait};
pub use self::maker_view::{DynMakerViewService, MakerViewServiceTrait};
pub use self::meal::{DynMealClient, MealClientTrait};
pub use self::order::{DynOrderClient, OrderClientTrait};
pub use self::profile::{DynProfileClient, ProfileClientTrait};
pub use self::review::{DynReviewClient, ReviewClientTrait};
pub use self::session::{DynSessionStore, SessionStoreTrait};
pub use self::summary::{DynOrderSummaryService, OrderSummaryServiceTrait};
