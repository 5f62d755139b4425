mod maker;
mod meal;
mod order;
mod profile;
mod review;
mod user;

pub use self::maker::MakerListing;
pub use self::meal::{CreateMeal, Meal};
pub use self::order::{CreateOrder, Order, OrderStatus, OrderTab, PriceValue, UpdateOrderStatus};
pub use self::profile::{EaterProfile, MakerProfile, Profile};
pub use self::review::{CreateReview, Review, ReviewReply, ReviewSnippet};
pub use self::user::{AuthUser, RegisterUser, Role, Session, eater_display_name, email_local_part};
