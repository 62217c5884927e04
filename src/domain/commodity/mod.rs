//! Commodity domain module
//!
//! Commodities are the catalog items. Each carries the per-user ratings it
//! has received; its average rating is derived from them on every read.

mod entity;
mod filter;
mod validation;

pub use entity::{Commodity, CommodityId, UserRating};
pub use filter::{CommodityFilter, SearchOption};
pub use validation::{
    parse_rating, validate_commodity_id, validate_commodity_name, validate_price,
    CommodityValidationError, MAX_RATING, MIN_RATING,
};
