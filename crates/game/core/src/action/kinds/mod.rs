pub mod craft;
pub mod feed;
pub mod harvest;
pub mod place;

pub use craft::CraftToolAction;
pub use feed::FeedBumpkinAction;
pub use harvest::{HarvestAction, HarvestCommand};
pub use place::PlaceCollectibleAction;
