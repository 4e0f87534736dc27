pub mod house;
pub mod mage;
pub mod user;

pub use house::House;
pub use mage::{Mage, MageInput, MageListEntry, MageWithHouse};
pub use user::User;
