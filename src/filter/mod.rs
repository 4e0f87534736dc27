pub mod mage_filter;

pub use mage_filter::MageFilter;
