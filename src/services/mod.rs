pub mod pricing;
pub mod theater;

pub use pricing::PricingPolicy;
pub use theater::Theater;
