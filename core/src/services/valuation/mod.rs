//! Fare estimation from driving distance and city price rules

mod service;

pub use service::{DrivingInfoProvider, ValuationService};
