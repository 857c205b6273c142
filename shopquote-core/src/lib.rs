pub mod builder;
pub mod error;
pub mod estimator;
pub mod logger;
pub mod pagination;
pub mod pricing;
