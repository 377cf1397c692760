pub mod error;
pub mod math;

pub use error::{Error, InvalidArgument, Result};
pub use math::integration::{
    integrate, integrate_with_config, integrate_with_fixed_pool, Constant, IntegrationConfig,
    IntegrationResult, ScalarFunction,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
