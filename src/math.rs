pub mod integration;

pub use integration::{
    integrate, integrate_with_config, integrate_with_fixed_pool, Constant, IntegrationConfig,
    IntegrationResult, ScalarFunction,
};
