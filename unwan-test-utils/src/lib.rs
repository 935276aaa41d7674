pub mod constant;
pub mod error;
pub mod factory;
pub mod mock;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        factory, test_setup_with_geo_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
