pub mod app_builder;

#[allow(unused_imports)]
pub use app_builder::{create_gated_app, create_test_app};

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
