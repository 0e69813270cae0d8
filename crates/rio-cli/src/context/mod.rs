mod app_context;
mod backend;

pub use app_context::AppContext;
pub use backend::AnyBackend;
