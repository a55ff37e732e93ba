//! API service modules for BackMarket endpoints.
//!
//! Each service covers one resource of the seller API. Methods check their
//! required identifiers locally, fill the endpoint template and hand off
//! to the shared executor.

mod categories;
mod listings;
mod orders;
mod tasks;

pub use categories::CategoriesService;
pub use listings::ListingsService;
pub use orders::OrdersService;
pub use tasks::TasksService;

/// Replace `placeholder` in `template` with `id`, verbatim.
///
/// No percent-encoding is applied: identifiers must already be path-safe.
fn endpoint(template: &str, placeholder: &str, id: &str) -> String {
    template.replace(placeholder, id)
}
