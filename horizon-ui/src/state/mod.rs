//! Page State
//!
//! The composed page is immutable; it is provided once as context.

use horizon::DashboardPage;
use leptos::*;

pub fn provide_page(page: DashboardPage) {
    provide_context(store_value(page));
}

/// The composed page provided by `App`
pub fn use_page() -> StoredValue<DashboardPage> {
    use_context::<StoredValue<DashboardPage>>().expect("DashboardPage not found")
}
