//! UI Components
//!
//! Leptos components that project composed page fragments into the DOM.

pub mod card;
pub mod chart_panel;
pub mod promo;
pub mod sidebar;
pub mod stat_grid;
pub mod tables;
pub mod tag;
pub mod tasks;
pub mod team;
pub mod topbar;

pub use card::Card;
pub use chart_panel::ChartPanel;
pub use promo::PromoBody;
pub use sidebar::Sidebar;
pub use stat_grid::StatGrid;
pub use tables::{CheckTable, ComplexTable};
pub use tag::Tag;
pub use tasks::TaskList;
pub use team::TeamRoster;
pub use topbar::Topbar;
