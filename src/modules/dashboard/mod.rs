pub mod display;
pub mod view;

pub use view::Dashboard;
