pub mod arrow_button;
pub mod article;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod settings_panel;

pub use arrow_button::*;
pub use article::*;
pub use button::*;
pub use radio_group::*;
pub use select::*;
pub use separator::*;
pub use settings_panel::*;
