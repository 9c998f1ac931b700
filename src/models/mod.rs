pub mod activity_log;
pub mod inventory_item;
pub mod notification;
pub mod user;

pub use activity_log::*;
pub use inventory_item::*;
pub use notification::*;
pub use user::*;
