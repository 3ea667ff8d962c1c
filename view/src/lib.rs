pub mod about;
pub mod search;
pub mod sidebar;
pub mod time;

pub use search::{SearchInput, SearchState, SearchView};
pub use sidebar::{Sidebar, SidebarInput, SidebarTab, SidebarView};
pub use time::{from_now, parse_backend_timestamp, TimestampError};
