pub mod archived_sidebar;

pub use archived_sidebar::ArchivedComplaintSidebar;
