/// View builders for the viewer window
///
/// - sidebar.rs: thumbnail list, one tile per catalog page
/// - page_view.rs: the zoomable full-size page

pub mod page_view;
pub mod sidebar;
