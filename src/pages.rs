pub(crate) mod deal_pages;
pub(crate) mod deal_view;
pub(crate) mod templates;
