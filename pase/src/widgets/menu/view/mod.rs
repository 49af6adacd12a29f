pub(crate) mod brand_bar;
pub(crate) mod nav_bar;
pub(crate) mod tab_header;
