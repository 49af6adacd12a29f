pub(crate) mod fonts;
pub(crate) mod form;
pub(crate) mod theme;
