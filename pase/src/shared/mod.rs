pub(crate) mod ui;
pub(crate) mod validation;
