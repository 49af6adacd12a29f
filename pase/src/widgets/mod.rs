pub(crate) mod account;
pub(crate) mod login;
pub(crate) mod menu;
pub(crate) mod register;
pub(crate) mod toast;
