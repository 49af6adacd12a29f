pub(crate) mod account_form;
