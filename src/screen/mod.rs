pub mod actions;
pub mod field_model;
pub mod form;
pub mod naming;
pub mod routes;
pub mod screen_model;
pub mod table;
pub mod validation;
