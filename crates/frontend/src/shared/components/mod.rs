pub mod delete_form;
pub mod insert_form;
pub mod query_runner;
pub mod table_view;
pub mod ui;
pub mod update_form;
