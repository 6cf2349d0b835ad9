pub mod api;
pub mod api_utils;
pub mod collection_list;
pub mod components;
pub mod date_utils;
pub mod filter_dialog;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod page_frame;
pub mod state;
