pub mod a001_lead;
pub mod a002_install;
pub mod a003_service;
pub mod a004_stock_item;
