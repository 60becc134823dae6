pub mod dataset_service;
pub mod pager_service;
