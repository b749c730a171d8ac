pub mod catalog_service;
pub mod inquiry_service;
pub mod locale_service;
pub mod pricing_service;
