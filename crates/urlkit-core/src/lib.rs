pub mod config;
pub mod logging;

pub mod drivers;
pub mod fetch;
pub mod health;
pub mod locale;
pub mod page;
pub mod region;
pub mod report;
pub mod sitemap;
pub mod transcode;
pub mod url_model;
