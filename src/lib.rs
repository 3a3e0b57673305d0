//! Personal library catalog kept in a local JSON file.
//!
//! - `domain`: Book record, Catalog aggregate, repository trait
//! - `infra`: JSON file repository
//! - `application`: CatalogService (load at startup, save after every change)
//! - `interface`: interactive menu shell

pub mod config;

pub mod domain {
    pub mod error;
    pub mod repository;

    pub mod model {
        pub mod book;
        pub mod catalog;
        pub mod id;
    }
}

pub mod infra {
    pub mod json_store;
}

pub mod application {
    pub mod error;
    pub mod service;
}

pub mod interface {
    pub mod shell;
}
