pub mod app;
pub mod config;
pub mod format;
pub mod ignore;
pub mod paths;
pub mod render;
pub mod scanner;
pub mod scope;
pub mod sink;
pub mod tree;
