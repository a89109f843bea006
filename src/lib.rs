pub mod backend;
pub mod config;
pub mod metrics;
pub mod poller;
pub mod view;
pub mod web;
